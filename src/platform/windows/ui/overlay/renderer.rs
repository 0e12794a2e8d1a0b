//! Direct2D overlay rendering.
//!
//! Each frame is drawn into a 32-bit top-down DIB through a DC render target
//! and pushed with `UpdateLayeredWindow`, giving per-pixel alpha. The arrow's
//! state opacity (or the parked pulse) is applied as the layer's constant
//! alpha.

use std::time::Instant;

use tracing::warn;
use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_FIGURE_BEGIN_FILLED, D2D1_FIGURE_END_CLOSED,
    D2D1_PIXEL_FORMAT,
};
use windows::Win32::Graphics::Direct2D::{
    ID2D1DCRenderTarget, ID2D1Factory, ID2D1PathGeometry, ID2D1RenderTarget,
    D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_RENDER_TARGET_PROPERTIES,
    D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    AC_SRC_ALPHA, AC_SRC_OVER, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowPos, UpdateLayeredWindow, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    ULW_ALPHA,
};
use windows_numerics::Vector2;

use crate::arrow::ArrowShape;
use crate::model::constants::{ARROW_STROKE_SHADE, ARROW_STROKE_WIDTH, SHADOW_OFFSET, SHADOW_OPACITY};
use crate::model::{Point, Settings, VirtualScreen};
use crate::overlay::{OverlayRenderer, Pulse};

/// What was last pushed to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    position: Point,
    rotation: f64,
    alpha: u8,
}

/// [`OverlayRenderer`] drawing into the layered overlay window.
pub struct LayeredOverlay {
    hwnd: HWND,
    screen: VirtualScreen,
    factory: ID2D1Factory,
    shape: ArrowShape,
    fill: D2D1_COLOR_F,
    stroke: D2D1_COLOR_F,
    pulse: Option<Pulse>,
    last: Option<Frame>,
}

impl LayeredOverlay {
    pub fn new(hwnd: HWND, screen: VirtualScreen, factory: ID2D1Factory, settings: &Settings) -> Self {
        let (r, g, b, a) = settings.arrow_rgba();
        let fill = D2D1_COLOR_F {
            r: r as f32,
            g: g as f32,
            b: b as f32,
            a: a as f32,
        };
        let shade = ARROW_STROKE_SHADE as f32;
        let stroke = D2D1_COLOR_F {
            r: fill.r * shade,
            g: fill.g * shade,
            b: fill.b * shade,
            a: fill.a,
        };
        Self {
            hwnd,
            screen,
            factory,
            shape: ArrowShape::scaled(settings.arrow_size),
            fill,
            stroke,
            pulse: None,
            last: None,
        }
    }

    fn redraw(&self, frame: Frame) {
        let polygon = self.shape.place(&self.screen, frame.position, frame.rotation);
        unsafe {
            if let Err(e) = self.present(&polygon, frame.alpha) {
                warn!(error = %e, "overlay redraw failed");
            }
        }
    }

    unsafe fn arrow_geometry(&self, polygon: &[Point], dx: f32, dy: f32) -> windows::core::Result<ID2D1PathGeometry> {
        let geometry = self.factory.CreatePathGeometry()?;
        let sink = geometry.Open()?;
        let to_vec = |p: &Point| Vector2::new(p.x as f32 + dx, p.y as f32 + dy);
        if let Some((first, rest)) = polygon.split_first() {
            sink.BeginFigure(to_vec(first), D2D1_FIGURE_BEGIN_FILLED);
            for p in rest {
                sink.AddLine(to_vec(p));
            }
            sink.EndFigure(D2D1_FIGURE_END_CLOSED);
        }
        sink.Close()?;
        Ok(geometry)
    }

    unsafe fn draw_arrow(&self, rt: &ID2D1RenderTarget, polygon: &[Point]) -> windows::core::Result<()> {
        rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);

        let offset = SHADOW_OFFSET as f32;
        let shadow = self.arrow_geometry(polygon, offset, offset)?;
        let shadow_brush = rt.CreateSolidColorBrush(
            &D2D1_COLOR_F {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: SHADOW_OPACITY as f32,
            },
            None,
        )?;
        rt.FillGeometry(&shadow, &shadow_brush, None);

        let arrow = self.arrow_geometry(polygon, 0.0, 0.0)?;
        let fill_brush = rt.CreateSolidColorBrush(&self.fill, None)?;
        rt.FillGeometry(&arrow, &fill_brush, None);
        let stroke_brush = rt.CreateSolidColorBrush(&self.stroke, None)?;
        rt.DrawGeometry(&arrow, &stroke_brush, ARROW_STROKE_WIDTH as f32, None);
        Ok(())
    }

    /// Draw the arrow into an offscreen DIB and apply it with
    /// `UpdateLayeredWindow`.
    unsafe fn present(&self, polygon: &[Point], alpha: u8) -> windows::core::Result<()> {
        let width = self.screen.width as i32;
        let height = self.screen.height as i32;

        let screen_dc = GetDC(None);
        let mem_dc = CreateCompatibleDC(Some(screen_dc));

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
        let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) {
            Ok(bitmap) if !bits.is_null() => bitmap,
            Ok(bitmap) => {
                let _ = DeleteObject(bitmap.into());
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Ok(());
            }
            Err(e) => {
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Err(e);
            }
        };
        let old_bitmap = SelectObject(mem_dc, bitmap.into());

        let drawn = self.draw_into(mem_dc, width, height, polygon);

        let pt_src = POINT { x: 0, y: 0 };
        let size = SIZE { cx: width, cy: height };
        let pt_dst = POINT {
            x: self.screen.left as i32,
            y: self.screen.top as i32,
        };
        let blend = BLENDFUNCTION {
            BlendOp: AC_SRC_OVER as u8,
            BlendFlags: 0,
            SourceConstantAlpha: alpha,
            AlphaFormat: AC_SRC_ALPHA as u8,
        };
        let updated = UpdateLayeredWindow(
            self.hwnd,
            Some(screen_dc),
            Some(&pt_dst),
            Some(&size),
            Some(mem_dc),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        );

        // Stay above the taskbar and other topmost windows.
        let _ = SetWindowPos(
            self.hwnd,
            Some(HWND_TOPMOST),
            0,
            0,
            0,
            0,
            SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
        );

        SelectObject(mem_dc, old_bitmap);
        let _ = DeleteObject(bitmap.into());
        let _ = DeleteDC(mem_dc);
        ReleaseDC(None, screen_dc);

        drawn.and(updated)
    }

    unsafe fn draw_into(
        &self,
        mem_dc: windows::Win32::Graphics::Gdi::HDC,
        width: i32,
        height: i32,
        polygon: &[Point],
    ) -> windows::core::Result<()> {
        let props = D2D1_RENDER_TARGET_PROPERTIES {
            r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
            pixelFormat: D2D1_PIXEL_FORMAT {
                format: DXGI_FORMAT_B8G8R8A8_UNORM,
                alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
            },
            dpiX: 96.0,
            dpiY: 96.0,
            usage: D2D1_RENDER_TARGET_USAGE_NONE,
            minLevel: Default::default(),
        };
        let dc_rt: ID2D1DCRenderTarget = self.factory.CreateDCRenderTarget(&props)?;
        let rect = RECT {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        };
        dc_rt.BindDC(mem_dc, &rect)?;

        let rt: ID2D1RenderTarget = dc_rt.into();
        rt.BeginDraw();
        rt.Clear(Some(&D2D1_COLOR_F {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }));
        let drawn = self.draw_arrow(&rt, polygon);
        let ended = rt.EndDraw(None, None);
        drawn.and(ended)
    }
}

impl OverlayRenderer for LayeredOverlay {
    fn set_arrow_transform(&mut self, position: Point, rotation: f64, opacity: f64) {
        let opacity = match &self.pulse {
            Some(pulse) => pulse.opacity_at(Instant::now()),
            None => opacity,
        };
        let frame = Frame {
            position,
            rotation,
            alpha: (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
        };
        if self.last == Some(frame) {
            return;
        }
        self.redraw(frame);
        self.last = Some(frame);
    }

    fn start_pulsing(&mut self) {
        if self.pulse.is_none() {
            self.pulse = Some(Pulse::start(Instant::now()));
        }
    }

    fn stop_pulsing(&mut self) {
        self.pulse = None;
    }
}
