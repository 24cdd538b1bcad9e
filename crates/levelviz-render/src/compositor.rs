//! CPU compositing of scenes into RGBA frames.

use glam::Vec3;
use levelviz_core::marching_squares::generate_values;
use tiny_skia::{
    Color, FilterQuality, IntSize, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Rect, Stroke, Transform,
};

use crate::buffer::RgbBuffer;
use crate::error::{RenderError, Result};
use crate::scene::{ScalarBarActor, Scene};

/// Composites a scene into an RGBA frame.
///
/// `scale` is the number of canvas pixels per image cell, applied on top of
/// the buffer's per-axis spacing; the canvas is sized to the scaled image.
pub fn render_scene(scene: &Scene, scale: f32) -> Result<Pixmap> {
    let buffer = &scene.image.buffer;
    let sx = buffer.spacing.x * scale;
    let sy = buffer.spacing.y * scale;
    let width = (buffer.extent.width as f32 * sx).round().max(1.0) as u32;
    let height = (buffer.extent.height as f32 * sy).round().max(1.0) as u32;

    let mut canvas =
        Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
    canvas.fill(color_from_vec3(scene.background));

    let image = buffer_to_pixmap(buffer)?;
    let image_paint = PixmapPaint {
        quality: if scene.image.interpolate {
            FilterQuality::Bilinear
        } else {
            FilterQuality::Nearest
        },
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(
        0,
        0,
        image.as_ref(),
        &image_paint,
        Transform::from_scale(sx, sy),
        None,
    );

    if let Some(actor) = &scene.contours {
        let csx = actor.spacing.x * scale;
        let csy = actor.spacing.y * scale;
        let mut paint = Paint::default();
        paint.anti_alias = true;
        let stroke = Stroke {
            width: actor.line_width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        for contour in &actor.contours {
            if contour.points.len() < 2 {
                continue;
            }
            let mut pb = PathBuilder::new();
            // Contour vertices sit on cell centers
            pb.move_to(
                (contour.points[0].x + 0.5) * csx,
                (contour.points[0].y + 0.5) * csy,
            );
            for point in &contour.points[1..] {
                pb.line_to((point.x + 0.5) * csx, (point.y + 0.5) * csy);
            }
            if contour.closed {
                pb.close();
            }
            if let Some(path) = pb.finish() {
                let c = actor.contour_color(contour.value);
                paint.set_color_rgba8(to_u8(c.x), to_u8(c.y), to_u8(c.z), 255);
                canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    if let Some(bar) = &scene.scalar_bar {
        draw_scalar_bar(&mut canvas, bar);
    }

    Ok(canvas)
}

/// Expands an RGB buffer into an opaque RGBA pixmap.
fn buffer_to_pixmap(buffer: &RgbBuffer) -> Result<Pixmap> {
    let (width, height) = (buffer.extent.width, buffer.extent.height);
    let size =
        IntSize::from_wh(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
    let mut data = Vec::with_capacity(buffer.extent.len() * 4);
    for px in buffer.data.chunks_exact(3) {
        data.extend_from_slice(&[px[0], px[1], px[2], 255]);
    }
    Pixmap::from_vec(data, size).ok_or(RenderError::InvalidFrameData { width, height })
}

/// Gradient swatch with tick lines along the right edge, maximum at the top.
fn draw_scalar_bar(canvas: &mut Pixmap, bar: &ScalarBarActor) {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    let bar_w = (w * 0.05).clamp(4.0, 24.0);
    let x0 = w - bar_w * 2.0;
    let y_top = h * 0.1;
    let y_bottom = h * 0.9;
    let bar_h = y_bottom - y_top;
    if bar_h < 1.0 || x0 < 0.0 {
        return;
    }

    let mut paint = Paint::default();
    for i in 0..bar_h.ceil() as u32 {
        let t = 1.0 - i as f32 / bar_h;
        let c = bar.color_map.sample(t);
        paint.set_color_rgba8(to_u8(c.x), to_u8(c.y), to_u8(c.z), 255);
        if let Some(rect) = Rect::from_xywh(x0, y_top + i as f32, bar_w, 1.0) {
            canvas.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }

    // One tick line per label, bottom (minimum) to top
    paint.set_color_rgba8(0, 0, 0, 255);
    for t in generate_values(bar.number_of_labels, 0.0, 1.0) {
        let y = y_bottom - t * bar_h;
        if let Some(rect) = Rect::from_xywh(x0 - bar_w * 0.5, y - 0.75, bar_w * 1.5, 1.5) {
            canvas.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}

fn color_from_vec3(c: Vec3) -> Color {
    Color::from_rgba8(to_u8(c.x), to_u8(c.y), to_u8(c.z), 255)
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
