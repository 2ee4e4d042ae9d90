//! Procedural shape rasterization
//!
//! SDL2's renderer only draws points, lines and rectangles. Circles, arcs, thick
//! lines and rounded rectangles are built here from those primitives. The span and
//! point math is kept in pure functions so it can be tested without a window.

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Horizontal run of a circle or ring, relative to the centre
///
/// Covers `x_start..=x_end` on row `dy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub dy: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Half-width of a circle of `radius` on row `dy`
fn half_width(radius: i32, dy: i32) -> i32 {
    ((radius * radius - dy * dy) as f32).sqrt() as i32
}

/// Spans covering a ring of `radius` and stroke `width`
///
/// `width == 0` (or `width >= radius`) gives a filled disc.
pub fn ring_spans(radius: i32, width: i32) -> Vec<Span> {
    let inner = if width <= 0 { 0 } else { radius - width };
    let mut spans = Vec::new();

    for dy in -radius..=radius {
        let outer_x = half_width(radius, dy);
        if inner <= 0 || dy.abs() > inner {
            spans.push(Span { dy, x_start: -outer_x, x_end: outer_x });
        } else {
            let inner_x = half_width(inner, dy);
            spans.push(Span { dy, x_start: -outer_x, x_end: -inner_x - 1 });
            spans.push(Span { dy, x_start: inner_x + 1, x_end: outer_x });
        }
    }

    spans
}

/// Draws a circle outline of stroke `width`, or a filled disc when `width` is 0
pub fn draw_circle(
    canvas: &mut Canvas<Window>,
    center: (i32, i32),
    radius: i32,
    width: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let (cx, cy) = center;
    for span in ring_spans(radius, width) {
        if span.x_start > span.x_end {
            continue;
        }
        canvas.draw_line(
            Point::new(cx + span.x_start, cy + span.dy),
            Point::new(cx + span.x_end, cy + span.dy),
        )?;
    }
    Ok(())
}

pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    center: (i32, i32),
    radius: i32,
    color: Color,
) -> Result<(), String> {
    draw_circle(canvas, center, radius, 0, color)
}

/// Offsets applied across the minor axis to thicken a line to `width` pixels
pub fn stroke_offsets(width: i32) -> std::ops::RangeInclusive<i32> {
    let width = width.max(1);
    -(width / 2)..=(width - 1) / 2
}

/// Draws a straight line `width` pixels thick
pub fn draw_thick_line(
    canvas: &mut Canvas<Window>,
    from: (i32, i32),
    to: (i32, i32),
    width: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    let mostly_horizontal = (to.0 - from.0).abs() >= (to.1 - from.1).abs();

    for offset in stroke_offsets(width) {
        let (ox, oy) = if mostly_horizontal { (0, offset) } else { (offset, 0) };
        canvas.draw_line(
            Point::new(from.0 + ox, from.1 + oy),
            Point::new(to.0 + ox, to.1 + oy),
        )?;
    }
    Ok(())
}

/// Points along an arc, angles in radians counter-clockwise from +x (screen y down)
pub fn arc_points(center: (i32, i32), radius: i32, start: f32, end: f32) -> Vec<Point> {
    // Roughly one point per pixel of arc length
    let steps = ((end - start).abs() * radius as f32).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / steps as f32;
            Point::new(
                center.0 + (radius as f32 * angle.cos()).round() as i32,
                center.1 - (radius as f32 * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Draws an arc whose outer edge is at `radius`, stroked inward by `width`
pub fn draw_arc(
    canvas: &mut Canvas<Window>,
    center: (i32, i32),
    radius: i32,
    start: f32,
    end: f32,
    width: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for r in (radius - width.max(1) + 1)..=radius {
        canvas.draw_lines(arc_points(center, r, start, end).as_slice())?;
    }
    Ok(())
}

/// Fills a rectangle whose corners are rounded by `radius`
pub fn fill_rounded_rect(
    canvas: &mut Canvas<Window>,
    rect: Rect,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    let radius = radius.min(rect.width() as i32 / 2).min(rect.height() as i32 / 2);
    canvas.set_draw_color(color);

    // Body without the corner squares
    canvas.fill_rect(Rect::new(
        rect.x() + radius,
        rect.y(),
        rect.width() - 2 * radius as u32,
        rect.height(),
    ))?;
    canvas.fill_rect(Rect::new(
        rect.x(),
        rect.y() + radius,
        rect.width(),
        rect.height() - 2 * radius as u32,
    ))?;

    let left = rect.x() + radius;
    let right = rect.x() + rect.width() as i32 - 1 - radius;
    let top = rect.y() + radius;
    let bottom = rect.y() + rect.height() as i32 - 1 - radius;
    for corner in [(left, top), (right, top), (left, bottom), (right, bottom)] {
        fill_circle(canvas, corner, radius, color)?;
    }
    Ok(())
}
