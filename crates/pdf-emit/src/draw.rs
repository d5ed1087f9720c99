//! Vector drawing primitives.

use doc_model::{Color, Point, Stroke};

use crate::content::ContentStream;

/// Control-point factor approximating a quarter circle with one cubic
/// Bézier: 4/3 · tan(π/8).
const BEZIER_CIRCLE_KAPPA: f64 = 0.5522847498;

pub fn line(content: &mut ContentStream, from: Point, to: Point, stroke: Stroke) {
    content.set_stroke_color(stroke.color);
    content.set_line_width(stroke.width);
    content.move_to(from.x, from.y);
    content.line_to(to.x, to.y);
    content.stroke();
}

pub fn rect(
    content: &mut ContentStream,
    origin: Point,
    width: f64,
    height: f64,
    fill: Option<Color>,
    stroke: Option<Stroke>,
) {
    if fill.is_none() && stroke.is_none() {
        return;
    }
    if let Some(color) = fill {
        content.set_fill_color(color);
    }
    if let Some(s) = stroke {
        content.set_stroke_color(s.color);
        content.set_line_width(s.width);
    }
    content.rect(origin.x, origin.y, width, height);
    paint(content, fill.is_some(), stroke.is_some());
}

pub fn ellipse(
    content: &mut ContentStream,
    center: Point,
    rx: f64,
    ry: f64,
    fill: Option<Color>,
    stroke: Option<Stroke>,
) {
    if fill.is_none() && stroke.is_none() {
        return;
    }
    if let Some(color) = fill {
        content.set_fill_color(color);
    }
    if let Some(s) = stroke {
        content.set_stroke_color(s.color);
        content.set_line_width(s.width);
    }

    let (cx, cy) = (center.x, center.y);
    let kx = rx * BEZIER_CIRCLE_KAPPA;
    let ky = ry * BEZIER_CIRCLE_KAPPA;
    content.move_to(cx + rx, cy);
    content.curve_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
    content.curve_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
    content.curve_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
    content.curve_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
    content.close_path();
    paint(content, fill.is_some(), stroke.is_some());
}

fn paint(content: &mut ContentStream, fill: bool, stroke: bool) {
    match (fill, stroke) {
        (true, true) => content.fill_and_stroke(),
        (true, false) => content.fill(),
        (false, true) => content.stroke(),
        (false, false) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(build: impl FnOnce(&mut ContentStream)) -> String {
        let mut content = ContentStream::new();
        build(&mut content);
        String::from_utf8_lossy(&content.into_bytes()).into_owned()
    }

    #[test]
    fn line_strokes_between_endpoints() {
        let ops = rendered(|c| {
            line(
                c,
                Point { x: 10.0, y: 20.0 },
                Point { x: 30.0, y: 40.0 },
                Stroke::default(),
            )
        });
        assert!(ops.contains("10 20 m"));
        assert!(ops.contains("30 40 l"));
        assert!(ops.ends_with("S\n"));
    }

    #[test]
    fn filled_and_stroked_rect_uses_b() {
        let ops = rendered(|c| {
            rect(
                c,
                Point { x: 0.0, y: 0.0 },
                100.0,
                50.0,
                Some(Color::WHITE),
                Some(Stroke::default()),
            )
        });
        assert!(ops.contains("0 0 100 50 re"));
        assert!(ops.ends_with("B\n"));
    }

    #[test]
    fn ellipse_closes_with_four_curves() {
        let ops = rendered(|c| {
            ellipse(
                c,
                Point { x: 50.0, y: 50.0 },
                20.0,
                10.0,
                Some(Color::BLACK),
                None,
            )
        });
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.contains("h\n"));
        assert!(ops.ends_with("f\n"));
    }

    #[test]
    fn invisible_shapes_emit_nothing() {
        let ops = rendered(|c| {
            rect(c, Point { x: 0.0, y: 0.0 }, 10.0, 10.0, None, None);
        });
        assert!(ops.is_empty());
    }
}
