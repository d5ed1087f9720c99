//! Absolutely positioned page content.

use serde::{Deserialize, Serialize};

use crate::block::Align;
use crate::color::Color;
use crate::span::Span;
use crate::style::Style;

/// A point in PDF user space (origin bottom-left, y up), in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Stroke parameters for outlined shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Something drawn at a fixed position on a page.
#[derive(Debug, Clone)]
pub enum Drawable {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Text anchored at an absolute origin. Lines split on hard newlines
    /// only and align about the origin.
    TextBox {
        origin: Point,
        spans: Vec<Span>,
        style: Style,
        align: Align,
    },
}

impl Drawable {
    pub fn line(from: impl Into<Point>, to: impl Into<Point>, stroke: Stroke) -> Self {
        Drawable::Line {
            from: from.into(),
            to: to.into(),
            stroke,
        }
    }

    pub fn rect(
        origin: impl Into<Point>,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) -> Self {
        Drawable::Rect {
            origin: origin.into(),
            width,
            height,
            fill,
            stroke,
        }
    }

    pub fn ellipse(
        center: impl Into<Point>,
        rx: f64,
        ry: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) -> Self {
        Drawable::Ellipse {
            center: center.into(),
            rx,
            ry,
            fill,
            stroke,
        }
    }

    pub fn text(origin: impl Into<Point>, text: impl Into<Span>, style: Style) -> Self {
        Drawable::TextBox {
            origin: origin.into(),
            spans: vec![text.into()],
            style,
            align: Align::Left,
        }
    }
}
