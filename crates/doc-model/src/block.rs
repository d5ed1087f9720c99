//! Auto-paginated content blocks.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::page::Margins;
use crate::span::Span;
use crate::style::Style;

/// Horizontal alignment of paragraph lines within their frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// A block laid out by the frame filler.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(Paragraph),
    Rule(Rule),
}

/// A styled paragraph of spans.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub spans: Vec<Span>,
    pub style: Style,
    pub align: Align,
    /// First-line indent in points.
    pub indent: f64,
    /// Use the optimal (Knuth–Plass) breaker; greedy otherwise.
    pub optimal: bool,
    /// Keep first/last lines attached to their paragraph across frames.
    pub avoid_orphans: bool,
}

impl Paragraph {
    pub fn new(text: impl Into<Span>) -> Self {
        Paragraph {
            spans: vec![text.into()],
            style: Style::default(),
            align: Align::Left,
            indent: 0.0,
            optimal: true,
            avoid_orphans: true,
        }
    }

    pub fn with_spans(spans: Vec<Span>) -> Self {
        Paragraph {
            spans,
            ..Paragraph::new("")
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn indent(mut self, indent: f64) -> Self {
        self.indent = indent;
        self
    }

    pub fn greedy(mut self) -> Self {
        self.optimal = false;
        self
    }

    pub fn allow_orphans(mut self) -> Self {
        self.avoid_orphans = false;
        self
    }
}

impl From<Paragraph> for Block {
    fn from(p: Paragraph) -> Self {
        Block::Paragraph(p)
    }
}

/// A horizontal rule spanning the frame width.
#[derive(Debug, Clone)]
pub struct Rule {
    pub margin: Margins,
    pub stroke_width: f64,
    pub color: Color,
}

impl Rule {
    pub fn new() -> Self {
        Rule {
            margin: Margins::uniform(6.0),
            stroke_width: 1.0,
            color: Color::BLACK,
        }
    }

    /// Vertical space the rule consumes in a frame.
    pub fn height(&self) -> f64 {
        self.margin.top + self.stroke_width + self.margin.bottom
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::new()
    }
}

impl From<Rule> for Block {
    fn from(r: Rule) -> Self {
        Block::Rule(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_defaults() {
        let p = Paragraph::new("hello");
        assert_eq!(p.align, Align::Left);
        assert!(p.optimal);
        assert!(p.avoid_orphans);
        assert_eq!(p.indent, 0.0);
    }

    #[test]
    fn rule_height_sums_margins_and_stroke() {
        let r = Rule {
            margin: Margins::uniform(4.0),
            stroke_width: 2.0,
            color: Color::BLACK,
        };
        assert_eq!(r.height(), 10.0);
    }

    #[test]
    fn align_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Align::Justify).unwrap(), "\"justify\"");
    }
}
