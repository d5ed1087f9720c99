//! The styled span tree.

use crate::style::{ResolvedStyle, Style};

/// A piece of paragraph content: plain text, or a styled group of
/// children.
#[derive(Debug, Clone)]
pub enum Span {
    Leaf(String),
    Styled(Style, Vec<Span>),
}

impl Span {
    /// Wrap children under an additional style layer.
    pub fn styled(style: Style, children: Vec<Span>) -> Span {
        Span::Styled(style, children)
    }
}

impl From<&str> for Span {
    fn from(text: &str) -> Self {
        Span::Leaf(text.to_string())
    }
}

impl From<String> for Span {
    fn from(text: String) -> Self {
        Span::Leaf(text)
    }
}

/// Flatten a span tree into `(text, resolved style)` runs in document
/// order.
///
/// Style resolution is a fold: each `Styled` node merges its style over
/// the inherited one and the accumulator threads down into the children.
pub fn flatten(spans: &[Span], inherited: &Style) -> Vec<(String, ResolvedStyle)> {
    let mut runs = Vec::new();
    collect(spans, inherited, &mut runs);
    runs
}

fn collect(spans: &[Span], inherited: &Style, out: &mut Vec<(String, ResolvedStyle)>) {
    for span in spans {
        match span {
            Span::Leaf(text) => {
                if !text.is_empty() {
                    out.push((text.clone(), inherited.resolve()));
                }
            }
            Span::Styled(style, children) => {
                let merged = style.clone().over(inherited);
                collect(children, &merged, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_inherit_the_accumulated_style() {
        let spans = vec![
            Span::from("plain "),
            Span::styled(
                Style::new().bold(),
                vec![
                    Span::from("bold "),
                    Span::styled(Style::new().size(20.0), vec![Span::from("big")]),
                ],
            ),
        ];
        let runs = flatten(&spans, &Style::new().size(10.0));

        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].0, "plain ");
        assert_eq!(runs[0].1.size, 10.0);
        assert!(!runs[0].1.bold);
        assert!(runs[1].1.bold);
        assert_eq!(runs[1].1.size, 10.0);
        assert!(runs[2].1.bold);
        assert_eq!(runs[2].1.size, 20.0);
    }

    #[test]
    fn empty_leaves_produce_no_runs() {
        let runs = flatten(&[Span::from("")], &Style::new());
        assert!(runs.is_empty());
    }
}
