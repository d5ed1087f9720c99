//! Frame filling: distributing broken lines into column frames and pages.
//!
//! Blocks flow through the column frames of each page in order; when a
//! paragraph spills into a frame of a different width its remaining atoms
//! are re-broken at the new measure. Orphan and widow avoidance moves
//! whole lines between consecutive frames and never splits below two
//! lines when a reflow can avoid it.

use doc_model::{Align, Color, FrameRect, Page, PageTemplate, ResolvedStyle, Rule};

use crate::atoms::Atom;
use crate::breaker::{break_paragraph, line_start, Line, LineWidths};
use crate::shape::{shape_fragment, GlyphRun, Substitution};

/// A paragraph ready for filling: its atom stream plus layout options.
pub struct ShapedParagraph {
    pub atoms: Vec<Atom>,
    pub align: Align,
    pub indent: f64,
    pub optimal: bool,
    pub avoid_orphans: bool,
    /// Style used for empty lines and synthesized hyphens when a line
    /// carries no boxes of its own.
    pub base_style: ResolvedStyle,
}

/// A block as the filler consumes it.
pub enum FillBlock {
    Paragraph(ShapedParagraph),
    Rule(Rule),
}

/// A placed piece of line content.
#[derive(Debug, Clone)]
pub enum LineItem {
    Run(GlyphRun),
    /// An inter-word space at its adjusted width, in points.
    Space(f64),
}

/// A line positioned on a page: `baseline` is the y of its baseline in
/// PDF user space.
#[derive(Debug, Clone)]
pub struct LaidLine {
    pub x: f64,
    pub baseline: f64,
    pub items: Vec<LineItem>,
    pub overfull: bool,
}

/// A horizontal rule positioned on a page.
#[derive(Debug, Clone)]
pub struct LaidRule {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub stroke_width: f64,
    pub color: Color,
}

/// One output page with its laid-out content.
pub struct LaidPage {
    pub page: Page,
    pub lines: Vec<LaidLine>,
    pub rules: Vec<LaidRule>,
}

/// Filling outcome: pages in order plus soft-error bookkeeping.
pub struct FillResult {
    pub pages: Vec<LaidPage>,
    pub overfull_lines: u32,
    pub substitutions: Vec<Substitution>,
}

struct Filler<'a> {
    template: &'a PageTemplate,
    pages: Vec<LaidPage>,
    current: LaidPage,
    frames: Vec<FrameRect>,
    frame_index: usize,
    cursor_y: f64,
    frame_used: bool,
    overfull_lines: u32,
    substitutions: Vec<Substitution>,
}

/// Flow `blocks` through pages produced by `template`.
pub fn fill(blocks: Vec<FillBlock>, template: &PageTemplate) -> FillResult {
    let first = template.page_for(0);
    let frames = first.frames();
    let cursor = frames.first().map(|f| f.top).unwrap_or(0.0);
    let mut filler = Filler {
        template,
        pages: Vec::new(),
        current: LaidPage {
            page: first,
            lines: Vec::new(),
            rules: Vec::new(),
        },
        frames,
        frame_index: 0,
        cursor_y: cursor,
        frame_used: false,
        overfull_lines: 0,
        substitutions: Vec::new(),
    };

    for block in blocks {
        match block {
            FillBlock::Paragraph(paragraph) => filler.place_paragraph(paragraph),
            FillBlock::Rule(rule) => filler.place_rule(rule),
        }
    }

    filler.pages.push(filler.current);
    FillResult {
        pages: filler.pages,
        overfull_lines: filler.overfull_lines,
        substitutions: filler.substitutions,
    }
}

impl Filler<'_> {
    fn frame(&self) -> FrameRect {
        self.frames[self.frame_index]
    }

    fn frame_bottom(&self) -> f64 {
        let f = self.frame();
        f.top - f.height
    }

    fn advance_frame(&mut self) {
        self.frame_index += 1;
        if self.frame_index >= self.frames.len() {
            let next_index = self.pages.len() + 1;
            let page = self.template.page_for(next_index);
            let finished = std::mem::replace(
                &mut self.current,
                LaidPage {
                    page: page.clone(),
                    lines: Vec::new(),
                    rules: Vec::new(),
                },
            );
            self.pages.push(finished);
            self.frames = page.frames();
            self.frame_index = 0;
        }
        self.cursor_y = self.frame().top;
        self.frame_used = false;
    }

    fn place_rule(&mut self, rule: Rule) {
        if self.cursor_y - rule.height() < self.frame_bottom() && self.frame_used {
            self.advance_frame();
        }
        let frame = self.frame();
        self.current.rules.push(LaidRule {
            x: frame.x,
            y: self.cursor_y - rule.margin.top - rule.stroke_width / 2.0,
            width: frame.width,
            stroke_width: rule.stroke_width,
            color: rule.color,
        });
        self.cursor_y -= rule.height();
        self.frame_used = true;
    }

    fn place_paragraph(&mut self, paragraph: ShapedParagraph) {
        let mut offset = 0usize;

        loop {
            let frame = self.frame();
            let first_width = if offset == 0 {
                (frame.width - paragraph.indent).max(1.0)
            } else {
                frame.width
            };
            let widths = LineWidths {
                first: first_width,
                rest: frame.width,
            };

            let suffix = &paragraph.atoms[offset..];
            let lines = break_paragraph(suffix, widths, paragraph.optimal);
            if lines.is_empty() {
                return;
            }

            let heights: Vec<f64> = lines
                .iter()
                .map(|line| line_height(suffix, line, &paragraph.base_style))
                .collect();

            let available = self.cursor_y - self.frame_bottom();
            let mut fit = 0usize;
            let mut consumed = 0.0;
            while fit < lines.len() && consumed + heights[fit] <= available + 1e-9 {
                consumed += heights[fit];
                fit += 1;
            }

            let total = lines.len();
            if fit < total {
                if paragraph.avoid_orphans {
                    // Widow: exactly the last line would move on alone.
                    if total - fit == 1 && fit >= 3 {
                        fit -= 1;
                    }
                    // Orphan: only the first line would stay behind.
                    if fit == 1 && self.frame_used {
                        fit = 0;
                    }
                }
                // An empty frame must make progress.
                if fit == 0 && !self.frame_used {
                    fit = 1;
                }
            }

            for (index, line) in lines.iter().take(fit).enumerate() {
                let indent = if offset == 0 && index == 0 {
                    paragraph.indent
                } else {
                    0.0
                };
                let is_last = index + 1 == total;
                self.place_line(suffix, line, heights[index], &paragraph, indent, is_last);
            }

            if fit == total {
                return;
            }
            if fit > 0 {
                offset += line_start(suffix, lines[fit - 1].end);
            }
            self.advance_frame();
        }
    }

    fn place_line(
        &mut self,
        atoms: &[Atom],
        line: &Line,
        height: f64,
        paragraph: &ShapedParagraph,
        indent: f64,
        is_last: bool,
    ) {
        let frame = self.frame();
        let baseline = self.cursor_y - height;

        let justify = paragraph.align == Align::Justify && !line.ends_forced && !is_last;
        let ratio = if justify { line.ratio } else { 0.0 };

        let mut items = Vec::new();
        for atom in &atoms[line.start..line.end] {
            match atom {
                Atom::Box { run, .. } => items.push(LineItem::Run(run.clone())),
                Atom::Glue {
                    width,
                    stretch,
                    shrink,
                } => {
                    let adjusted = if ratio > 0.0 {
                        width + ratio * stretch
                    } else if ratio < 0.0 {
                        width + ratio * shrink
                    } else {
                        *width
                    };
                    items.push(LineItem::Space(adjusted));
                }
                Atom::Penalty { .. } => {}
            }
        }
        if line.ends_with_hyphen && line.hyphen_width > 0.0 {
            let style = last_run_style(atoms, line).unwrap_or(&paragraph.base_style);
            let hyphen = shape_fragment("-", style, &mut self.substitutions);
            items.push(LineItem::Run(hyphen));
        }

        let content_width = if justify {
            line.adjusted_width()
        } else {
            line.natural_width
        };
        let x = match paragraph.align {
            Align::Left | Align::Justify => frame.x + indent,
            Align::Right => frame.x + frame.width - content_width,
            Align::Center => frame.x + (frame.width - content_width) / 2.0,
        };

        if line.overfull {
            self.overfull_lines += 1;
        }
        self.current.lines.push(LaidLine {
            x,
            baseline,
            items,
            overfull: line.overfull,
        });
        self.cursor_y = baseline;
        self.frame_used = true;
    }
}

/// Baseline height of a line: the tallest box's ascent scaled by its size
/// and line spacing, or the paragraph style's when the line is empty.
pub fn line_height(atoms: &[Atom], line: &Line, fallback: &ResolvedStyle) -> f64 {
    let mut height: f64 = 0.0;
    for atom in &atoms[line.start..line.end] {
        if let Atom::Box { run, .. } = atom {
            height = height.max(run.style.line_height());
        }
    }
    if height == 0.0 {
        fallback.line_height()
    } else {
        height
    }
}

fn last_run_style<'a>(atoms: &'a [Atom], line: &Line) -> Option<&'a ResolvedStyle> {
    atoms[line.start..line.end]
        .iter()
        .rev()
        .find_map(|atom| match atom {
            Atom::Box { run, .. } => Some(&run.style),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Margins, Page, PageSize, Style};

    #[test]
    fn line_height_uses_tallest_run() {
        let small = Style::new().size(10.0).resolve();
        let large = Style::new().size(20.0).resolve();
        let atoms = vec![
            Atom::Box {
                width: 10.0,
                run: GlyphRun {
                    style: small.clone(),
                    glyphs: Vec::new(),
                    width: 10.0,
                },
            },
            Atom::Box {
                width: 10.0,
                run: GlyphRun {
                    style: large.clone(),
                    glyphs: Vec::new(),
                    width: 10.0,
                },
            },
            Atom::penalty(0.0, f64::NEG_INFINITY, false),
        ];
        let line = crate::breaker::make_line(&atoms, 0, 2, 100.0);
        let height = line_height(&atoms, &line, &small);
        assert!((height - large.line_height()).abs() < 1e-9);
    }

    #[test]
    fn rule_consumes_margin_and_stroke() {
        let page = Page::new(PageSize::Custom(200.0, 400.0)).margin(Margins::uniform(20.0));
        let template = PageTemplate::Fixed(page);
        let rule = Rule {
            margin: Margins::uniform(5.0),
            stroke_width: 2.0,
            color: Color::BLACK,
        };
        let result = fill(vec![FillBlock::Rule(rule)], &template);

        assert_eq!(result.pages.len(), 1);
        let laid = &result.pages[0].rules[0];
        assert_eq!(laid.x, 20.0);
        assert_eq!(laid.width, 160.0);
        // Top of frame is 380; the stroke centers under the top margin.
        assert!((laid.y - (380.0 - 5.0 - 1.0)).abs() < 1e-9);
    }
}
