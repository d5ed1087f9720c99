//! Document-to-PDF generation.
//!
//! `PdfGenerator` walks the declarative tree, pushes auto-paginated
//! blocks through the typesetting pipeline, and streams the resulting
//! object graph through the [`FileWriter`] in one pass: header, page and
//! content objects in page order, font objects at the end, then the
//! pages tree, catalog, and xref.

use std::collections::BTreeSet;
use std::io::Write;

use doc_model::{
    flatten, Align, Block, Color, Document, Drawable, Font, Page, PageItem, ResolvedStyle, Span,
    Style,
};
use typeset_engine::frame::{fill, FillBlock, LaidPage, LaidRule, LineItem, ShapedParagraph};
use typeset_engine::shape::{shape_fragment, shape_paragraph, Glyph};

use crate::compress::deflate;
use crate::config::PdfConfig;
use crate::content::{ContentStream, TjPiece};
use crate::error::PdfError;
use crate::font_registry::FontRegistry;
use crate::object::{dict, Dict, Object, ObjectId};
use crate::report::RenderReport;
use crate::writer::FileWriter;

/// The write entry point.
pub struct PdfGenerator {
    config: PdfConfig,
}

impl PdfGenerator {
    pub fn new(config: PdfConfig) -> Self {
        PdfGenerator { config }
    }

    /// Serialize `doc` into `sink`, returning the soft-error report.
    pub fn write_to<W: Write>(
        &self,
        doc: &Document,
        sink: W,
    ) -> Result<RenderReport, PdfError> {
        validate(doc)?;

        let mut writer = FileWriter::new(sink);
        writer.begin()?;
        let catalog = writer.allocate();
        let pages_tree = writer.allocate();

        let mut emitter = Emitter {
            writer,
            registry: FontRegistry::new(),
            config: &self.config,
            pages_tree,
            page_ids: Vec::new(),
            report: RenderReport::default(),
        };
        emitter.emit_document(doc)?;
        emitter.finish(catalog)
    }

    /// Serialize into memory.
    pub fn to_bytes(&self, doc: &Document) -> Result<(Vec<u8>, RenderReport), PdfError> {
        let mut out = Vec::new();
        let report = self.write_to(doc, &mut out)?;
        Ok((out, report))
    }
}

/// Write with the default configuration.
pub fn write<W: Write>(doc: &Document, sink: W) -> Result<RenderReport, PdfError> {
    PdfGenerator::new(PdfConfig::default()).write_to(doc, sink)
}

struct Emitter<'a, W: Write> {
    writer: FileWriter<W>,
    registry: FontRegistry,
    config: &'a PdfConfig,
    pages_tree: ObjectId,
    page_ids: Vec<ObjectId>,
    report: RenderReport,
}

/// Text-state tracking within one page's content stream.
#[derive(Default)]
struct TextState {
    font: Option<(usize, f64)>,
    color: Option<Color>,
}

/// A run of glyphs sharing font, size, and color, accumulated into one
/// `TJ` operation.
struct Segment {
    font_index: usize,
    font: Font,
    size: f64,
    color: Color,
    start_x: f64,
    pieces: Vec<TjPiece>,
}

impl Segment {
    fn push_glyph(&mut self, glyph: Glyph) {
        match (glyph, self.pieces.last_mut()) {
            (Glyph::WinAnsi(b), Some(TjPiece::Literal(bytes))) => bytes.push(b),
            (Glyph::WinAnsi(b), _) => self.pieces.push(TjPiece::Literal(vec![b])),
            (Glyph::Cid(gid), Some(TjPiece::Cids(gids))) => gids.push(gid),
            (Glyph::Cid(gid), _) => self.pieces.push(TjPiece::Cids(vec![gid])),
        }
    }

    fn push_adjust(&mut self, amount: f64) {
        self.pieces.push(TjPiece::Adjust(amount));
    }
}

impl<W: Write> Emitter<'_, W> {
    fn emit_document(&mut self, doc: &Document) -> Result<(), PdfError> {
        if doc.content.is_empty() {
            // An empty document still renders one blank default page.
            return self.emit_fixed_page(&Page::default(), &doc.style);
        }
        for item in &doc.content {
            match item {
                PageItem::Fixed(page) => self.emit_fixed_page(page, &doc.style)?,
                PageItem::Auto(auto) => self.emit_auto_pages(auto, &doc.style)?,
            }
        }
        Ok(())
    }

    fn emit_auto_pages(
        &mut self,
        auto: &doc_model::AutoPage,
        base: &Style,
    ) -> Result<(), PdfError> {
        let mut blocks = Vec::new();
        for block in &auto.blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    let merged = paragraph.style.clone().over(base);
                    let resolved = merged.resolve();
                    let runs = flatten(&paragraph.spans, &merged);
                    let outcome = shape_paragraph(&runs, paragraph.align == Align::Justify);
                    self.report.absorb(outcome.substitutions);
                    blocks.push(FillBlock::Paragraph(ShapedParagraph {
                        atoms: outcome.atoms,
                        align: paragraph.align,
                        indent: paragraph.indent,
                        optimal: paragraph.optimal,
                        avoid_orphans: paragraph.avoid_orphans,
                        base_style: resolved,
                    }));
                }
                Block::Rule(rule) => blocks.push(FillBlock::Rule(rule.clone())),
            }
        }

        let result = fill(blocks, &auto.template);
        self.report.overfull_lines += result.overfull_lines;
        self.report.absorb(result.substitutions);
        for laid in &result.pages {
            self.emit_laid_page(laid, base)?;
        }
        Ok(())
    }

    fn emit_laid_page(&mut self, laid: &LaidPage, base: &Style) -> Result<(), PdfError> {
        let mut content = ContentStream::new();
        let mut page_fonts = BTreeSet::new();
        let mut state = TextState::default();

        self.emit_drawables(&laid.page, &mut content, &mut page_fonts, &mut state, base);
        for rule in &laid.rules {
            emit_rule(&mut content, rule);
        }
        for line in &laid.lines {
            self.emit_text_line(
                &mut content,
                &mut page_fonts,
                &mut state,
                line.x,
                line.baseline,
                &line.items,
            );
        }

        self.finish_page(&laid.page, content, page_fonts)
    }

    fn emit_fixed_page(&mut self, page: &Page, base: &Style) -> Result<(), PdfError> {
        let mut content = ContentStream::new();
        let mut page_fonts = BTreeSet::new();
        let mut state = TextState::default();
        self.emit_drawables(page, &mut content, &mut page_fonts, &mut state, base);
        self.finish_page(page, content, page_fonts)
    }

    fn emit_drawables(
        &mut self,
        page: &Page,
        content: &mut ContentStream,
        page_fonts: &mut BTreeSet<usize>,
        state: &mut TextState,
        base: &Style,
    ) {
        for drawable in &page.drawables {
            match drawable {
                Drawable::Line { from, to, stroke } => {
                    crate::draw::line(content, *from, *to, *stroke)
                }
                Drawable::Rect {
                    origin,
                    width,
                    height,
                    fill,
                    stroke,
                } => crate::draw::rect(content, *origin, *width, *height, *fill, *stroke),
                Drawable::Ellipse {
                    center,
                    rx,
                    ry,
                    fill,
                    stroke,
                } => crate::draw::ellipse(content, *center, *rx, *ry, *fill, *stroke),
                Drawable::TextBox {
                    origin,
                    spans,
                    style,
                    align,
                } => {
                    self.emit_text_box(
                        content, page_fonts, state, *origin, spans, style, *align, base,
                    );
                }
            }
        }
    }

    /// Absolutely positioned text: lines split on hard newlines only,
    /// aligned about the origin, first baseline at the origin.
    #[allow(clippy::too_many_arguments)]
    fn emit_text_box(
        &mut self,
        content: &mut ContentStream,
        page_fonts: &mut BTreeSet<usize>,
        state: &mut TextState,
        origin: doc_model::Point,
        spans: &[Span],
        style: &Style,
        align: Align,
        base: &Style,
    ) {
        let merged = style.clone().over(base);
        let resolved = merged.resolve();
        let runs = flatten(spans, &merged);

        // Split the flattened runs into newline-separated lines.
        let mut lines: Vec<Vec<(String, ResolvedStyle)>> = vec![Vec::new()];
        for (text, run_style) in runs {
            for (i, piece) in text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Vec::new());
                }
                if !piece.is_empty() {
                    lines
                        .last_mut()
                        .unwrap()
                        .push((piece.to_string(), run_style.clone()));
                }
            }
        }

        let mut baseline = origin.y;
        for line_runs in lines {
            let mut substitutions = Vec::new();
            let mut items: Vec<LineItem> = Vec::new();
            let mut width = 0.0;
            let mut height: f64 = 0.0;
            for (text, run_style) in &line_runs {
                let run = shape_fragment(text, run_style, &mut substitutions);
                width += run.width;
                height = height.max(run_style.line_height());
                items.push(LineItem::Run(run));
            }
            self.report.absorb(substitutions);
            if height == 0.0 {
                height = resolved.line_height();
            }

            let x = match align {
                Align::Left | Align::Justify => origin.x,
                Align::Right => origin.x - width,
                Align::Center => origin.x - width / 2.0,
            };
            self.emit_text_line(content, page_fonts, state, x, baseline, &items);
            baseline -= height;
        }
    }

    /// Emit one positioned line as a `BT`..`ET` block. Runs sharing font,
    /// size, and color coalesce into a single `TJ`; spaces render as the
    /// current font's space glyph with a pen adjustment, or as a pure
    /// reposition when the font has none.
    fn emit_text_line(
        &mut self,
        content: &mut ContentStream,
        page_fonts: &mut BTreeSet<usize>,
        state: &mut TextState,
        x: f64,
        baseline: f64,
        items: &[LineItem],
    ) {
        content.begin_text();
        let mut last_td_x: Option<f64> = None;
        let mut pen = x;
        let mut segment: Option<Segment> = None;

        for item in items {
            match item {
                LineItem::Run(run) if !run.glyphs.is_empty() => {
                    let font_index = self.registry.register(&run.style.font, &mut self.writer);
                    page_fonts.insert(font_index);

                    let compatible = segment.as_ref().is_some_and(|s| {
                        s.font_index == font_index
                            && s.size == run.style.size
                            && s.color == run.style.color
                    });
                    if !compatible {
                        flush_segment(
                            content,
                            &self.registry,
                            state,
                            &mut last_td_x,
                            baseline,
                            segment.take(),
                        );
                        segment = Some(Segment {
                            font_index,
                            font: run.style.font.clone(),
                            size: run.style.size,
                            color: run.style.color,
                            start_x: pen,
                            pieces: Vec::new(),
                        });
                    }

                    let seg = segment.as_mut().unwrap();
                    for glyph in &run.glyphs {
                        if glyph.kern != 0.0 {
                            seg.push_adjust(-glyph.kern * 1000.0 / run.style.size);
                        }
                        seg.push_glyph(glyph.glyph);
                        self.registry.note_used(font_index, glyph.codepoint);
                    }
                    pen += run.width;
                }
                LineItem::Run(_) => {}
                LineItem::Space(width) => {
                    let mut attached = false;
                    if let Some(seg) = segment.as_mut() {
                        if let Some((glyph, natural)) = space_glyph(&seg.font, seg.size) {
                            seg.push_glyph(glyph);
                            let delta = width - natural;
                            if delta.abs() > 1e-9 {
                                seg.push_adjust(-delta * 1000.0 / seg.size);
                            }
                            self.registry.note_used(seg.font_index, ' ');
                            attached = true;
                        }
                    }
                    if !attached {
                        flush_segment(
                            content,
                            &self.registry,
                            state,
                            &mut last_td_x,
                            baseline,
                            segment.take(),
                        );
                    }
                    pen += width;
                }
            }
        }
        flush_segment(
            content,
            &self.registry,
            state,
            &mut last_td_x,
            baseline,
            segment,
        );
        content.end_text();
    }

    fn finish_page(
        &mut self,
        page: &Page,
        content: ContentStream,
        page_fonts: BTreeSet<usize>,
    ) -> Result<(), PdfError> {
        let page_id = self.writer.allocate();
        let content_id = self.writer.allocate();

        let data = content.into_bytes();
        let mut stream_dict = Dict::new();
        let bytes = if self.config.compress {
            stream_dict.name("Filter", "FlateDecode");
            deflate(&data)
        } else {
            data
        };
        self.writer.write_stream(content_id, stream_dict, &bytes)?;

        let (width, height) = page.size.dimensions();
        let mut font_dict = Dict::new();
        for (name, id) in self.registry.resources(&page_fonts) {
            font_dict.set(&name, id);
        }

        let mut page_dict = dict! {
            "Type" => Object::Name("Page".into()),
            "Parent" => Object::Ref(self.pages_tree),
            "MediaBox" => Object::Array(vec![
                Object::Int(0),
                Object::Int(0),
                Object::Real(width),
                Object::Real(height),
            ]),
        };
        if page.rotation.degrees() != 0 {
            page_dict.set("Rotate", page.rotation.degrees() as i64);
        }
        page_dict.set(
            "Resources",
            Object::Dict(dict! { "Font" => Object::Dict(font_dict) }),
        );
        page_dict.set("Contents", content_id);
        self.writer.write_object(page_id, &Object::Dict(page_dict))?;
        self.page_ids.push(page_id);
        Ok(())
    }

    /// Emit fonts, the pages tree, the catalog, and the file tail.
    fn finish(mut self, catalog: ObjectId) -> Result<RenderReport, PdfError> {
        let registry = std::mem::take(&mut self.registry);
        registry.finish(&mut self.writer)?;

        let kids: Vec<Object> = self.page_ids.iter().map(|&id| Object::Ref(id)).collect();
        let pages = Object::Dict(dict! {
            "Type" => Object::Name("Pages".into()),
            "Kids" => Object::Array(kids),
            "Count" => self.page_ids.len() as i64,
        });
        self.writer.write_object(self.pages_tree, &pages)?;

        let catalog_dict = Object::Dict(dict! {
            "Type" => Object::Name("Catalog".into()),
            "Pages" => Object::Ref(self.pages_tree),
        });
        self.writer.write_object(catalog, &catalog_dict)?;

        let info_id = match &self.config.document_info {
            Some(info) => {
                let id = self.writer.allocate();
                let mut d = Dict::new();
                for (key, value) in [
                    ("Title", &info.title),
                    ("Author", &info.author),
                    ("Subject", &info.subject),
                    ("Keywords", &info.keywords),
                    ("Creator", &info.creator),
                ] {
                    if let Some(value) = value {
                        d.set(key, Object::Literal(value.as_bytes().to_vec()));
                    }
                }
                self.writer.write_object(id, &Object::Dict(d))?;
                Some(id)
            }
            None => None,
        };

        self.writer.finish(catalog, info_id)?;
        self.report.pages = self.page_ids.len() as u32;
        Ok(self.report)
    }
}

fn emit_rule(content: &mut ContentStream, rule: &LaidRule) {
    content.set_stroke_color(rule.color);
    content.set_line_width(rule.stroke_width);
    content.move_to(rule.x, rule.y);
    content.line_to(rule.x + rule.width, rule.y);
    content.stroke();
}

fn flush_segment(
    content: &mut ContentStream,
    registry: &FontRegistry,
    state: &mut TextState,
    last_td_x: &mut Option<f64>,
    baseline: f64,
    segment: Option<Segment>,
) {
    let Some(segment) = segment else {
        return;
    };
    if segment.pieces.is_empty() {
        return;
    }

    match *last_td_x {
        None => content.text_position(segment.start_x, baseline),
        Some(previous) => content.text_position(segment.start_x - previous, 0.0),
    }
    *last_td_x = Some(segment.start_x);

    if state.font != Some((segment.font_index, segment.size)) {
        content.set_font(registry.resource_name(segment.font_index), segment.size);
        state.font = Some((segment.font_index, segment.size));
    }
    if state.color != Some(segment.color) {
        content.set_fill_color(segment.color);
        state.color = Some(segment.color);
    }
    content.show(&segment.pieces);
}

/// The space glyph and its natural advance in points, if the font has
/// one.
fn space_glyph(font: &Font, size: f64) -> Option<(Glyph, f64)> {
    match font {
        Font::Standard(tag) => Some((
            Glyph::WinAnsi(b' '),
            tag.advance(b' ') as f64 * size / 1000.0,
        )),
        Font::Embedded(ttf) => ttf
            .glyph_index(' ')
            .map(|gid| (Glyph::Cid(gid), ttf.advance_per_mille(gid) * size / 1000.0)),
    }
}

// Input validation: structural errors are caught before any byte is
// written.

fn validate(doc: &Document) -> Result<(), PdfError> {
    validate_style(&doc.style)?;
    for item in &doc.content {
        match item {
            PageItem::Fixed(page) => validate_page(page)?,
            PageItem::Auto(auto) => {
                validate_page(&auto.template.page_for(0))?;
                for block in &auto.blocks {
                    match block {
                        Block::Paragraph(paragraph) => {
                            validate_style(&paragraph.style)?;
                            validate_spans(&paragraph.spans)?;
                            if !(paragraph.indent >= 0.0) {
                                return Err(PdfError::InvalidInput(
                                    "paragraph indent must be non-negative".into(),
                                ));
                            }
                        }
                        Block::Rule(rule) => {
                            if !(rule.stroke_width >= 0.0) {
                                return Err(PdfError::InvalidInput(
                                    "rule stroke width must be non-negative".into(),
                                ));
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn validate_page(page: &Page) -> Result<(), PdfError> {
    let (width, height) = page.size.dimensions();
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        return Err(PdfError::InvalidInput(format!(
            "page size {width} x {height} is not positive"
        )));
    }
    let m = page.margin;
    if m.left < 0.0 || m.right < 0.0 || m.top < 0.0 || m.bottom < 0.0 {
        return Err(PdfError::InvalidInput("margins must be non-negative".into()));
    }
    if m.left + m.right >= width || m.top + m.bottom >= height {
        return Err(PdfError::InvalidInput(
            "margins leave no room for content".into(),
        ));
    }
    if page.columns.count == 0 {
        return Err(PdfError::InvalidInput("page needs at least one column".into()));
    }
    if page.columns.gap < 0.0 {
        return Err(PdfError::InvalidInput("column gap must be non-negative".into()));
    }
    for drawable in &page.drawables {
        if let Drawable::TextBox { spans, style, .. } = drawable {
            validate_style(style)?;
            validate_spans(spans)?;
        }
    }
    Ok(())
}

fn validate_style(style: &Style) -> Result<(), PdfError> {
    if let Some(size) = style.size {
        if !(size > 0.0 && size.is_finite()) {
            return Err(PdfError::InvalidInput(format!(
                "font size {size} must be positive"
            )));
        }
    }
    if let Some(spacing) = style.line_spacing {
        if !(spacing > 0.0 && spacing.is_finite()) {
            return Err(PdfError::InvalidInput(format!(
                "line spacing {spacing} must be positive"
            )));
        }
    }
    Ok(())
}

fn validate_spans(spans: &[Span]) -> Result<(), PdfError> {
    for span in spans {
        if let Span::Styled(style, children) = span {
            validate_style(style)?;
            validate_spans(children)?;
        }
    }
    Ok(())
}
