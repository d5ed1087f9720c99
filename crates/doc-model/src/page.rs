//! Pages, page templates, and the document root.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::drawable::Drawable;
use crate::style::Style;

/// Standard paper sizes, in points.
///
/// ISO sizes follow the 1/72-inch metric conversions; the US sizes are
/// exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
    Ledger,
    Custom(f64, f64),
}

impl PageSize {
    /// `(width, height)` in points.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            PageSize::A0 => (2383.937, 3370.394),
            PageSize::A1 => (1683.78, 2383.937),
            PageSize::A2 => (1190.551, 1683.78),
            PageSize::A3 => (841.89, 1190.551),
            PageSize::A4 => (595.276, 841.89),
            PageSize::A5 => (419.528, 595.276),
            PageSize::A6 => (297.638, 419.528),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Tabloid => (792.0, 1224.0),
            PageSize::Ledger => (1224.0, 792.0),
            PageSize::Custom(w, h) => (w, h),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

/// Page rotation as shown by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rotation {
    #[default]
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// The `/Rotate` value in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarter => 270,
        }
    }
}

/// Page margins in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(value: f64) -> Self {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Margins::uniform(crate::units::inch(1.0))
    }
}

/// Column layout inside the page margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    pub count: usize,
    pub gap: f64,
}

impl Default for Columns {
    fn default() -> Self {
        Columns {
            count: 1,
            gap: crate::units::pc(1.0),
        }
    }
}

/// A rectangular frame template: origin is the top-left corner in PDF
/// user space (y grows upward, so `top` is the larger coordinate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A single page: geometry plus absolutely positioned drawables.
#[derive(Debug, Clone)]
pub struct Page {
    pub size: PageSize,
    pub rotation: Rotation,
    pub margin: Margins,
    pub columns: Columns,
    pub drawables: Vec<Drawable>,
}

impl Page {
    pub fn new(size: PageSize) -> Self {
        Page {
            size,
            rotation: Rotation::None,
            margin: Margins::default(),
            columns: Columns::default(),
            drawables: Vec::new(),
        }
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn margin(mut self, margin: Margins) -> Self {
        self.margin = margin;
        self
    }

    pub fn columns(mut self, count: usize, gap: f64) -> Self {
        self.columns = Columns { count, gap };
        self
    }

    pub fn draw(mut self, drawable: Drawable) -> Self {
        self.drawables.push(drawable);
        self
    }

    /// The column frame templates for this page, left to right.
    pub fn frames(&self) -> Vec<FrameRect> {
        let (width, height) = self.size.dimensions();
        let count = self.columns.count.max(1);
        let content_width = width - self.margin.left - self.margin.right;
        let content_height = height - self.margin.top - self.margin.bottom;
        let column_width =
            (content_width - self.columns.gap * (count as f64 - 1.0)) / count as f64;

        (0..count)
            .map(|i| FrameRect {
                x: self.margin.left + i as f64 * (column_width + self.columns.gap),
                top: height - self.margin.top,
                width: column_width,
                height: content_height,
            })
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(PageSize::default())
    }
}

/// How an [`AutoPage`] obtains each successive page.
#[derive(Clone)]
pub enum PageTemplate {
    /// Every page uses the same template.
    Fixed(Page),
    /// Pages are produced by a callback from the zero-based page index.
    Generator(Arc<dyn Fn(usize) -> Page + Send + Sync>),
}

impl PageTemplate {
    pub fn page_for(&self, index: usize) -> Page {
        match self {
            PageTemplate::Fixed(page) => page.clone(),
            PageTemplate::Generator(f) => f(index),
        }
    }
}

impl std::fmt::Debug for PageTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageTemplate::Fixed(page) => f.debug_tuple("Fixed").field(page).finish(),
            PageTemplate::Generator(_) => write!(f, "Generator(..)"),
        }
    }
}

impl From<Page> for PageTemplate {
    fn from(page: Page) -> Self {
        PageTemplate::Fixed(page)
    }
}

/// A run of auto-paginated blocks flowing across as many pages as needed.
#[derive(Debug, Clone)]
pub struct AutoPage {
    pub blocks: Vec<Block>,
    pub template: PageTemplate,
}

impl AutoPage {
    pub fn new(blocks: Vec<Block>) -> Self {
        AutoPage {
            blocks,
            template: PageTemplate::Fixed(Page::default()),
        }
    }

    pub fn template(mut self, template: impl Into<PageTemplate>) -> Self {
        self.template = template.into();
        self
    }
}

/// One entry of a document's content list.
#[derive(Debug, Clone)]
pub enum PageItem {
    Fixed(Page),
    Auto(AutoPage),
}

impl From<Page> for PageItem {
    fn from(page: Page) -> Self {
        PageItem::Fixed(page)
    }
}

impl From<AutoPage> for PageItem {
    fn from(auto: AutoPage) -> Self {
        PageItem::Auto(auto)
    }
}

/// The document root: content in page order plus the global style.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub content: Vec<PageItem>,
    pub style: Style,
}

impl Document {
    pub fn new(content: Vec<PageItem>) -> Self {
        Document {
            content,
            style: Style::default(),
        }
    }

    /// A document with one auto-paginated paragraph on the default
    /// template.
    pub fn from_text(text: impl Into<String>) -> Self {
        let paragraph = crate::block::Paragraph::new(text.into());
        Document::new(vec![AutoPage::new(vec![paragraph.into()]).into()])
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_dimensions() {
        let (w, h) = PageSize::A4.dimensions();
        assert!((w - 595.276).abs() < 1e-6);
        assert!((h - 841.89).abs() < 1e-6);
    }

    #[test]
    fn letter_is_612_by_792() {
        assert_eq!(PageSize::Letter.dimensions(), (612.0, 792.0));
    }

    #[test]
    fn single_column_frame_fills_content_area() {
        let page = Page::new(PageSize::Custom(500.0, 700.0)).margin(Margins::uniform(50.0));
        let frames = page.frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].x, 50.0);
        assert_eq!(frames[0].top, 650.0);
        assert_eq!(frames[0].width, 400.0);
        assert_eq!(frames[0].height, 600.0);
    }

    #[test]
    fn columns_split_width_minus_gaps() {
        let page = Page::new(PageSize::Custom(500.0, 700.0))
            .margin(Margins::uniform(50.0))
            .columns(2, 20.0);
        let frames = page.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].width, 190.0);
        assert_eq!(frames[1].x, 50.0 + 190.0 + 20.0);
    }

    #[test]
    fn generator_template_receives_page_index() {
        let template = PageTemplate::Generator(Arc::new(|i| {
            Page::new(PageSize::Custom(100.0 + i as f64, 200.0))
        }));
        assert_eq!(template.page_for(3).size, PageSize::Custom(103.0, 200.0));
    }

    #[test]
    fn rotation_degrees() {
        assert_eq!(Rotation::None.degrees(), 0);
        assert_eq!(Rotation::ThreeQuarter.degrees(), 270);
    }
}
