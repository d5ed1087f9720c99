//! Sample-document generator.
//!
//! Writes a handful of representative PDFs for manual inspection in a
//! viewer. Exits zero when every sample is produced.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use doc_model::{
    units, Align, AutoPage, Color, Document, Drawable, Margins, Page, PageItem, PageSize,
    Paragraph, Rule, Span, Standard14, Stroke, Style,
};
use pdf_emit::{PdfConfig, PdfGenerator};

fn blank() -> Document {
    Document::new(vec![])
}

fn hello() -> Document {
    Document::from_text("Olá Mundo!")
}

fn justified_article() -> Document {
    let body = "Typesetting turns a stream of styled words into lines and \
                pages. The optimal breaker weighs every feasible breakpoint \
                of a paragraph at once, trading stretched spaces against \
                hyphens, so a single awkward word no longer ruins the line \
                before it. Columns fill top to bottom and continue on the \
                next page, keeping at least two lines of a paragraph \
                together whenever reflow allows it.";
    let title = Paragraph::new("A short demonstration")
        .style(Style::new().size(18.0).bold())
        .allow_orphans();
    let paragraphs: Vec<doc_model::Block> = vec![
        title.into(),
        Rule::new().into(),
        Paragraph::new(body).align(Align::Justify).into(),
        Paragraph::new(body)
            .align(Align::Justify)
            .style(Style::new().font(Standard14::TimesRoman))
            .indent(units::pc(1.5))
            .into(),
    ];
    let template = Page::new(PageSize::A5).margin(Margins::uniform(units::cm(2.0)));
    Document::new(vec![AutoPage::new(paragraphs).template(template).into()])
}

fn two_columns() -> Document {
    let text = "Short measures expose the difference between the greedy and \
                the optimal breaker more than wide ones do, which is why \
                narrow newspaper columns hyphenate so eagerly. "
        .repeat(4);
    let template = Page::new(PageSize::A5)
        .margin(Margins::uniform(units::cm(1.5)))
        .columns(2, units::pc(1.0));
    Document::new(vec![AutoPage::new(vec![Paragraph::new(text)
        .align(Align::Justify)
        .style(Style::new().size(9.0))
        .into()])
    .template(template)
    .into()])
}

fn shapes() -> Document {
    let accent = Color::rgb(0.13, 0.38, 0.68);
    let page = Page::new(PageSize::A6)
        .draw(Drawable::rect(
            (30.0, 240.0),
            237.0,
            120.0,
            Some(Color::rgb(0.92, 0.95, 1.0)),
            Some(Stroke {
                color: accent,
                width: 1.5,
            }),
        ))
        .draw(Drawable::ellipse(
            (148.0, 300.0),
            60.0,
            30.0,
            None,
            Some(Stroke {
                color: accent,
                width: 1.0,
            }),
        ))
        .draw(Drawable::line(
            (30.0, 220.0),
            (267.0, 220.0),
            Stroke::default(),
        ))
        .draw(Drawable::TextBox {
            origin: (148.0, 190.0).into(),
            spans: vec![Span::from("centered caption\nsecond line")],
            style: Style::new().size(10.0).color(accent),
            align: Align::Center,
        });
    Document::new(vec![PageItem::Fixed(page)])
}

fn write_sample(dir: &Path, name: &str, doc: &Document) -> Result<()> {
    let path = dir.join(name);
    let (bytes, report) = PdfGenerator::new(PdfConfig::default())
        .to_bytes(doc)
        .with_context(|| format!("failed to render {name}"))?;
    fs::write(&path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    println!(
        "wrote {} ({} pages, {} bytes{})",
        path.display(),
        report.pages,
        bytes.len(),
        if report.is_clean() {
            String::new()
        } else {
            format!(
                ", {} substitutions, {} overfull lines",
                report.substitutions.len(),
                report.overfull_lines
            )
        }
    );
    Ok(())
}

fn main() -> Result<()> {
    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("samples"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    write_sample(&out_dir, "blank.pdf", &blank())?;
    write_sample(&out_dir, "hello.pdf", &hello())?;
    write_sample(&out_dir, "article.pdf", &justified_article())?;
    write_sample(&out_dir, "two-columns.pdf", &two_columns())?;
    write_sample(&out_dir, "shapes.pdf", &shapes())?;

    println!("done");
    Ok(())
}
