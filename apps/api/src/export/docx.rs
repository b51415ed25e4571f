//! DOCX assembler — renders a [`ResumeDocument`] with the fixed [`Stylesheet`].
//!
//! Rendering and zip packing are CPU-bound, so [`export_docx`] runs them inside
//! `tokio::task::spawn_blocking`. Output is held in memory; nothing touches disk.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BorderType, Docx, IndentLevel, Level, LevelJc, LevelText,
    LineSpacing, NumberFormat, Numbering, NumberingId, PageMargin, Paragraph, ParagraphBorder,
    ParagraphBorderPosition, ParagraphBorders, Run, RunFonts, SpecialIndentType, Start, Style,
    StyleType, Table, TableBorders, TableCell, TableRow, WidthType,
};
use thiserror::Error;
use tracing::debug;

use crate::export::classifier::Block;
use crate::export::contact::{Header, Identity};
use crate::export::document::{build_document, ResumeDocument};
use crate::export::education::EducationEntry;
use crate::export::inline::{parse_inline, StyledRun};
use crate::export::skills::{column_widths, layout_skills, SKILL_BULLET};
use crate::export::stylesheet::Stylesheet;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const BULLET_NUMBERING_ID: usize = 1;
const HEADING_STYLE_IDS: [&str; 3] = ["Heading1", "Heading2", "Heading3"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize document: {0}")]
    Serialize(String),

    #[error("export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Builds and renders a resume off the async executor.
pub async fn export_docx(
    markdown: String,
    identity: Identity,
    sheet: Stylesheet,
) -> Result<Vec<u8>, ExportError> {
    tokio::task::spawn_blocking(move || {
        let document = build_document(&markdown, &identity);
        render_docx(&document, &sheet)
    })
    .await?
}

/// Renders the document and packs it into a complete `.docx` byte buffer.
pub fn render_docx(document: &ResumeDocument, sheet: &Stylesheet) -> Result<Vec<u8>, ExportError> {
    let mut docx = add_header(base_document(sheet), &document.header, sheet);
    for block in &document.blocks {
        docx = add_block(docx, block, sheet);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    let bytes = buffer.into_inner();
    debug!(
        "Rendered {} blocks into {} DOCX bytes",
        document.blocks.len(),
        bytes.len()
    );
    Ok(bytes)
}

// ────────────────────────────────────────────────────────────────────────────
// Document skeleton
// ────────────────────────────────────────────────────────────────────────────

fn base_document(sheet: &Stylesheet) -> Docx {
    let fonts = RunFonts::new()
        .ascii(sheet.font)
        .hi_ansi(sheet.font)
        .east_asia(sheet.font)
        .cs(sheet.font);

    let mut docx = Docx::new()
        .page_size(sheet.page_width, sheet.page_height)
        .page_margin(
            PageMargin::new()
                .top(sheet.margin)
                .bottom(sheet.margin)
                .left(sheet.margin)
                .right(sheet.margin),
        )
        .default_fonts(fonts)
        .default_size(sheet.body_size)
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
                Level::new(
                    0,
                    Start::new(1),
                    NumberFormat::new("bullet"),
                    LevelText::new(SKILL_BULLET),
                    LevelJc::new("left"),
                )
                .indent(
                    Some(sheet.bullet_indent),
                    Some(SpecialIndentType::Hanging(sheet.bullet_indent / 2)),
                    None,
                    None,
                ),
            ),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for (i, style_id) in HEADING_STYLE_IDS.iter().enumerate() {
        let level = (i + 1) as u8;
        docx = docx.add_style(
            Style::new(*style_id, StyleType::Paragraph)
                .name(format!("Heading {level}"))
                .size(sheet.heading_size(level))
                .color(sheet.heading_color(level))
                .bold(),
        );
    }
    docx
}

fn add_header(mut docx: Docx, header: &Header, sheet: &Stylesheet) -> Docx {
    if let Some(name) = &header.name {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(40))
                .add_run(
                    Run::new()
                        .add_text(name.as_str())
                        .bold()
                        .size(sheet.name_size)
                        .color(sheet.accent_color),
                ),
        );
    }
    if let Some(contact) = &header.contact {
        docx = docx.add_paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(sheet.heading_before))
                .add_run(
                    Run::new()
                        .add_text(contact.as_str())
                        .size(sheet.contact_size)
                        .color(sheet.body_color),
                ),
        );
    }
    docx
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn add_block(docx: Docx, block: &Block, sheet: &Stylesheet) -> Docx {
    match block {
        Block::Spacer => docx.add_paragraph(
            Paragraph::new().line_spacing(LineSpacing::new().after(0).line(sheet.line_spacing)),
        ),
        Block::SectionHeading { text, level, .. } => {
            docx.add_paragraph(heading_paragraph(text, *level, sheet))
        }
        Block::Bullet { runs } => docx.add_paragraph(
            add_runs(Paragraph::new(), runs, sheet)
                .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
                .line_spacing(body_spacing(sheet, sheet.bullet_after)),
        ),
        Block::Education(entry) => education_paragraphs(entry, sheet)
            .into_iter()
            .fold(docx, |docx, p| docx.add_paragraph(p)),
        Block::SkillsTable { items } => docx.add_table(skills_table(items, sheet)),
        Block::Paragraph { runs } => docx.add_paragraph(
            add_runs(Paragraph::new(), runs, sheet)
                .line_spacing(body_spacing(sheet, sheet.paragraph_after)),
        ),
    }
}

/// Levels 1 and 2 get a thin rule underneath; role lines (level 3) do not.
fn heading_paragraph(text: &str, level: u8, sheet: &Stylesheet) -> Paragraph {
    let index = usize::from(level.clamp(1, 3)) - 1;
    let paragraph = Paragraph::new()
        .style(HEADING_STYLE_IDS[index])
        .line_spacing(
            LineSpacing::new()
                .before(if level <= 2 { sheet.heading_before } else { sheet.heading_after })
                .after(sheet.heading_after)
                .line(sheet.line_spacing),
        )
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .size(sheet.heading_size(level))
                .color(sheet.heading_color(level)),
        );

    if level > 2 {
        return paragraph;
    }
    paragraph.set_borders(
        ParagraphBorders::with_empty().set(
            ParagraphBorder::new(ParagraphBorderPosition::Bottom)
                .val(BorderType::Single)
                .size(sheet.rule_size)
                .space(1)
                .color(sheet.rule_color),
        ),
    )
}

fn education_paragraphs(entry: &EducationEntry, sheet: &Stylesheet) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    if let Some(degree) = &entry.degree {
        let after = if entry.institution.is_some() { 0 } else { sheet.paragraph_after };
        paragraphs.push(
            Paragraph::new()
                .line_spacing(body_spacing(sheet, after))
                .add_run(body_run(degree, sheet).bold()),
        );
    }
    if let Some(institution) = &entry.institution {
        paragraphs.push(
            Paragraph::new()
                .line_spacing(body_spacing(sheet, sheet.paragraph_after))
                .add_run(body_run(institution, sheet).italic()),
        );
    }
    paragraphs
}

fn skills_table(items: &[String], sheet: &Stylesheet) -> Table {
    let grid = layout_skills(items);
    let widths = column_widths(sheet.text_width(), grid.columns);

    let rows = grid
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .zip(&widths)
                .map(|(item, width)| {
                    let paragraph = match item {
                        Some(text) => add_runs(
                            Paragraph::new().add_run(body_run(&format!("{SKILL_BULLET} "), sheet)),
                            &parse_inline(text),
                            sheet,
                        ),
                        None => Paragraph::new(),
                    };
                    TableCell::new()
                        .width(*width, WidthType::Dxa)
                        .add_paragraph(paragraph.line_spacing(body_spacing(sheet, sheet.bullet_after)))
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    Table::new(rows)
        .set_grid(widths)
        .width(sheet.text_width(), WidthType::Dxa)
        .set_borders(TableBorders::with_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Runs
// ────────────────────────────────────────────────────────────────────────────

fn body_run(text: &str, sheet: &Stylesheet) -> Run {
    Run::new()
        .add_text(text)
        .size(sheet.body_size)
        .color(sheet.body_color)
}

fn add_runs(paragraph: Paragraph, runs: &[StyledRun], sheet: &Stylesheet) -> Paragraph {
    runs.iter().fold(paragraph, |paragraph, styled| {
        let run = body_run(&styled.text, sheet);
        paragraph.add_run(if styled.bold { run.bold() } else { run })
    })
}

fn body_spacing(sheet: &Stylesheet, after: u32) -> LineSpacing {
    LineSpacing::new().after(after).line(sheet.line_spacing)
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn document_xml(bytes: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    fn ana() -> Identity {
        Identity {
            first_name: Some("Ana".to_string()),
            last_name: Some("Ruiz".to_string()),
            email: Some("ana@example.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_produces_zip_container() {
        let document = build_document("SUMMARY\nBuilds things.", &ana());
        let bytes = render_docx(&document, &Stylesheet::DEFAULT).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_render_header_and_body_text() {
        let document = build_document(
            "EXPERIENCE\n### Engineer | Acme\n- **Led** a team of 5",
            &ana(),
        );
        let xml = document_xml(&render_docx(&document, &Stylesheet::DEFAULT).unwrap());
        assert!(xml.contains("Ana Ruiz"));
        assert!(xml.contains("ana@example.com"));
        assert!(xml.contains("EXPERIENCE"));
        assert!(xml.contains("Engineer | Acme"));
        assert!(xml.contains("Led"));
        assert!(xml.contains(" a team of 5"));
    }

    #[test]
    fn test_render_skills_as_table() {
        let document = build_document("SKILLS\n- Rust\n- Go\n- SQL", &Identity::default());
        let xml = document_xml(&render_docx(&document, &Stylesheet::DEFAULT).unwrap());
        assert!(xml.contains("w:tbl"));
        assert!(xml.contains("Rust"));
    }

    #[test]
    fn test_render_empty_document() {
        let document = build_document("", &Identity::default());
        let bytes = render_docx(&document, &Stylesheet::DEFAULT).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_education_paragraphs_skip_missing_half() {
        let entry = EducationEntry {
            degree: Some("BA".to_string()),
            institution: None,
        };
        assert_eq!(education_paragraphs(&entry, &Stylesheet::DEFAULT).len(), 1);
    }

    #[tokio::test]
    async fn test_export_docx_runs_off_executor() {
        let bytes = export_docx(
            "EDUCATION\nBA — Reed College".to_string(),
            ana(),
            Stylesheet::DEFAULT,
        )
        .await
        .unwrap();
        let xml = document_xml(&bytes);
        assert!(xml.contains("Reed College"));
    }
}
