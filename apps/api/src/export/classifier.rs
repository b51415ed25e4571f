//! Block classifier — the line-by-line state machine at the heart of the export.
//!
//! Each line is first given a [`LineKind`] from its text alone, then resolved against
//! the current [`ParserState`]. State only changes at the points listed below:
//!
//! | Line kind        | Flushes skills | Heading flag | Section mode            |
//! |------------------|----------------|--------------|-------------------------|
//! | blank            | no             | unchanged    | unchanged               |
//! | implicit section | yes            | set          | from section name       |
//! | `# `             | yes            | set          | reset to default        |
//! | `## `            | yes            | set          | from heading text       |
//! | `### `           | yes            | cleared      | unchanged               |
//! | bullet / text    | no             | cleared      | unchanged               |
//!
//! A still-open skills section is flushed at end of input.

use crate::export::education::{format_education_line, EducationEntry};
use crate::export::inline::{parse_inline, runs_to_markdown, strip_bold, StyledRun};

/// Section names recognised without a heading marker. Upstream prompts must use these.
pub const SECTION_VOCABULARY: &[&str] = &[
    "SUMMARY",
    "CORE SKILLS",
    "SKILLS",
    "EXPERIENCE",
    "EDUCATION",
    "CERTIFICATIONS",
    "PROJECTS",
];

/// Level given to implicit (marker-less) section headings.
pub const IMPLICIT_HEADING_LEVEL: u8 = 2;

const BULLET_PREFIXES: &[&str] = &["- ", "* "];
const BULLET_GLYPHS: &[char] = &['•', '●', '▪', '◦', '‣', '·'];

/// One classified unit of the resume body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Spacer,
    SectionHeading {
        text: String,
        level: u8,
        implicit: bool,
    },
    Bullet {
        runs: Vec<StyledRun>,
    },
    Education(EducationEntry),
    SkillsTable {
        items: Vec<String>,
    },
    Paragraph {
        runs: Vec<StyledRun>,
    },
}

impl Block {
    /// Dialect lines that classify back into this block.
    pub fn to_markdown(&self) -> String {
        match self {
            Block::Spacer => String::new(),
            Block::SectionHeading {
                text,
                implicit: true,
                ..
            } => text.clone(),
            Block::SectionHeading { text, level, .. } => {
                format!("{} {text}", "#".repeat(usize::from(*level)))
            }
            Block::Bullet { runs } => {
                let content = runs_to_markdown(runs);
                if content.is_empty() {
                    BULLET_GLYPHS[0].to_string()
                } else {
                    format!("- {content}")
                }
            }
            Block::Education(entry) => entry.to_markdown(),
            Block::SkillsTable { items } => items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Paragraph { runs } => runs_to_markdown(runs),
        }
    }
}

/// Reconstructs dialect text, one line per block line, each newline-terminated.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}\n", block.to_markdown()))
        .collect()
}

/// Which section the classifier is inside. Education and skills are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionMode {
    #[default]
    Default,
    Education,
    Skills,
}

impl SectionMode {
    fn for_title(title: &str) -> Self {
        match normalize_title(title).as_str() {
            "SKILLS" | "CORE SKILLS" => SectionMode::Skills,
            "EDUCATION" => SectionMode::Education,
            _ => SectionMode::Default,
        }
    }
}

/// Mutable state for one conversion. Created fresh per call and dropped at the end.
#[derive(Debug, Default)]
pub struct ParserState {
    pub previous_line_was_heading: bool,
    pub mode: SectionMode,
    pub pending_skills: Vec<String>,
}

/// Text-only classification of a trimmed line, before section state is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    ImplicitSection(String),
    Heading { level: u8, text: String },
    Bullet(&'a str),
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    fn of(line: &'a str) -> Self {
        if line.is_empty() {
            return LineKind::Blank;
        }

        let title = normalize_title(line);
        if SECTION_VOCABULARY.contains(&title.as_str()) {
            return LineKind::ImplicitSection(title);
        }

        for (level, marker) in [(1u8, "# "), (2, "## "), (3, "### ")] {
            if let Some(rest) = line.strip_prefix(marker) {
                let text = strip_bold(rest).trim().to_string();
                if !text.is_empty() {
                    return LineKind::Heading { level, text };
                }
            }
        }

        if let Some(content) = bullet_content(line) {
            return LineKind::Bullet(content);
        }

        LineKind::Text(line)
    }
}

/// Walks lines and accumulates blocks. Use [`classify`] unless feeding lines by hand.
#[derive(Debug, Default)]
pub struct Classifier {
    state: ParserState,
    blocks: Vec<Block>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn push_line(&mut self, raw: &str) {
        match LineKind::of(raw.trim()) {
            LineKind::Blank => self.blank(),
            LineKind::ImplicitSection(title) => {
                let mode = SectionMode::for_title(&title);
                self.open_section(title, IMPLICIT_HEADING_LEVEL, true, mode);
            }
            LineKind::Heading { level: 1, text } => {
                self.open_section(text, 1, false, SectionMode::Default);
            }
            LineKind::Heading { level: 2, text } => {
                let mode = SectionMode::for_title(&text);
                self.open_section(text, 2, false, mode);
            }
            LineKind::Heading { level, text } => {
                self.flush_skills();
                self.blocks.push(Block::SectionHeading {
                    text,
                    level,
                    implicit: false,
                });
                self.state.previous_line_was_heading = false;
            }
            LineKind::Bullet(content) => {
                self.state.previous_line_was_heading = false;
                if self.state.mode == SectionMode::Skills {
                    self.push_skill(content);
                } else {
                    self.blocks.push(Block::Bullet {
                        runs: parse_inline(content),
                    });
                }
            }
            LineKind::Text(text) => match self.state.mode {
                // A separator-only education line emits nothing and leaves the flag alone.
                SectionMode::Education => {
                    if let Some(entry) = format_education_line(text) {
                        self.state.previous_line_was_heading = false;
                        self.blocks.push(Block::Education(entry));
                    }
                }
                SectionMode::Skills => {
                    self.state.previous_line_was_heading = false;
                    self.push_skill(text);
                }
                SectionMode::Default => {
                    self.state.previous_line_was_heading = false;
                    self.blocks.push(Block::Paragraph {
                        runs: parse_inline(text),
                    });
                }
            },
        }
    }

    /// Flushes any open skills section and returns the blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_skills();
        self.blocks
    }

    fn blank(&mut self) {
        if self.state.previous_line_was_heading || self.state.mode == SectionMode::Skills {
            return;
        }
        self.blocks.push(Block::Spacer);
    }

    fn open_section(&mut self, text: String, level: u8, implicit: bool, mode: SectionMode) {
        self.flush_skills();
        self.blocks.push(Block::SectionHeading {
            text,
            level,
            implicit,
        });
        self.state.mode = mode;
        self.state.previous_line_was_heading = true;
    }

    fn push_skill(&mut self, item: &str) {
        let item = item.trim();
        if !item.is_empty() {
            self.state.pending_skills.push(item.to_string());
        }
    }

    fn flush_skills(&mut self) {
        if self.state.mode != SectionMode::Skills {
            return;
        }
        let items = std::mem::take(&mut self.state.pending_skills);
        if items.is_empty() {
            return;
        }
        self.blocks.push(Block::SkillsTable { items });
        self.blocks.push(Block::Spacer);
    }
}

/// Classifies a whole Markdown document. CRLF is treated as LF; empty input has no lines.
pub fn classify(markdown: &str) -> Vec<Block> {
    let mut classifier = Classifier::new();
    for line in markdown.lines() {
        classifier.push_line(line);
    }
    classifier.finish()
}

fn normalize_title(text: &str) -> String {
    text.trim().trim_end_matches(':').trim_end().to_uppercase()
}

fn bullet_content(line: &str) -> Option<&str> {
    for prefix in BULLET_PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Some(rest.trim());
        }
    }
    line.strip_prefix(BULLET_GLYPHS).map(str::trim)
}
