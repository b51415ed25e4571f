//! Inline span parser — splits one line of resume Markdown into plain and bold runs.
//!
//! Only the `**` delimiter pair is recognised. Segments at odd positions between
//! delimiters are bold. Unbalanced delimiters never error: the trailing unmatched
//! segment simply keeps the parity of its position.

/// The bold delimiter pair used by the resume dialect.
pub const BOLD_DELIMITER: &str = "**";

/// A run of text with a single weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub bold: bool,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Parses `text` into styled runs.
///
/// Never returns an empty list: input without delimiters comes back as one plain run,
/// and input that is nothing but delimiters comes back verbatim as one plain run.
pub fn parse_inline(text: &str) -> Vec<StyledRun> {
    if !text.contains(BOLD_DELIMITER) {
        return vec![StyledRun::plain(text)];
    }

    // Empty segments are dropped; neighbours of equal weight merge into one run.
    let mut runs: Vec<StyledRun> = Vec::new();
    for (i, segment) in text.split(BOLD_DELIMITER).enumerate() {
        if segment.is_empty() {
            continue;
        }
        let bold = i % 2 == 1;
        match runs.last_mut() {
            Some(last) if last.bold == bold => last.text.push_str(segment),
            _ => runs.push(StyledRun {
                text: segment.to_string(),
                bold,
            }),
        }
    }

    if runs.is_empty() {
        return vec![StyledRun::plain(text)];
    }
    runs
}

/// Removes every bold delimiter, leaving the bare text.
pub fn strip_bold(text: &str) -> String {
    text.replace(BOLD_DELIMITER, "")
}

/// Re-emits runs as dialect text, wrapping bold runs in delimiters.
pub fn runs_to_markdown(runs: &[StyledRun]) -> String {
    runs.iter()
        .map(|run| {
            if run.bold {
                format!("{BOLD_DELIMITER}{}{BOLD_DELIMITER}", run.text)
            } else {
                run.text.clone()
            }
        })
        .collect()
}
