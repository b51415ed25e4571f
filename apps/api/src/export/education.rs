//! Education lines — splits "Degree, Field — Institution" into its two halves.

use crate::export::inline::strip_bold;

/// One education record. The degree renders bold, the institution italic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: Option<String>,
    pub institution: Option<String>,
}

impl EducationEntry {
    /// Dialect text that splits back into the same entry.
    pub fn to_markdown(&self) -> String {
        match (&self.degree, &self.institution) {
            (Some(degree), Some(institution)) => format!("{degree} — {institution}"),
            (Some(degree), None) => degree.clone(),
            (None, Some(institution)) => format!("— {institution}"),
            (None, None) => String::new(),
        }
    }
}

/// Splits an education line on its first recognised separator.
///
/// Returns `None` when both halves are empty (blank or separator-only lines).
pub fn format_education_line(line: &str) -> Option<EducationEntry> {
    let text = strip_bold(line);

    let (degree, institution) = match find_separator(&text) {
        Some((start, len)) => (&text[..start], Some(&text[start + len..])),
        None => (text.as_str(), None),
    };

    let degree = non_empty(degree);
    let institution = institution.and_then(non_empty);

    if degree.is_none() && institution.is_none() {
        return None;
    }
    Some(EducationEntry {
        degree,
        institution,
    })
}

/// Byte offset and length of the earliest separator: em dash, en dash, pipe, or " - ".
fn find_separator(text: &str) -> Option<(usize, usize)> {
    let candidates = [
        text.find('—').map(|i| (i, '—'.len_utf8())),
        text.find('–').map(|i| (i, '–'.len_utf8())),
        text.find('|').map(|i| (i, 1)),
        find_spaced_hyphen(text),
    ];
    candidates.into_iter().flatten().min_by_key(|(start, _)| *start)
}

/// A hyphen with exactly one space on each side; "Ph.D. - MIT" but not "co-op".
fn find_spaced_hyphen(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    text.match_indices(" - ")
        .map(|(i, _)| i)
        .find(|&i| {
            let before_ok = i == 0 || bytes[i - 1] != b' ';
            let after_ok = bytes.get(i + 3).map_or(true, |&b| b != b' ');
            before_ok && after_ok
        })
        .map(|i| (i, 3))
}

fn non_empty(segment: &str) -> Option<String> {
    let trimmed = segment.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_em_dash_split() {
        let entry = format_education_line("Bachelor of Arts, History — State University").unwrap();
        assert_eq!(entry.degree.as_deref(), Some("Bachelor of Arts, History"));
        assert_eq!(entry.institution.as_deref(), Some("State University"));
    }

    #[test]
    fn test_pipe_split_strips_bold() {
        let entry = format_education_line("**M.S. Computer Science** | Georgia Tech").unwrap();
        assert_eq!(entry.degree.as_deref(), Some("M.S. Computer Science"));
        assert_eq!(entry.institution.as_deref(), Some("Georgia Tech"));
    }

    #[test]
    fn test_spaced_hyphen_split() {
        let entry = format_education_line("B.Eng. Civil - University of Leeds").unwrap();
        assert_eq!(entry.degree.as_deref(), Some("B.Eng. Civil"));
        assert_eq!(entry.institution.as_deref(), Some("University of Leeds"));
    }

    #[test]
    fn test_unspaced_hyphen_is_not_a_separator() {
        let entry = format_education_line("Co-op Certificate in Data-Driven Design").unwrap();
        assert_eq!(
            entry.degree.as_deref(),
            Some("Co-op Certificate in Data-Driven Design")
        );
        assert_eq!(entry.institution, None);
    }

    #[test]
    fn test_first_separator_wins() {
        let entry = format_education_line("MBA | Wharton — Philadelphia").unwrap();
        assert_eq!(entry.degree.as_deref(), Some("MBA"));
        assert_eq!(entry.institution.as_deref(), Some("Wharton — Philadelphia"));
    }

    #[test]
    fn test_en_dash_split() {
        let entry = format_education_line("PhD, Physics – ETH Zürich").unwrap();
        assert_eq!(entry.degree.as_deref(), Some("PhD, Physics"));
        assert_eq!(entry.institution.as_deref(), Some("ETH Zürich"));
    }

    #[test]
    fn test_separator_only_line_is_omitted() {
        assert_eq!(format_education_line(" — "), None);
        assert_eq!(format_education_line("   "), None);
    }

    #[test]
    fn test_missing_degree_keeps_institution() {
        let entry = format_education_line("| State University").unwrap();
        assert_eq!(entry.degree, None);
        assert_eq!(entry.institution.as_deref(), Some("State University"));
    }

    #[test]
    fn test_to_markdown_splits_back_identically() {
        let entry = format_education_line("BA, Economics | Reed College").unwrap();
        assert_eq!(format_education_line(&entry.to_markdown()), Some(entry));
    }
}
