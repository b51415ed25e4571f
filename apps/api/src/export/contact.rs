//! Contact header — identity fields supplied by the caller, normalised for display.
//!
//! Nothing here is derived from the Markdown body.

use serde::Deserialize;

/// Joins the populated contact fields.
pub const CONTACT_SEPARATOR: &str = " | ";

const LINKEDIN_HOST: &str = "www.linkedin.com";
const LINKEDIN_LABEL: &str = "linkedin";

/// Caller-supplied identity. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "linkedInHandle")]
    pub linked_in: Option<String>,
}

/// The two optional lines printed above the resume body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl Header {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            name: name_line(identity),
            contact: contact_line(identity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.contact.is_none()
    }
}

/// Normalises a phone number for display.
///
/// 10 digits (or 11 with a leading `1`) become `(AAA) BBB-CCCC`. Anything else is
/// returned as the trimmed input.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();

    let national = match digits.len() {
        11 if digits.starts_with('1') => &digits[1..],
        10 => digits.as_str(),
        _ => return trimmed.to_string(),
    };

    format!(
        "({}) {}-{}",
        &national[0..3],
        &national[3..6],
        &national[6..10]
    )
}

/// Expands a LinkedIn label, domain, path or bare handle into a full profile URL.
///
/// Returns `None` when nothing remains after trimming the label.
pub fn normalize_linkedin(raw: &str) -> Option<String> {
    let mut value = raw.trim();

    if value.len() >= LINKEDIN_LABEL.len()
        && value.is_char_boundary(LINKEDIN_LABEL.len())
        && value[..LINKEDIN_LABEL.len()].eq_ignore_ascii_case(LINKEDIN_LABEL)
    {
        let after_label = &value[LINKEDIN_LABEL.len()..];
        let rest = after_label.trim_start();
        if let Some(after_colon) = rest.strip_prefix(':') {
            value = after_colon.trim();
        } else if after_label.starts_with(char::is_whitespace) {
            value = rest;
        }
    }

    if value.is_empty() {
        return None;
    }

    let lower = value.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(value.to_string());
    }

    let first_segment = value.split('/').next().unwrap_or_default();
    if first_segment.contains('.') {
        return Some(format!("https://{value}"));
    }

    if lower.starts_with("in/") {
        return Some(format!("https://{LINKEDIN_HOST}/{value}"));
    }

    let handle: String = value
        .trim_start_matches('@')
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if handle.is_empty() {
        return None;
    }
    Some(format!("https://{LINKEDIN_HOST}/in/{handle}"))
}

fn name_line(identity: &Identity) -> Option<String> {
    let first = field(&identity.first_name).unwrap_or_default();
    let last = field(&identity.last_name).unwrap_or_default();
    let name = format!("{first} {last}").trim().to_string();
    (!name.is_empty()).then_some(name)
}

fn contact_line(identity: &Identity) -> Option<String> {
    let parts: Vec<String> = [
        field(&identity.location).map(str::to_string),
        field(&identity.phone).map(normalize_phone),
        field(&identity.email).map(str::to_string),
        field(&identity.linked_in).and_then(normalize_linkedin),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(CONTACT_SEPARATOR))
}

fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(normalize_phone("1-555-234-5677"), "(555) 234-5677");
    }

    #[test]
    fn test_phone_ten_digits() {
        assert_eq!(normalize_phone(" 555.234.5677 "), "(555) 234-5677");
    }

    #[test]
    fn test_phone_international_passes_through() {
        assert_eq!(normalize_phone("+44 20 7946 0958"), "+44 20 7946 0958");
    }

    #[test]
    fn test_phone_eleven_digits_without_leading_one_passes_through() {
        assert_eq!(normalize_phone("25552345677"), "25552345677");
    }

    #[test]
    fn test_linkedin_full_url_unchanged() {
        assert_eq!(
            normalize_linkedin("https://www.linkedin.com/in/ana-ruiz").as_deref(),
            Some("https://www.linkedin.com/in/ana-ruiz")
        );
    }

    #[test]
    fn test_linkedin_label_separated_by_space() {
        assert_eq!(
            normalize_linkedin("LinkedIn ana-ruiz").as_deref(),
            Some("https://www.linkedin.com/in/ana-ruiz")
        );
        assert_eq!(
            normalize_linkedin("linkedin   in/ana-ruiz").as_deref(),
            Some("https://www.linkedin.com/in/ana-ruiz")
        );
    }

    #[test]
    fn test_linkedin_label_and_bare_domain() {
        assert_eq!(
            normalize_linkedin("LinkedIn: linkedin.com/in/ana-ruiz").as_deref(),
            Some("https://linkedin.com/in/ana-ruiz")
        );
    }

    #[test]
    fn test_linkedin_path_segment() {
        assert_eq!(
            normalize_linkedin("in/ana-ruiz").as_deref(),
            Some("https://www.linkedin.com/in/ana-ruiz")
        );
    }

    #[test]
    fn test_linkedin_bare_handle() {
        assert_eq!(
            normalize_linkedin("@ana ruiz").as_deref(),
            Some("https://www.linkedin.com/in/anaruiz")
        );
    }

    #[test]
    fn test_linkedin_label_only_is_none() {
        assert_eq!(normalize_linkedin("linkedin:"), None);
        assert_eq!(normalize_linkedin("   "), None);
    }

    #[test]
    fn test_header_name_only() {
        let identity = Identity {
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };
        let header = Header::from_identity(&identity);
        assert_eq!(header.name.as_deref(), Some("Ana"));
        assert_eq!(header.contact, None);
    }

    #[test]
    fn test_header_contact_skips_blank_fields() {
        let identity = Identity {
            first_name: Some("Ana".to_string()),
            last_name: Some("Ruiz".to_string()),
            location: Some("Austin, TX".to_string()),
            phone: Some("5552345677".to_string()),
            email: Some("  ".to_string()),
            linked_in: Some("anaruiz".to_string()),
        };
        let header = Header::from_identity(&identity);
        assert_eq!(header.name.as_deref(), Some("Ana Ruiz"));
        assert_eq!(
            header.contact.as_deref(),
            Some("Austin, TX | (555) 234-5677 | https://www.linkedin.com/in/anaruiz")
        );
    }

    #[test]
    fn test_header_empty_identity() {
        assert!(Header::from_identity(&Identity::default()).is_empty());
    }

    #[test]
    fn test_identity_deserializes_camel_case() {
        let identity: Identity = serde_json::from_str(
            r#"{"firstName": "Ana", "lastName": "Ruiz", "linkedIn": "in/anaruiz"}"#,
        )
        .unwrap();
        assert_eq!(identity.first_name.as_deref(), Some("Ana"));
        assert_eq!(identity.linked_in.as_deref(), Some("in/anaruiz"));
    }
}
