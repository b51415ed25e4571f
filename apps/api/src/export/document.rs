//! Resume document model — header plus classified body, before any rendering.

use tracing::debug;

use crate::export::classifier::{classify, Block};
use crate::export::contact::{Header, Identity};

/// Everything the renderer needs, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDocument {
    pub header: Header,
    pub blocks: Vec<Block>,
}

/// Builds the document model. Pure: identical inputs give identical output.
pub fn build_document(markdown: &str, identity: &Identity) -> ResumeDocument {
    let header = Header::from_identity(identity);
    let blocks = classify(markdown);

    debug!(
        "Classified {} lines into {} blocks (name: {}, contact: {})",
        markdown.lines().count(),
        blocks.len(),
        header.name.is_some(),
        header.contact.is_some()
    );

    ResumeDocument { header, blocks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markdown_with_first_name_only() {
        let identity = Identity {
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };
        let document = build_document("", &identity);
        assert_eq!(document.header.name.as_deref(), Some("Ana"));
        assert_eq!(document.header.contact, None);
        assert!(document.blocks.is_empty());
    }

    #[test]
    fn test_body_never_feeds_header() {
        let document = build_document("# Someone Else\nsomeone@example.com", &Identity::default());
        assert!(document.header.is_empty());
        assert_eq!(document.blocks.len(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let identity = Identity {
            first_name: Some("Ana".to_string()),
            phone: Some("555 234 5677".to_string()),
            ..Default::default()
        };
        let markdown = "SKILLS\n- Rust\n- Go\nEXPERIENCE\n- Shipped";
        assert_eq!(
            build_document(markdown, &identity),
            build_document(markdown, &identity)
        );
    }
}
