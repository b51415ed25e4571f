// Markdown resume → styled DOCX.
// Pure classification (inline, contact, education, skills, classifier, document)
// feeds the docx renderer. Rendering must run inside tokio::task::spawn_blocking.

pub mod classifier;
pub mod contact;
pub mod document;
pub mod docx;
pub mod education;
pub mod handlers;
pub mod inline;
pub mod skills;
pub mod stylesheet;

// Re-export the public API consumed by other modules (state, handlers).
pub use docx::ExportError;
pub use stylesheet::Stylesheet;
