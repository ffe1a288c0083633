//! Text layout and PDF rendering for HomeFax documents.
//!
//! Layout and byte generation are pure: the same records always render to the
//! same PDF bytes.

pub mod booklet;
pub mod declaration;
pub mod document;
pub mod endorsement_text;
pub mod errors;
pub mod format;
pub mod layout;
pub mod pdf;

pub use booklet::{booklet_filename, booklet_lines, booklet_title, render_booklet};
pub use declaration::{declaration_filename, declaration_sections, render_declaration};
pub use document::{DocumentKind, DocumentSet, RenderedDocument, render_all};
pub use errors::RenderError;
pub use layout::{Layout, Section, paginate};
pub use pdf::{PdfDocumentBuilder, RenderedPdf, encode_win_ansi};

/// Footer stamped at the bottom of every page.
pub const FOOTER_TEXT: &str = "Synthetic sample for demo use only.";
