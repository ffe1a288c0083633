use tracing::info;

use homefax_core::{Dataset, StateCode};

use crate::booklet::render_booklet;
use crate::declaration::render_declaration;
use crate::errors::RenderError;
use crate::layout::Layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    Booklet { state: StateCode },
    Declaration { policy_id: String, state: StateCode },
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Booklet { .. } => "booklet",
            DocumentKind::Declaration { .. } => "declaration",
        }
    }
}

/// One rendered PDF with the name it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    pub filename: String,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

/// Every document for a dataset: one booklet per state, one declaration per
/// policy, both in dataset order.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    pub booklets: Vec<RenderedDocument>,
    pub declarations: Vec<RenderedDocument>,
}

impl DocumentSet {
    pub fn booklet(&self, state: StateCode) -> Option<&RenderedDocument> {
        self.booklets
            .iter()
            .find(|doc| matches!(doc.kind, DocumentKind::Booklet { state: s } if s == state))
    }

    pub fn declaration(&self, policy_id: &str) -> Option<&RenderedDocument> {
        self.declarations.iter().find(|doc| {
            matches!(&doc.kind, DocumentKind::Declaration { policy_id: id, .. } if id == policy_id)
        })
    }

    pub fn len(&self) -> usize {
        self.booklets.len() + self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_bytes(&self) -> u64 {
        self.booklets
            .iter()
            .chain(&self.declarations)
            .map(|doc| doc.bytes.len() as u64)
            .sum()
    }
}

/// Render booklets for every state in the dataset and a declaration for
/// every policy.
pub fn render_all(dataset: &Dataset, layout: &Layout) -> Result<DocumentSet, RenderError> {
    let booklets: Vec<_> = dataset
        .states()
        .into_iter()
        .map(|state| render_booklet(state, layout))
        .collect();

    let mut declarations = Vec::with_capacity(dataset.policies.len());
    for policy in &dataset.policies {
        let holder =
            dataset
                .holder(&policy.holder_id)
                .ok_or_else(|| RenderError::MissingHolder {
                    policy_id: policy.policy_id.clone(),
                    holder_id: policy.holder_id.clone(),
                })?;
        declarations.push(render_declaration(policy, holder, layout));
    }

    let set = DocumentSet {
        booklets,
        declarations,
    };
    info!(
        booklets = set.booklets.len(),
        declarations = set.declarations.len(),
        bytes = set.total_bytes(),
        "documents rendered"
    );
    Ok(set)
}
