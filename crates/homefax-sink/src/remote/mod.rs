//! Remote sink: policyholder and policy rows plus PDFs in object storage.
//!
//! Booklets are uploaded first, then every policyholder is inserted and its
//! backend id recorded. Each policy then uploads its declaration and inserts
//! a nested policy row that points at the holder id and the storage paths.
//! A failed record is logged, reported and skipped. Nothing is retried or
//! rolled back.

mod backend;
mod documents;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use tracing::{info, warn};

use homefax_core::{Dataset, Policy, StateCode};
use homefax_render::{DocumentSet, RenderedDocument};

pub use backend::{Backend, BackendConfig, DEFAULT_BUCKET, KEY_ENV, RestBackend, URL_ENV};
pub use documents::{DocumentEntry, PolicyDocument, PolicyholderDocument, StateSpecific};

use crate::errors::SinkError;
use crate::sink::{Sink, SinkReport};

pub const POLICYHOLDERS_TABLE: &str = "policyholders";
pub const POLICIES_TABLE: &str = "policies";
const PDF_CONTENT_TYPE: &str = "application/pdf";

pub fn booklet_storage_path(state: StateCode, filename: &str) -> String {
    format!("booklets/{state}/{filename}")
}

pub fn declaration_storage_path(policy: &Policy, filename: &str) -> String {
    format!("declarations/{}/{filename}", policy.effective_date.year())
}

pub struct RemoteBackendSink<B> {
    backend: B,
    generated_on: NaiveDate,
}

impl<B: Backend> RemoteBackendSink<B> {
    /// `generated_on` stamps the generation metadata and batch id of every
    /// policy row.
    pub fn new(backend: B, generated_on: NaiveDate) -> Self {
        Self {
            backend,
            generated_on,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    async fn upload_document(
        &self,
        path: &str,
        document: &RenderedDocument,
        report: &mut SinkReport,
    ) -> Result<String, SinkError> {
        let stored = self
            .backend
            .upload(path, &document.bytes, PDF_CONTENT_TYPE)
            .await?;
        report.bytes_written += document.bytes.len() as u64;
        report.documents += 1;
        report.uploaded.push(stored.clone());
        Ok(stored)
    }

    async fn upload_booklets(
        &self,
        documents: &DocumentSet,
        states: &[StateCode],
        report: &mut SinkReport,
    ) -> HashMap<StateCode, DocumentEntry> {
        let mut entries = HashMap::new();
        for &state in states {
            let Some(booklet) = documents.booklet(state) else {
                let err = SinkError::MissingDocument(format!("booklet {state}"));
                warn!(state = %state, error = %err, "booklet skipped");
                report.record_failure(state.code(), "booklet_upload", &err);
                continue;
            };
            let path = booklet_storage_path(state, &booklet.filename);
            match self.upload_document(&path, booklet, report).await {
                Ok(storage_path) => {
                    entries.insert(
                        state,
                        DocumentEntry {
                            kind: "booklet",
                            filename: booklet.filename.clone(),
                            storage_path,
                            pages: booklet.pages,
                        },
                    );
                }
                Err(err) => {
                    warn!(state = %state, error = %err, "booklet upload failed");
                    report.record_failure(state.code(), "booklet_upload", &err);
                }
            }
        }
        entries
    }

    async fn insert_policyholders(
        &self,
        dataset: &Dataset,
        report: &mut SinkReport,
    ) -> HashMap<String, String> {
        let mut ids = HashMap::new();
        for holder in &dataset.policyholders {
            let inserted = match serde_json::to_value(PolicyholderDocument::new(holder)) {
                Ok(row) => self.backend.insert(POLICYHOLDERS_TABLE, &row).await,
                Err(err) => Err(err.into()),
            };
            match inserted {
                Ok(id) => {
                    ids.insert(holder.holder_id.clone(), id);
                    report.policyholders += 1;
                }
                Err(err) => {
                    warn!(holder_id = %holder.holder_id, error = %err, "policyholder insert failed");
                    report.record_failure(&holder.holder_id, "holder_insert", &err);
                }
            }
        }
        ids
    }

    async fn publish_policy(
        &self,
        policy: &Policy,
        holder_ids: &HashMap<String, String>,
        booklets: &HashMap<StateCode, DocumentEntry>,
        documents: &DocumentSet,
        report: &mut SinkReport,
    ) {
        let policy_id = policy.policy_id.as_str();
        let Some(holder_id) = holder_ids.get(&policy.holder_id) else {
            let err = SinkError::Invalid(format!(
                "no backend id for policyholder {}",
                policy.holder_id
            ));
            warn!(policy_id, error = %err, "policy skipped");
            report.record_failure(policy_id, "holder_lookup", &err);
            return;
        };

        let mut entries = Vec::with_capacity(2);
        match documents.declaration(policy_id) {
            Some(declaration) => {
                let path = declaration_storage_path(policy, &declaration.filename);
                match self.upload_document(&path, declaration, report).await {
                    Ok(storage_path) => entries.push(DocumentEntry {
                        kind: "declaration",
                        filename: declaration.filename.clone(),
                        storage_path,
                        pages: declaration.pages,
                    }),
                    Err(err) => {
                        warn!(policy_id, error = %err, "declaration upload failed");
                        report.record_failure(policy_id, "declaration_upload", &err);
                    }
                }
            }
            None => {
                let err = SinkError::MissingDocument(format!("declaration {policy_id}"));
                warn!(policy_id, error = %err, "declaration missing");
                report.record_failure(policy_id, "declaration_upload", &err);
            }
        }
        if let Some(booklet) = booklets.get(&policy.state) {
            entries.push(booklet.clone());
        }

        let uploaded_declaration = entries
            .iter()
            .find(|entry| entry.kind == "declaration")
            .map(|entry| entry.storage_path.clone());
        let document = PolicyDocument::new(policy, holder_id, entries, self.generated_on);
        let inserted = match serde_json::to_value(&document) {
            Ok(row) => self.backend.insert(POLICIES_TABLE, &row).await,
            Err(err) => Err(err.into()),
        };
        match inserted {
            Ok(_) => report.policies += 1,
            Err(err) => {
                warn!(policy_id, error = %err, "policy insert failed");
                report.record_failure(policy_id, "policy_insert", &err);
                report.orphaned_uploads.extend(uploaded_declaration);
            }
        }
    }
}

#[async_trait]
impl<B: Backend> Sink for RemoteBackendSink<B> {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn publish(
        &self,
        dataset: &Dataset,
        documents: &DocumentSet,
    ) -> Result<SinkReport, SinkError> {
        let mut report = SinkReport::new(self.name());

        let booklets = self
            .upload_booklets(documents, &dataset.states(), &mut report)
            .await;
        let holder_ids = self.insert_policyholders(dataset, &mut report).await;
        for policy in &dataset.policies {
            self.publish_policy(policy, &holder_ids, &booklets, documents, &mut report)
                .await;
        }

        info!(
            policyholders = report.policyholders,
            policies = report.policies,
            uploaded = report.uploaded.len(),
            failures = report.failures.len(),
            orphaned = report.orphaned_uploads.len(),
            "remote publish completed"
        );
        Ok(report)
    }
}
