use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use homefax_core::Dataset;
use homefax_render::DocumentSet;

use crate::errors::SinkError;

/// Destination for a generated dataset and its rendered documents.
#[async_trait]
pub trait Sink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn publish(
        &self,
        dataset: &Dataset,
        documents: &DocumentSet,
    ) -> Result<SinkReport, SinkError>;
}

/// A record the remote sink skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkFailure {
    /// Holder id, policy id or booklet state.
    pub record: String,
    /// `booklet_upload`, `holder_insert`, `holder_lookup`, `declaration_upload`
    /// or `policy_insert`.
    pub stage: String,
    pub error: String,
}

/// Outcome of one publish call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SinkReport {
    pub sink: String,
    /// Policyholders written or inserted.
    pub policyholders: usize,
    /// Policies written or inserted.
    pub policies: usize,
    /// PDFs written or uploaded.
    pub documents: usize,
    pub bytes_written: u64,
    /// Files written by the local sink, relative to its dataset directory.
    pub files: Vec<String>,
    /// Storage paths uploaded by the remote sink.
    pub uploaded: Vec<String>,
    /// Uploaded declarations whose policy insert failed.
    pub orphaned_uploads: Vec<String>,
    pub failures: Vec<SinkFailure>,
    pub archive: Option<PathBuf>,
}

impl SinkReport {
    pub fn new(sink: &str) -> Self {
        Self {
            sink: sink.to_string(),
            ..Self::default()
        }
    }

    pub fn record_failure(&mut self, record: &str, stage: &str, error: &SinkError) {
        self.failures.push(SinkFailure {
            record: record.to_string(),
            stage: stage.to_string(),
            error: error.to_string(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
