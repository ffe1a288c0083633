//! Local sink: CSV and JSON manifests plus PDFs on disk, bundled into a ZIP.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use homefax_core::Dataset;
use homefax_render::DocumentSet;

use crate::atomic::{write_bytes_atomic, write_json_atomic};
use crate::output::write_csv;
use crate::errors::SinkError;
use crate::records::{manifest_rows, pdf_arcname, policy_rows, policyholder_rows};
use crate::sink::{Sink, SinkReport};

pub const POLICYHOLDERS_CSV: &str = "policyholders.csv";
pub const POLICIES_CSV: &str = "policies.csv";
pub const MANIFEST_CSV: &str = "policy_manifest.csv";
pub const MANIFEST_JSON: &str = "policy_manifest.json";

/// Writes the dataset under `dataset_dir` and bundles it into `archive_path`.
#[derive(Debug, Clone)]
pub struct LocalArchiveSink {
    dataset_dir: PathBuf,
    archive_path: PathBuf,
}

impl LocalArchiveSink {
    pub fn new(dataset_dir: impl Into<PathBuf>, archive_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            archive_path: archive_path.into(),
        }
    }

    pub fn dataset_dir(&self) -> &Path {
        &self.dataset_dir
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive_path
    }

    fn write_files(
        &self,
        dataset: &Dataset,
        documents: &DocumentSet,
        report: &mut SinkReport,
    ) -> Result<(), SinkError> {
        std::fs::create_dir_all(self.dataset_dir.join("pdf"))?;

        let manifest = manifest_rows(dataset, documents)?;
        report.bytes_written +=
            write_csv(&self.dataset_dir.join(POLICYHOLDERS_CSV), &policyholder_rows(dataset))?;
        report.bytes_written +=
            write_csv(&self.dataset_dir.join(POLICIES_CSV), &policy_rows(dataset))?;
        report.bytes_written += write_csv(&self.dataset_dir.join(MANIFEST_CSV), &manifest)?;
        report.bytes_written += write_json_atomic(&self.dataset_dir.join(MANIFEST_JSON), &manifest)?;
        report.files.extend(
            [POLICYHOLDERS_CSV, POLICIES_CSV, MANIFEST_CSV, MANIFEST_JSON].map(String::from),
        );

        for document in documents.booklets.iter().chain(&documents.declarations) {
            let arcname = pdf_arcname(&document.filename);
            report.bytes_written +=
                write_bytes_atomic(&self.dataset_dir.join(&arcname), &document.bytes)?;
            debug!(file = %arcname, pages = document.pages, "pdf written");
            report.files.push(arcname);
            report.documents += 1;
        }

        report.policyholders = dataset.policyholders.len();
        report.policies = dataset.policies.len();
        Ok(())
    }

    /// Bundle the written files, in `files` order, into the archive.
    fn write_archive(&self, files: &[String]) -> Result<u64, SinkError> {
        if let Some(parent) = self.archive_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut zip = ZipWriter::new(File::create(&self.archive_path)?);
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        for name in files {
            let data = std::fs::read(self.dataset_dir.join(name))?;
            zip.start_file(name.as_str(), options)?;
            zip.write_all(&data)?;
        }
        let file = zip.finish()?;
        Ok(file.metadata()?.len())
    }
}

#[async_trait]
impl Sink for LocalArchiveSink {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn publish(
        &self,
        dataset: &Dataset,
        documents: &DocumentSet,
    ) -> Result<SinkReport, SinkError> {
        let mut report = SinkReport::new(self.name());
        self.write_files(dataset, documents, &mut report)?;

        let archive_bytes = self.write_archive(&report.files)?;
        report.archive = Some(self.archive_path.clone());

        info!(
            policyholders = report.policyholders,
            policies = report.policies,
            documents = report.documents,
            bytes = report.bytes_written,
            archive = %self.archive_path.display(),
            archive_bytes,
            "local archive written"
        );
        Ok(report)
    }
}
