//! Core contracts and helpers for HomeFax.
//!
//! This crate defines the typed policy records, the static reference tables
//! every generator draws from, validation of generated records, and the
//! redaction helpers shared by the sinks and the CLI.

pub mod error;
pub mod model;
pub mod redaction;
pub mod reference;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use model::{
    Agent, Dataset, MailingAddress, Mortgagee, Policy, PolicyStatus, Policyholder, Property,
    PropertyDiscounts,
};
pub use redaction::{RedactedBackend, redact_backend, redact_secret};
pub use reference::{EndorsementSpec, StateRates};
pub use types::{
    Coverages, Deductible, Endorsement, PremiumBreakdown, StateCode, round_cents, round_tenths,
};
pub use validation::{validate_dataset, validate_policy};

/// Contract version for dataset manifests and generation reports.
pub const DATASET_VERSION: &str = "0.1";

/// Coverage form written on every generated policy.
pub const COVERAGE_FORM: &str = "HO-3";
