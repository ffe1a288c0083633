//! Output sinks for generated datasets.
//!
//! Both sinks consume the same inputs, a [`homefax_core::Dataset`] and its
//! rendered [`homefax_render::DocumentSet`], and return a [`SinkReport`].

pub mod atomic;
pub mod errors;
pub mod local;
pub mod output;
pub mod records;
pub mod remote;
pub mod sink;

pub use atomic::{write_bytes_atomic, write_json_atomic};
pub use errors::SinkError;
pub use local::LocalArchiveSink;
pub use records::{
    ManifestRow, PolicyRow, PolicyholderRow, manifest_rows, policy_rows, policyholder_rows,
};
pub use remote::{Backend, BackendConfig, RemoteBackendSink, RestBackend};
pub use sink::{Sink, SinkFailure, SinkReport};
