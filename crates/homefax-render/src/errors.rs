use thiserror::Error;

/// Errors emitted while rendering documents.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("policy {policy_id} references unknown policyholder {holder_id}")]
    MissingHolder {
        policy_id: String,
        holder_id: String,
    },
}
