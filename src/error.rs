use thiserror::Error;

pub type Result<T> = std::result::Result<T, CfnHookError>;

#[derive(Debug, Error)]
pub enum CfnHookError {
    /// A CloudFormation control-plane call failed, including the
    /// type-not-found and configuration-not-found variants.
    #[error("downstream CloudFormation error: {message}")]
    Downstream { message: String },

    /// The local project or a local input file is missing or malformed.
    #[error("invalid project: {reason}")]
    InvalidProject { reason: String },

    /// A registered hook schema violated an invariant the registry is
    /// supposed to enforce.
    #[error("internal error ({reason})")]
    Internal { reason: String },

    /// The operation was intentionally not performed: a required opt-in is
    /// missing or the user declined a confirmation.
    #[error("{reason}")]
    Aborted { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
