use thiserror::Error;

/// Rejected plugin configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid plugin config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`hocs[{index}]` is empty")]
    EmptyHocName { index: usize },
}
