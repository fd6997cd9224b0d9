//! Fetch errors. All of them are recovered per tracked conference.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
