//! Where dataset documents come from: the published dataset over HTTP, or a
//! local checkout of it.

use std::path::PathBuf;

use confdl_core::TrackedConference;
use reqwest::StatusCode;

use crate::error::{FetchError, Result};

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/ccfddl/ccf-deadlines/main/conference";
pub const DEFAULT_EXTENSION: &str = "yml";

/// Loads the raw document text for one tracked conference.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn load(&self, tracked: &TrackedConference) -> Result<String>;
}

/// `<base>/<sub>/<name>.<ext>` over HTTP. Only a plain 200 counts as success.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
    extension: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, extension)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            extension: extension.into(),
        }
    }

    pub fn url_for(&self, tracked: &TrackedConference) -> String {
        format!(
            "{}/{}/{}.{}",
            self.base_url, tracked.sub, tracked.name, self.extension
        )
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_EXTENSION)
    }
}

impl DocumentSource for HttpSource {
    async fn load(&self, tracked: &TrackedConference) -> Result<String> {
        let url = self.url_for(tracked);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}

/// `<root>/<sub>/<name>.<ext>` on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
    extension: String,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn path_for(&self, tracked: &TrackedConference) -> PathBuf {
        self.root
            .join(&tracked.sub)
            .join(format!("{}.{}", tracked.name, self.extension))
    }
}

impl DocumentSource for DirSource {
    async fn load(&self, tracked: &TrackedConference) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.path_for(tracked)).await?)
    }
}
