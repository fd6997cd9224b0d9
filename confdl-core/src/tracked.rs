//! Tracked conferences and category display labels.
//!
//! Both are plain configuration: the CLI may override them from config.toml.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A (subcategory, identifier) pair addressing one dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackedConference {
    pub sub: String,
    pub name: String,
}

impl TrackedConference {
    pub fn new(sub: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TrackedConference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.sub, self.name)
    }
}

const DEFAULT_TRACKED: &[(&str, &str)] = &[
    // AI
    ("AI", "cvpr"),
    ("AI", "iccv"),
    ("AI", "eccv"),
    ("AI", "aaai"),
    ("AI", "ijcai"),
    ("AI", "icml"),
    ("AI", "nips"),
    ("AI", "iclr"),
    // Security
    ("SC", "sp"),
    ("SC", "ccs"),
    ("SC", "uss"),
    ("SC", "ndss"),
    ("SC", "eurocrypt"),
    ("SC", "crypto"),
    ("SC", "asiacrypt"),
    ("SC", "esorics"),
    ("SC", "dsn"),
    // Network
    ("NW", "sigcomm"),
    ("NW", "infocom"),
    ("NW", "nsdi"),
    ("DS", "sigmetrics"),
    // Data
    ("DB", "icdm"),
    ("DB", "bigdata"),
];

pub fn default_tracked() -> Vec<TrackedConference> {
    DEFAULT_TRACKED
        .iter()
        .map(|(sub, name)| TrackedConference::new(*sub, *name))
        .collect()
}

/// Subcategory code -> display label. Unmapped codes display as themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable(BTreeMap<String, String>);

impl CategoryTable {
    pub fn label<'a>(&'a self, sub: &'a str) -> &'a str {
        self.0.get(sub).map(String::as_str).unwrap_or(sub)
    }

    /// Distinct display labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.0.values().map(String::as_str).collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let labels = [
            ("AI", "AI/Vision"),
            ("SC", "Security"),
            ("NW", "Network"),
            ("DS", "Network"),
            ("DB", "Data"),
            ("SE", "Software"),
        ];
        Self(
            labels
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}
