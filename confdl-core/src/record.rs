//! Raw dataset records, as published per conference in the ccfddl YAML files.
//!
//! Everything is optional: the dataset is crowd-sourced and fields come and go.

use serde::{Deserialize, Deserializer, Serialize};

/// A YAML scalar that may be written either as a number or as a string
/// (`year: 2026` vs `year: "2026"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Text(s) => s.clone(),
        }
    }
}

fn text_of(value: &Option<Scalar>) -> Option<String> {
    value.as_ref().map(Scalar::to_text)
}

/// An empty key (`timeline:`) is null in YAML; treat it like a missing list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rank {
    #[serde(default)]
    pub ccf: Option<Scalar>,
}

/// One conference entry of a dataset document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConferenceRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rank: Option<Rank>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub confs: Vec<Cycle>,
}

impl ConferenceRecord {
    pub fn ccf_rank(&self) -> Option<String> {
        self.rank.as_ref().and_then(|r| text_of(&r.ccf))
    }
}

/// One year's edition of a conference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    #[serde(default)]
    pub year: Option<Scalar>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub timeline: Vec<TimelineEntry>,
}

impl Cycle {
    pub fn year_text(&self) -> Option<String> {
        text_of(&self.year)
    }
}

/// Unparsed deadline pair for one submission round.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub abstract_deadline: Option<Scalar>,
    #[serde(default)]
    pub deadline: Option<Scalar>,
    #[serde(default)]
    pub comment: Option<Scalar>,
}

impl TimelineEntry {
    pub fn abstract_deadline_text(&self) -> Option<String> {
        text_of(&self.abstract_deadline)
    }

    pub fn deadline_text(&self) -> Option<String> {
        text_of(&self.deadline)
    }

    pub fn comment_text(&self) -> Option<String> {
        text_of(&self.comment)
    }
}
