//! Presentation state: category filter, sort order and urgency tiers.
//!
//! Pure functions over the selected list; rendering itself lives in the CLI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conference::Conference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Nearest deadline first.
    #[default]
    Deadline,
    /// Case-insensitive by conference name.
    Name,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deadline" => Ok(SortOrder::Deadline),
            "name" => Ok(SortOrder::Name),
            other => Err(format!("unknown sort order: {other} (expected deadline|name)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Display label to keep; `None` shows every category.
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl ViewState {
    pub fn apply<'a>(&self, conferences: &'a [Conference]) -> Vec<&'a Conference> {
        let mut out: Vec<&Conference> = conferences
            .iter()
            .filter(|c| match &self.category {
                Some(label) => c.category.eq_ignore_ascii_case(label),
                None => true,
            })
            .collect();

        match self.sort {
            SortOrder::Deadline => out.sort_by_key(|c| c.min_days_left),
            SortOrder::Name => out.sort_by_key(|c| c.name.to_lowercase()),
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Urgent,
    Soon,
    Normal,
}

impl Urgency {
    /// Tier for a conference's nearest deadline (30 days / 6 months).
    pub fn for_conference(min_days_left: i64) -> Self {
        match min_days_left {
            d if d <= 30 => Urgency::Urgent,
            d if d <= 180 => Urgency::Soon,
            _ => Urgency::Normal,
        }
    }

    /// Tier for a single deadline (one week / 30 days).
    pub fn for_event(days_left: i64) -> Self {
        match days_left {
            d if d <= 7 => Urgency::Urgent,
            d if d <= 30 => Urgency::Soon,
            _ => Urgency::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Urgent => "urgent",
            Urgency::Soon => "soon",
            Urgency::Normal => "normal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyTally {
    pub urgent: usize,
    pub soon: usize,
    pub normal: usize,
}

impl UrgencyTally {
    pub fn count<'a, I>(conferences: I) -> Self
    where
        I: IntoIterator<Item = &'a Conference>,
    {
        let mut tally = Self::default();
        for conf in conferences {
            let Some(days) = conf.min_days_left else {
                continue;
            };
            match Urgency::for_conference(days) {
                Urgency::Urgent => tally.urgent += 1,
                Urgency::Soon => tally.soon += 1,
                Urgency::Normal => tally.normal += 1,
            }
        }
        tally
    }
}
