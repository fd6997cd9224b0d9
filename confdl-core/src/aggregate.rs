//! Flatten raw dataset records into normalized conference cycles.

use tracing::debug;

use crate::conference::{Conference, DeadlineKind, TimelineEvent};
use crate::deadline::parse_deadline;
use crate::record::{ConferenceRecord, Cycle};
use crate::tracked::{CategoryTable, TrackedConference};
use crate::tz::{DEFAULT_TIMEZONE_LABEL, to_reference};

/// Tag attached to every aggregated cycle.
pub const SOURCE_TAG: &str = "ccfddl";

const MISSING: &str = "TBA";

/// Parse every deadline of a cycle and convert it to the reference timezone.
///
/// Abstract and paper deadlines of one timeline entry become independent
/// events sharing the entry's comment. Unparseable strings are skipped.
pub fn cycle_events(cycle: &Cycle) -> Vec<TimelineEvent> {
    let timezone = cycle.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE_LABEL);
    let mut events = Vec::new();

    for entry in &cycle.timeline {
        let comment = entry.comment_text().unwrap_or_default();
        let candidates = [
            (DeadlineKind::AbstractRegistration, entry.abstract_deadline_text()),
            (DeadlineKind::PaperSubmission, entry.deadline_text()),
        ];

        for (kind, raw) in candidates {
            if let Some(deadline) = parse_deadline(raw.as_deref()) {
                events.push(TimelineEvent {
                    kind,
                    deadline,
                    deadline_reference: to_reference(deadline, timezone),
                    comment: comment.clone(),
                    days_left: None,
                });
            }
        }
    }

    events
}

/// Aggregate the records fetched for one tracked pair.
pub fn aggregate_records(
    tracked: &TrackedConference,
    records: &[ConferenceRecord],
    categories: &CategoryTable,
) -> Vec<Conference> {
    let category = categories.label(&tracked.sub);
    let mut out = Vec::new();

    for record in records {
        let name = record.title.clone().unwrap_or_default();
        let full_name = record.description.clone().unwrap_or_default();
        let ccf_rank = record.ccf_rank().unwrap_or_default();

        for cycle in &record.confs {
            let timelines = cycle_events(cycle);
            if timelines.is_empty() {
                debug!(
                    "{tracked}: dropping {} {} (no parseable deadlines)",
                    name,
                    cycle.year_text().unwrap_or_default()
                );
                continue;
            }

            out.push(Conference {
                name: name.clone(),
                full_name: full_name.clone(),
                category: category.to_string(),
                ccf_rank: ccf_rank.clone(),
                year: cycle.year_text().unwrap_or_default(),
                place: cycle.place.clone().unwrap_or_else(|| MISSING.to_string()),
                date: cycle.date.clone().unwrap_or_else(|| MISSING.to_string()),
                timezone: cycle
                    .timezone
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TIMEZONE_LABEL.to_string()),
                link: cycle.link.clone().unwrap_or_default(),
                timelines,
                min_days_left: None,
                source: SOURCE_TAG.to_string(),
            });
        }
    }

    out
}

/// Aggregate every fetched batch into one flat list. Order follows the input.
pub fn aggregate<I>(batches: I, categories: &CategoryTable) -> Vec<Conference>
where
    I: IntoIterator<Item = (TrackedConference, Vec<ConferenceRecord>)>,
{
    batches
        .into_iter()
        .flat_map(|(tracked, records)| aggregate_records(&tracked, &records, categories))
        .collect()
}
