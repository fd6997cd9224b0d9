//! Plain-text rendering of the selected conference list.

use std::fmt::Write;

use chrono::NaiveDateTime;
use confdl_core::{Conference, TimelineEvent, Urgency, UrgencyTally};

const STAMP: &str = "%Y-%m-%d %H:%M";

fn stamp(dt: NaiveDateTime) -> String {
    dt.format(STAMP).to_string()
}

fn days(d: Option<i64>) -> String {
    d.map(|d| format!("D-{d}")).unwrap_or_else(|| "D-?".to_string())
}

pub fn render_tally(tally: &UrgencyTally) -> String {
    format!(
        "urgent (<=30d): {}  soon (<=6mo): {}  later: {}",
        tally.urgent, tally.soon, tally.normal
    )
}

fn render_event(out: &mut String, event: &TimelineEvent, timezone: &str) {
    let tier = event.days_left.map(Urgency::for_event).unwrap_or(Urgency::Normal);
    let comment = if event.comment.is_empty() {
        String::new()
    } else {
        format!(" ({})", event.comment)
    };

    let _ = writeln!(
        out,
        "    - {}{}  {} KST / {} {}  {} [{}]",
        event.kind.label(),
        comment,
        stamp(event.deadline_reference),
        stamp(event.deadline),
        timezone,
        days(event.days_left),
        tier.label()
    );
}

pub fn render_card(conf: &Conference) -> String {
    let tier = conf
        .min_days_left
        .map(Urgency::for_conference)
        .unwrap_or(Urgency::Normal);

    let mut out = String::new();
    let _ = write!(
        out,
        "[{}] {} {}  {}",
        tier.label(),
        conf.name,
        conf.year,
        conf.category
    );
    if !conf.ccf_rank.is_empty() {
        let _ = write!(out, "  CCF-{}", conf.ccf_rank);
    }
    let _ = writeln!(out, "  {}", days(conf.min_days_left));

    let _ = writeln!(out, "    {} | {} | {}", conf.place, conf.date, conf.timezone);
    if !conf.link.is_empty() {
        let _ = writeln!(out, "    {}", conf.link);
    }
    for event in &conf.timelines {
        render_event(&mut out, event, &conf.timezone);
    }
    out
}

/// `tally` covers the whole filtered list, which may be longer than the page shown.
pub fn render_list(conferences: &[&Conference], tally: &UrgencyTally) -> String {
    if conferences.is_empty() {
        return "No conferences to display.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}\n", render_tally(tally));
    for conf in conferences {
        out.push_str(&render_card(conf));
        out.push('\n');
    }
    out
}
