//! confdl-core: deadline parsing, timezone normalization and upcoming-deadline
//! selection for conference submission tracking.

pub mod aggregate;
pub mod clock;
pub mod conference;
pub mod deadline;
pub mod record;
pub mod tracked;
pub mod tz;
pub mod upcoming;
pub mod view;

pub use aggregate::{SOURCE_TAG, aggregate, aggregate_records, cycle_events};
pub use clock::{Clock, FixedClock, SystemClock};
pub use conference::{Conference, DeadlineKind, TimelineEvent};
pub use deadline::parse_deadline;
pub use record::{ConferenceRecord, Cycle, Rank, Scalar, TimelineEntry};
pub use tracked::{CategoryTable, TrackedConference, default_tracked};
pub use tz::{REFERENCE_OFFSET_MINUTES, resolve_offset_minutes, to_reference};
pub use upcoming::{days_left, select_upcoming, select_upcoming_with};
pub use view::{SortOrder, Urgency, UrgencyTally, ViewState};
