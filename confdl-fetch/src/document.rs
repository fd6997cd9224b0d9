//! Dataset document decoding.

use confdl_core::ConferenceRecord;
use serde_yaml::Value;

use crate::error::Result;

/// Decode a YAML document into conference records.
///
/// A file holds either one conference or a list of them. An empty document
/// decodes to no records.
pub fn parse_document(text: &str) -> Result<Vec<ConferenceRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    // from_value errors carry no line/column, so decode from the text again.
    let records = match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Vec::new(),
        Value::Sequence(_) => serde_yaml::from_str(text)?,
        _ => vec![serde_yaml::from_str(text)?],
    };
    Ok(records)
}
