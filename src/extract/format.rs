// src/extract/format.rs
//! Delimiters and markers of the record wire format

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::record::Record;
use crate::consts::{FIELD_DELIMITER, RECORD_DELIMITER, UNIT_MARKER, VALUE_MARKER};
use crate::error::{CoreError, Result};

/// Wire format of a subject string
///
/// `Default` gives `#` between records, `&` between fields and the
/// `unit::` / `value::` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFormat {
    pub record_delimiter: char,
    pub field_delimiter: char,
    pub unit_marker: String,
    pub value_marker: String,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            record_delimiter: RECORD_DELIMITER,
            field_delimiter: FIELD_DELIMITER,
            unit_marker: UNIT_MARKER.into(),
            value_marker: VALUE_MARKER.into(),
        }
    }
}

impl RecordFormat {
    /// Check that records can be split unambiguously with this format
    pub fn validate(&self) -> Result<()> {
        if self.record_delimiter == self.field_delimiter {
            return Err(CoreError::InvalidFormat(
                "record and field delimiters must differ".into(),
            ));
        }
        for marker in [&self.unit_marker, &self.value_marker] {
            if marker.is_empty() {
                return Err(CoreError::InvalidFormat("markers must not be empty".into()));
            }
            if marker.contains([self.record_delimiter, self.field_delimiter]) {
                return Err(CoreError::InvalidFormat(format!(
                    "marker {marker:?} contains a delimiter"
                )));
            }
        }
        if self.unit_marker.starts_with(self.value_marker.as_str())
            || self.value_marker.starts_with(self.unit_marker.as_str())
        {
            return Err(CoreError::InvalidFormat(
                "one marker is a prefix of the other".into(),
            ));
        }
        Ok(())
    }

    /// Leading field of a raw record, i.e. everything up to the first field delimiter
    fn token_of<'a>(&self, raw: &'a str) -> &'a str {
        raw.split_once(self.field_delimiter)
            .map_or(raw, |(token, _)| token)
    }

    /// Decode a single record (no record delimiter inside `raw`)
    pub fn parse_record<'a>(&self, raw: &'a str) -> Result<Record<'a>> {
        let malformed = |reason: &'static str| CoreError::MalformedRecord {
            record: raw.to_owned(),
            reason,
        };

        let (token, fields) = raw
            .split_once(self.field_delimiter)
            .ok_or_else(|| malformed("missing unit field"))?;
        if token.is_empty() {
            return Err(malformed("empty token"));
        }

        let fields = fields
            .strip_prefix(self.unit_marker.as_str())
            .ok_or_else(|| malformed("missing unit field"))?;
        let (unit, rest) = fields
            .split_once(self.field_delimiter)
            .ok_or_else(|| malformed("missing value field"))?;
        if unit.is_empty() {
            return Err(malformed("empty unit"));
        }

        // the value runs to the end of the record
        let digits = rest
            .strip_prefix(self.value_marker.as_str())
            .ok_or_else(|| malformed("missing value field"))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("value is not an unsigned decimal"));
        }
        let value = digits
            .parse::<u32>()
            .map_err(|_| malformed("value out of range"))?;

        Ok(Record { token, unit, value })
    }

    /// Find the leftmost record whose leading field is exactly `token`
    pub fn extract<'a>(&self, subject: &'a str, token: &str) -> Result<Record<'a>> {
        if subject.is_empty() || token.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let Some(raw) = subject
            .split(self.record_delimiter)
            .find(|raw| self.token_of(raw) == token)
        else {
            return Err(CoreError::TokenNotFound(token.to_owned()));
        };

        match self.parse_record(raw) {
            Ok(record) => {
                trace!(token, unit = record.unit, value = record.value, "record matched");
                Ok(record)
            }
            Err(err) => {
                debug!(token, %err, "matching record is malformed");
                Err(CoreError::TokenNotFound(token.to_owned()))
            }
        }
    }

    /// Every non-empty record of `subject`, in order
    pub fn records<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = Result<Record<'a>>> + 'a {
        subject
            .split(self.record_delimiter)
            .filter(|raw| !raw.is_empty())
            .map(move |raw| self.parse_record(raw))
    }
}
