// src/extract/mod.rs
//! Field extraction from flat `TOKEN&unit::UNIT&value::NUMBER#...` strings
//!
//! The subject is scanned left to right and the first record whose
//! leading field equals the token wins, even if a later duplicate is
//! well formed.

pub mod format;
pub mod record;

pub use format::RecordFormat;
pub use record::Record;

use std::sync::OnceLock;

use crate::error::Result;

fn default_format() -> &'static RecordFormat {
    static FORMAT: OnceLock<RecordFormat> = OnceLock::new();
    FORMAT.get_or_init(RecordFormat::default)
}

/// Find `token` in `subject` and return its unit and value
///
/// Fails with `EmptyInput` when either argument is empty and with
/// `TokenNotFound` when no record matches or the matching record is
/// malformed.
pub fn extract<'a>(subject: &'a str, token: &str) -> Result<Record<'a>> {
    default_format().extract(subject, token)
}

/// Iterate over every record of `subject`, malformed ones included
pub fn records(subject: &str) -> impl Iterator<Item = Result<Record<'_>>> + '_ {
    default_format().records(subject)
}
