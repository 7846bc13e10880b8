// src/extract/record.rs
use std::fmt;

use serde::Serialize;

use crate::consts::{FIELD_DELIMITER, UNIT_MARKER, VALUE_MARKER};

/// One decoded record, borrowing its text from the subject string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    pub token: &'a str,
    pub unit: &'a str,
    pub value: u32,
}

/// Renders the record in the default wire format
impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_DELIMITER}{UNIT_MARKER}{}{FIELD_DELIMITER}{VALUE_MARKER}{}",
            self.token, self.unit, self.value
        )
    }
}
