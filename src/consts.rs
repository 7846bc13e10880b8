// src/consts.rs
//! Shared constants — alphabet bounds and wire-format defaults

/// Number of letters the cipher rotates over
pub const ALPHABET_LEN: u8 = 26;

/// Smallest accepted shift key
pub const MIN_KEY: i32 = 1;

/// Largest accepted shift key (a full turn, i.e. identity)
pub const MAX_KEY: i32 = 26;

/// Separates records inside a subject string
pub const RECORD_DELIMITER: char = '#';

/// Separates fields inside a record
pub const FIELD_DELIMITER: char = '&';

/// Prefix of the unit field
pub const UNIT_MARKER: &str = "unit::";

/// Prefix of the value field
pub const VALUE_MARKER: &str = "value::";

/// Key used by the CLI when neither flag nor config provides one
pub const DEFAULT_KEY: i32 = 3;

/// Ring capacity used by the CLI when neither flag nor config provides one
pub const DEFAULT_RING_CAPACITY: usize = 3;

/// Largest ring the CLI and config will allocate storage for
pub const MAX_RING_CAPACITY: usize = 1 << 20;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "SENSOR_KIT_CONFIG";

/// Config file looked up when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "sensor-kit.toml";
