//! Glyph-to-kana reading table and euphonic shift rules.
//!
//! Loaded from TOML with embedded defaults, following the same OnceLock
//! pattern as the settings and romaji tables elsewhere in this family of
//! engines: `ReadingTable::init_custom(toml)` before first use, or
//! `ReadingTable::global()` for the lazily built default singleton.

mod config;

pub use config::{ReadingConfigError, ShiftRule};

use std::collections::BTreeMap;
use std::sync::OnceLock;

use config::parse_readings_toml;

pub const DEFAULT_READINGS_TOML: &str = include_str!("default_readings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable glyph→reading map plus the ordered contraction rules.
pub struct ReadingTable {
    readings: BTreeMap<String, String>,
    shifts: Vec<ShiftRule>,
}

impl ReadingTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ReadingConfigError> {
        // Validate eagerly
        parse_readings_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ReadingConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ReadingTable {
        static INSTANCE: OnceLock<ReadingTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_READINGS_TOML);
            let parsed = parse_readings_toml(toml_str).expect("readings TOML must be valid");
            ReadingTable {
                readings: parsed.readings,
                shifts: parsed.shifts,
            }
        })
    }

    /// Build a table from TOML text without touching the singleton.
    pub fn from_toml(toml_str: &str) -> Result<ReadingTable, ReadingConfigError> {
        let parsed = parse_readings_toml(toml_str)?;
        Ok(ReadingTable {
            readings: parsed.readings,
            shifts: parsed.shifts,
        })
    }

    /// Standalone reading for a glyph. Coverage of every emittable glyph is
    /// validated at parse time, so a miss can only mean a glyph outside the
    /// numeral tables; an empty reading keeps the pipeline total.
    pub fn reading(&self, glyph: &str) -> &str {
        self.readings.get(glyph).map(String::as_str).unwrap_or("")
    }

    /// Contraction rules in application order.
    pub fn shifts(&self) -> &[ShiftRule] {
        &self.shifts
    }

    pub fn readings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.readings.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }
}
