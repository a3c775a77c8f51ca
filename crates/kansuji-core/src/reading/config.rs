use std::collections::BTreeMap;

use serde::Deserialize;

use crate::tables;
use crate::unicode::{is_kana_reading, is_numeral_glyph};

#[derive(Deserialize)]
struct ReadingConfig {
    readings: BTreeMap<String, String>,
    shifts: Vec<ShiftRule>,
}

/// One euphonic contraction: a literal kana pattern and its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShiftRule {
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadingConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[readings] table is empty")]
    Empty,
    #[error("key is not a numeral glyph: {0}")]
    InvalidGlyph(String),
    #[error("reading for {0} is not hiragana")]
    NonKanaReading(String),
    #[error("no reading defined for glyph: {0}")]
    MissingGlyph(String),
    #[error("empty shift pattern (rule {0})")]
    EmptyShift(usize),
    #[error("shift replacement for {0} re-introduces its own pattern")]
    SelfRetrigger(String),
    #[error("reading table already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub(super) struct ParsedConfig {
    pub readings: BTreeMap<String, String>,
    pub shifts: Vec<ShiftRule>,
}

/// Parse and validate TOML text into the glyph→reading map and the ordered
/// shift rule list.
///
/// Validation guarantees the rest of the crate relies on: a reading exists
/// for every glyph the namer can emit, readings are pure hiragana, and no
/// shift rule's replacement contains its own pattern (one rewrite pass is
/// therefore enough — a rule can never re-trigger itself).
pub(super) fn parse_readings_toml(toml_str: &str) -> Result<ParsedConfig, ReadingConfigError> {
    let config: ReadingConfig =
        toml::from_str(toml_str).map_err(|e| ReadingConfigError::Parse(e.to_string()))?;

    if config.readings.is_empty() {
        return Err(ReadingConfigError::Empty);
    }

    for (glyph, reading) in &config.readings {
        if !is_numeral_glyph(glyph) {
            return Err(ReadingConfigError::InvalidGlyph(glyph.clone()));
        }
        if !is_kana_reading(reading) {
            return Err(ReadingConfigError::NonKanaReading(glyph.clone()));
        }
    }

    // Every glyph the namer can emit must be covered.
    for glyph in required_glyphs() {
        if !config.readings.contains_key(glyph) {
            return Err(ReadingConfigError::MissingGlyph(glyph.to_string()));
        }
    }

    for (i, rule) in config.shifts.iter().enumerate() {
        if rule.pattern.is_empty() || rule.replacement.is_empty() {
            return Err(ReadingConfigError::EmptyShift(i));
        }
        if rule.replacement.contains(&rule.pattern) {
            return Err(ReadingConfigError::SelfRetrigger(rule.pattern.clone()));
        }
    }

    Ok(ParsedConfig {
        readings: config.readings,
        shifts: config.shifts,
    })
}

fn required_glyphs() -> impl Iterator<Item = &'static str> {
    tables::DIGITS
        .iter()
        .copied()
        .chain(tables::PLACES.iter().filter_map(|(_, g)| *g))
}
