//! Spelling pipeline: sanitize → decompose → render → contract.

use tracing::{debug, debug_span};

use crate::euphony::apply_shifts;
use crate::namer::render;
use crate::reading::ReadingTable;
use crate::sanitize::sanitize;
use crate::tree::place_tree;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("input is not a non-negative decimal integer")]
    InvalidInput,
    #[error("number has {digits} significant digits, beyond the largest place name (10^68)")]
    UnsupportedMagnitude { digits: usize },
}

/// Both written forms of a spelled number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    /// Kanji numeral rendering, e.g. 六百 — the primary display form.
    pub kanji: String,
    /// Contracted spoken reading, e.g. ろっぴゃく.
    pub reading: String,
}

/// Spell a raw token in Japanese numerals.
///
/// The token is sanitized (whitespace-tolerant, digits only), decomposed
/// into a place-value tree, rendered against the global reading table, and
/// the reading is run through the euphonic shift pass.
pub fn spell(raw: &str) -> Result<Spelling, SpellError> {
    let _span = debug_span!("spell", raw).entered();

    let num = sanitize(raw)?;
    let table = ReadingTable::global();
    let tree = place_tree(&num);
    let rendering = render(&tree, table);
    let reading = apply_shifts(&rendering.reading, table.shifts());
    debug!(kanji = %rendering.kanji, %reading, "spelled");

    Ok(Spelling {
        kanji: rendering.kanji,
        reading,
    })
}

/// Like [`spell`], but silently yields `None` on any error — the behavior
/// embedding callers want when a bad token should simply produce no reply.
pub fn spell_opt(raw: &str) -> Option<Spelling> {
    spell(raw).ok()
}
