//! Euphonic contraction of concatenated numeral readings.

use tracing::{debug, debug_span};

use crate::reading::ShiftRule;

/// Apply the contraction rules to a concatenated reading, in table order,
/// each as a literal replace-all.
///
/// A single pass suffices: parse-time validation guarantees no rule's
/// replacement contains its own pattern, and the rule order in the table is
/// chosen so that earlier substitutions produce exactly the adjacencies the
/// later rules expect. Pass-through when nothing matches.
pub fn apply_shifts(reading: &str, shifts: &[ShiftRule]) -> String {
    let _span = debug_span!("euphony", chars = reading.chars().count()).entered();

    let mut out = reading.to_string();
    for rule in shifts {
        if out.contains(rule.pattern.as_str()) {
            out = out.replace(rule.pattern.as_str(), &rule.replacement);
            debug!(pattern = %rule.pattern, replacement = %rule.replacement, "contracted");
        }
    }
    out
}
