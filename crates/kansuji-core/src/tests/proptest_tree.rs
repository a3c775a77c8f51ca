//! Property-based tests for decomposition and spelling invariants.

use num_bigint::BigUint;
use proptest::prelude::*;

use crate::spell::spell;
use crate::tree::place_tree;
use crate::unicode::is_numeral_glyph;

/// Decimal strings covering the whole supported range (1 to 72 digits).
fn arb_decimal() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,71}"
}

proptest! {
    #[test]
    fn reconstruct_matches_input(s in arb_decimal()) {
        let num: BigUint = s.parse().unwrap();
        prop_assert_eq!(place_tree(&num).reconstruct(), num);
    }

    #[test]
    fn spelling_is_deterministic(s in arb_decimal()) {
        let first = spell(&s).unwrap();
        let second = spell(&s).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn kanji_form_uses_only_numeral_glyphs(s in arb_decimal()) {
        let spelling = spell(&s).unwrap();
        prop_assert!(is_numeral_glyph(&spelling.kanji));
    }

    #[test]
    fn reading_survives_contraction_nonempty(s in arb_decimal()) {
        let spelling = spell(&s).unwrap();
        prop_assert!(!spelling.reading.is_empty());
    }
}
