//! Static glyph tables for Japanese numerals.
//!
//! Digits 1-9 map to the usual kanji numerals; 0 maps to ゼロ, which only
//! appears standalone and never combines with a place name. Place names
//! follow the 万 grouping convention: dedicated glyphs at 10^1..10^3, then
//! one every four decimal digits up to 10^68 (無量大数).

/// Kanji glyphs for digits 0-9. Index 0 (ゼロ) is standalone-only.
pub const DIGITS: [&str; 10] = ["ゼロ", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// (magnitude, glyph) pairs, ascending. The ones place has no glyph.
pub const PLACES: [(u32, Option<&str>); 21] = [
    (0, None),
    (1, Some("十")),
    (2, Some("百")),
    (3, Some("千")),
    (4, Some("万")),
    (8, Some("億")),
    (12, Some("兆")),
    (16, Some("京")),
    (20, Some("垓")),
    (24, Some("秭")),
    (28, Some("穣")),
    (32, Some("溝")),
    (36, Some("澗")),
    (40, Some("正")),
    (44, Some("載")),
    (48, Some("極")),
    (52, Some("恒河沙")),
    (56, Some("阿僧祇")),
    (60, Some("那由他")),
    (64, Some("不可思議")),
    (68, Some("無量大数")),
];

/// The largest spellable value is 9999 × 10^68, i.e. 72 decimal digits.
pub const MAX_DIGITS: usize = 72;

/// Glyph for a single digit 0-9.
pub fn digit_glyph(d: u8) -> &'static str {
    DIGITS[d as usize]
}

/// Glyph for a place magnitude. `None` for the ones place and for
/// magnitudes without a dedicated name.
pub fn place_glyph(magnitude: u32) -> Option<&'static str> {
    PLACES
        .iter()
        .find(|(m, _)| *m == magnitude)
        .map(|(_, g)| *g)
        .unwrap_or(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_strictly_increasing() {
        for pair in PLACES.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_places_group_every_four_above_man() {
        for pair in PLACES.windows(2) {
            let gap = pair[1].0 - pair[0].0;
            if pair[0].0 >= 4 {
                assert_eq!(gap, 4, "gap after 10^{}", pair[0].0);
            } else {
                assert_eq!(gap, 1, "gap after 10^{}", pair[0].0);
            }
        }
    }

    #[test]
    fn test_place_glyphs_unique() {
        let glyphs: Vec<&str> = PLACES.iter().filter_map(|(_, g)| *g).collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(place_glyph(0), None);
        assert_eq!(place_glyph(1), Some("十"));
        assert_eq!(place_glyph(4), Some("万"));
        assert_eq!(place_glyph(68), Some("無量大数"));
        assert_eq!(place_glyph(5), None);
        assert_eq!(digit_glyph(0), "ゼロ");
        assert_eq!(digit_glyph(7), "七");
    }
}
