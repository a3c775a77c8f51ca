//! Character-level Unicode classification for numeral glyphs and readings.

/// Check the full Hiragana block (U+3040..U+309F). The block contains a few
/// unassigned codepoints but none of them occur in numeral readings, so the
/// block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// Check if a string is a valid kana reading: non-empty, all hiragana.
pub fn is_kana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana)
}

/// Check if a string is a valid numeral glyph: non-empty, all kanji or
/// katakana (katakana for the standalone ゼロ).
pub fn is_numeral_glyph(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_kanji(c) || is_katakana(c))
}

/// Fold a full-width digit (０-９, U+FF10..U+FF19) to its ASCII form.
/// Other characters pass through unchanged.
pub fn fold_fullwidth_digit(c: char) -> char {
    if ('０'..='９').contains(&c) {
        char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c)
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ゼ'));
        assert!(!is_katakana('ぜ'));
        assert!(is_kanji('兆'));
        assert!(is_kanji('澗'));
        assert!(!is_kanji('ロ'));
    }

    #[test]
    fn test_is_kana_reading() {
        assert!(is_kana_reading("じゅっちょう"));
        assert!(is_kana_reading("ぜろ"));
        assert!(!is_kana_reading("ゼロ"));
        assert!(!is_kana_reading("jyuu"));
        assert!(!is_kana_reading(""));
    }

    #[test]
    fn test_is_numeral_glyph() {
        assert!(is_numeral_glyph("無量大数"));
        assert!(is_numeral_glyph("ゼロ"));
        assert!(is_numeral_glyph("十"));
        assert!(!is_numeral_glyph("じゅう"));
        assert!(!is_numeral_glyph("10"));
        assert!(!is_numeral_glyph(""));
    }

    #[test]
    fn test_fold_fullwidth_digit() {
        assert_eq!(fold_fullwidth_digit('０'), '0');
        assert_eq!(fold_fullwidth_digit('９'), '9');
        assert_eq!(fold_fullwidth_digit('5'), '5');
        assert_eq!(fold_fullwidth_digit('あ'), 'あ');
    }
}
