//! Kanji and reading assembly from a place-value tree.

use crate::reading::ReadingTable;
use crate::tables;
use crate::tree::{PlaceValue, PlaceValueTree};

/// Kanji rendering plus the uncorrected (pre-contraction) kana reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub kanji: String,
    pub reading: String,
}

/// Render a tree into kanji and raw reading, largest place first.
///
/// Digit 1 is dropped before the two-kanji small places (十 not 一十, and
/// likewise 百 and 千) but kept from 万 upward (一万, 一億). The reading
/// follows the same omission, so 10 reads じゅう, not いちじゅう. An empty
/// tree is the number 0 and renders as the standalone zero glyph.
pub fn render(tree: &PlaceValueTree, table: &ReadingTable) -> Rendering {
    if tree.is_empty() {
        let glyph = tables::digit_glyph(0);
        return Rendering {
            kanji: glyph.to_string(),
            reading: table.reading(glyph).to_string(),
        };
    }

    let mut rendering = Rendering {
        kanji: String::new(),
        reading: String::new(),
    };
    render_into(tree, table, &mut rendering);
    rendering
}

fn render_into(tree: &PlaceValueTree, table: &ReadingTable, out: &mut Rendering) {
    for (place, value) in tree.iter_descending() {
        match value {
            PlaceValue::Leaf(d) => {
                if !(*d == 1 && (1..=3).contains(&place)) {
                    let glyph = tables::digit_glyph(*d);
                    out.kanji.push_str(glyph);
                    out.reading.push_str(table.reading(glyph));
                }
            }
            PlaceValue::Branch(sub) => render_into(sub, table, out),
        }
        if let Some(glyph) = tables::place_glyph(place) {
            out.kanji.push_str(glyph);
            out.reading.push_str(table.reading(glyph));
        }
    }
}
