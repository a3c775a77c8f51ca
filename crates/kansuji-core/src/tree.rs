//! Place-value decomposition of non-negative integers.
//!
//! `place_tree` splits a number into a sparse map from place magnitude to
//! value, one entry per named place (10^0..10^68). A quotient above 9 at a
//! place spans further grouping levels and is stored as a nested subtree:
//! 123456 → {4: {1: 1, 0: 2}, 3: 3, 2: 4, 1: 5, 0: 6}.

use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::tables;

/// Value stored at one place: a single digit, or a nested decomposition
/// when the quotient at that place exceeded 9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceValue {
    Leaf(u8),
    Branch(PlaceValueTree),
}

/// Sparse place-value decomposition. Keys are place magnitudes (powers of
/// ten from `tables::PLACES`); zero-valued places are omitted entirely, so
/// the number 0 decomposes to an empty tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceValueTree {
    entries: BTreeMap<u32, PlaceValue>,
}

impl PlaceValueTree {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from the largest place down to the smallest.
    pub fn iter_descending(&self) -> impl Iterator<Item = (u32, &PlaceValue)> {
        self.entries.iter().rev().map(|(&p, v)| (p, v))
    }

    pub fn get(&self, magnitude: u32) -> Option<&PlaceValue> {
        self.entries.get(&magnitude)
    }

    /// Rebuild the original integer by summing `value * 10^place` over all
    /// entries, expanding nested subtrees recursively.
    pub fn reconstruct(&self) -> BigUint {
        let mut total = BigUint::zero();
        for (&place, value) in &self.entries {
            let v = match value {
                PlaceValue::Leaf(d) => BigUint::from(*d),
                PlaceValue::Branch(sub) => sub.reconstruct(),
            };
            total += v * BigUint::from(10u8).pow(place);
        }
        total
    }
}

/// Decompose `num` against the defined place magnitudes, largest first.
///
/// At each magnitude the quotient is taken and the remainder carried down.
/// Quotients of 1..=9 become leaves; larger quotients (possible only at
/// places spaced four magnitudes apart) recurse. Each recursion level drops
/// the value below 10^4 of its parent context, so the depth is bounded by
/// the place list itself.
pub fn place_tree(num: &BigUint) -> PlaceValueTree {
    let mut rest = num.clone();
    let mut entries = BTreeMap::new();
    for &(place, _) in tables::PLACES.iter().rev() {
        let unit = BigUint::from(10u8).pow(place);
        let value = &rest / &unit;
        rest %= &unit;
        if value.is_zero() {
            continue;
        }
        let entry = match value.to_u8() {
            Some(d) if d <= 9 => PlaceValue::Leaf(d),
            _ => PlaceValue::Branch(place_tree(&value)),
        };
        entries.insert(place, entry);
    }
    PlaceValueTree { entries }
}
