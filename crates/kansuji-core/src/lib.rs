pub mod euphony;
pub mod namer;
pub mod reading;
pub mod sanitize;
pub mod spell;
pub mod tables;
pub mod tree;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use spell::{spell, spell_opt, SpellError, Spelling};
