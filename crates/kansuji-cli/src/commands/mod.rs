pub mod spell_ops;
