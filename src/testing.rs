//! Reusable assertions for language tables, for this crate's tests and for
//! anyone adding a lexicon row.
pub mod lexicon_contract;
