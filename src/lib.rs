//! kaikki-fetch library
//!
//! Downloads the gzip-compressed Wiktionary extract from kaikki.org and
//! writes it, decompressed, to `data/words.jsonl` next to the program.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
