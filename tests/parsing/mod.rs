//! Parser tests
//!
//! End-to-end runs of the parsers against mapped records:
//! - Combined parsing of the `Example` attribute
//! - Split semantic and syntactic records for `params` arguments

pub mod tests_combined;
pub mod tests_split;
