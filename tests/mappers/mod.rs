//! Mapper tests
//!
//! Semantic and syntactic mappers driven by their parsers:
//! - Enum, nullable and array patterns
//! - Defaulted optional arguments
//! - Mapping hooks that fail

pub mod tests_mapper_flows;
