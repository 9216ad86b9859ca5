//! Structural conformance against a modular JSON Schema.
//!
//! The root schema and its sections live on disk. Cross-file `$ref`s are served only from
//! the sections directory; see [`retrieve::LocalSchemaRetriever`].

pub(crate) mod retrieve;
pub(crate) mod structural;
