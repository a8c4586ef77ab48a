//! Remap is a declarative object-to-object mapper.
//! A template is a flat, ordered rule set of dotted path patterns: each rule
//! selects entries of a flattened source object, possibly through `*`
//! wildcards, and its target pattern describes where the matched values land
//! in the result.

/// Reading and writing values at a path chain
pub mod accessor;

/// Command-line interface module for the remap application
pub mod cli;

/// Common constants shared across modules
pub mod constants;

/// Error types and handling for the remap application
pub mod error;

/// Source flattening
/// Turns a nested value into an ordered list of addressable entries
pub mod flatten;

/// Template and value file loading for the command-line interface
/// Supports JSON and YAML formats
pub mod loader;

/// Rule pattern matching over flattened entries
pub mod matcher;

/// Path chain parsing and wildcard resolution
pub mod path;

/// Core template processing orchestration
/// Combines flattening, matching, resolution and writes
pub mod template;
