//! Immutable source text for lexer/parser front ends.
//!
//! This crate represents a chunk of source code, read from disk or built
//! in memory, and answers the questions diagnostics ask of it: what is
//! the raw content, what is its stable fingerprint, and which (line,
//! column) does a byte offset correspond to in the original text.
//!
//! # Overview
//!
//! The core types are:
//! - [`Readable`]: the read-only contract every source implements
//! - [`FileSource`] / [`VirtualSource`]: file-backed and in-memory variants
//! - [`Position`] and [`locate`]: offset to line/column resolution
//! - [`PositionedError`]: a diagnostic value carrying message and location
//! - [`Provenance`]: where in the program a source was constructed
//!
//! # Example
//!
//! ```rust
//! use source_text::{Readable, VirtualSource};
//!
//! let source = VirtualSource::named("schema.gql", "type Query {\n  user: ID\n}\n");
//!
//! // Offsets resolve to 1-based, human-facing coordinates.
//! let position = source.position(15);
//! assert_eq!((position.line, position.column), (2, 3));
//!
//! // Diagnostics carry the resolved location.
//! let error = source.error_at_offset("unexpected token", 15);
//! assert_eq!((error.line, error.column), (2, 3));
//! ```

pub mod error;
pub mod position;
pub mod provenance;
pub mod readable;
pub mod source;

// Re-export main types for convenience
pub use error::{PositionedError, SourceError};
pub use position::{Position, line_count, locate};
pub use provenance::Provenance;
pub use readable::Readable;
pub use source::{ANONYMOUS_PATHNAME, FileSource, VirtualSource};
