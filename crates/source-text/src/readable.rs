//! The common read-only contract over source text.

use crate::error::PositionedError;
use crate::position::{Position, locate};
use crate::provenance::Provenance;
use std::fmt::Debug;

/// Read-only access to a block of source text and its identity.
///
/// Implemented by [`FileSource`] and [`VirtualSource`]. Consumers that do
/// not care where content came from take `&dyn Readable` (or a generic
/// bound) and get position resolution and error construction through the
/// provided methods; only the accessors differ per variant.
///
/// Everything here is a pure read: no method mutates the source, and none
/// of them fail. Out-of-range offsets clamp, and error construction is a
/// value constructor, not a fallible operation.
///
/// # Thread Safety
///
/// Sources are immutable after construction, so one instance can be
/// shared across threads without synchronization. The lazy content hash
/// fills through a race-safe single-computation cell.
///
/// [`FileSource`]: crate::FileSource
/// [`VirtualSource`]: crate::VirtualSource
pub trait Readable: Debug + Send + Sync {
    /// The stored content, verbatim.
    fn contents(&self) -> &str;

    /// The display identity: a real path for file-backed sources, a
    /// caller-supplied or synthetic name for virtual ones.
    fn pathname(&self) -> &str;

    /// Hex-encoded SHA-1 fingerprint of the content, 40 characters.
    ///
    /// Computed on first access and memoized. A pure function of the
    /// content: two sources with equal content hash equal, whatever their
    /// pathnames or provenance.
    fn content_hash(&self) -> &str;

    /// Whether this source is backed by a physical file on disk.
    fn is_file(&self) -> bool;

    /// Where in the program this source was constructed.
    fn provenance(&self) -> &Provenance;

    /// Resolve a byte offset in this source's content to a position.
    ///
    /// Delegates to [`locate`]; out-of-range offsets clamp to the end of
    /// the content.
    fn position(&self, offset: usize) -> Position {
        locate(self.contents(), offset)
    }

    /// Build a positioned error from coordinates the caller has already
    /// resolved.
    ///
    /// The pair is trusted verbatim; the content is not consulted. Use
    /// [`Readable::error_at_offset`] when holding an offset instead of a
    /// resolved line/column pair.
    fn error_at(&self, message: &str, line: usize, column: usize) -> PositionedError {
        PositionedError {
            message: message.to_string(),
            line,
            column,
        }
    }

    /// Build a positioned error from a byte offset into this source's
    /// content.
    ///
    /// The offset is resolved through [`Readable::position`] first, so
    /// the error carries the line/column the offset falls on.
    fn error_at_offset(&self, message: &str, offset: usize) -> PositionedError {
        let position = self.position(offset);
        PositionedError {
            message: message.to_string(),
            line: position.line,
            column: position.column,
        }
    }
}
