//! Construction-site records for source diagnostics.

use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fmt;
use std::panic::Location;

/// Declaring type recorded when the constructing type is not named.
const ANONYMOUS_TYPE: &str = "<anonymous>";

/// Identifies the code location that constructed a [`Readable`].
///
/// This is diagnostic metadata only: it records where in the *program* a
/// source object was created, not where its content came from, and it
/// never participates in hashing, equality, or position resolution.
/// Tooling uses it to report "this source was created here".
///
/// Rust has no runtime caller reflection, so capture is split in two: the
/// file and line of the immediate caller come from the standard library's
/// caller tracking, while the constructing type is either supplied
/// explicitly through [`Provenance::of`] or left as the `"<anonymous>"`
/// marker.
///
/// [`Readable`]: crate::Readable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Type (or module path) that performed the construction.
    pub declaring_type: String,
    /// Source file of the constructing call.
    pub pathname: String,
    /// Line of the constructing call (1-based).
    pub line: u32,
}

impl Provenance {
    /// Record an explicitly supplied construction site.
    pub fn new(declaring_type: impl Into<String>, pathname: impl Into<String>, line: u32) -> Self {
        Provenance {
            declaring_type: declaring_type.into(),
            pathname: pathname.into(),
            line,
        }
    }

    /// Capture the file and line of the immediate caller.
    ///
    /// The declaring type is recorded as the `"<anonymous>"` marker; use
    /// [`Provenance::of`] when the constructing type should be named.
    #[track_caller]
    pub fn capture() -> Self {
        let caller = Location::caller();
        Provenance {
            declaring_type: ANONYMOUS_TYPE.to_string(),
            pathname: caller.file().to_string(),
            line: caller.line(),
        }
    }

    /// Capture the file and line of the immediate caller, declaring `T`
    /// as the constructing type.
    ///
    /// # Example
    ///
    /// ```
    /// use source_text::Provenance;
    ///
    /// struct SchemaLoader;
    ///
    /// let provenance = Provenance::of::<SchemaLoader>();
    /// assert!(provenance.declaring_type.ends_with("SchemaLoader"));
    /// ```
    #[track_caller]
    pub fn of<T: ?Sized>() -> Self {
        let caller = Location::caller();
        Provenance {
            declaring_type: type_name::<T>().to_string(),
            pathname: caller.file().to_string(),
            line: caller.line(),
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.declaring_type, self.pathname, self.line)
    }
}
