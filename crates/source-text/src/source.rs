//! File-backed and in-memory source variants.

use crate::error::SourceError;
use crate::provenance::Provenance;
use crate::readable::Readable;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Display name for virtual sources constructed without one.
pub const ANONYMOUS_PATHNAME: &str = "<anonymous>";

/// Shared immutable state behind both source variants.
///
/// Content lives in an `Arc<str>` so clones share one buffer. The hash
/// cell is skipped during serialization and refilled lazily on the other
/// side, which preserves the round-trip contract because the digest is a
/// pure function of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SourceText {
    contents: Arc<str>,
    pathname: String,
    #[serde(skip)]
    hash: OnceCell<String>,
    provenance: Provenance,
}

impl SourceText {
    fn new(contents: Arc<str>, pathname: String, provenance: Provenance) -> Self {
        SourceText {
            contents,
            pathname,
            hash: OnceCell::new(),
            provenance,
        }
    }

    fn hash(&self) -> &str {
        self.hash.get_or_init(|| sha1_hex(self.contents.as_bytes()))
    }
}

/// Hex-encoded SHA-1 digest of `bytes`, 40 lowercase characters.
fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// A source backed by a physical file on disk.
///
/// Construction takes content that has already been obtained; nothing
/// here touches the filesystem except [`FileSource::read`], which is the
/// loader boundary for callers that want this crate to do the reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSource {
    text: SourceText,
}

impl FileSource {
    /// Create a file-backed source from a pathname and its content.
    #[track_caller]
    pub fn new(pathname: impl Into<String>, contents: impl Into<Arc<str>>) -> Self {
        Self::with_provenance(pathname, contents, Provenance::capture())
    }

    /// Create a file-backed source with an explicit construction record.
    pub fn with_provenance(
        pathname: impl Into<String>,
        contents: impl Into<Arc<str>>,
        provenance: Provenance,
    ) -> Self {
        FileSource {
            text: SourceText::new(contents.into(), pathname.into(), provenance),
        }
    }

    /// Load a file-backed source from disk.
    ///
    /// This is the only operation in the crate that performs IO. A
    /// missing path maps to [`SourceError::NotFound`]; every other
    /// failure (permissions, non-text bytes) to
    /// [`SourceError::NotReadable`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    #[track_caller]
    pub fn read(path: impl AsRef<Path>) -> Result<FileSource, SourceError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::NotReadable {
                path: path.to_path_buf(),
                source: error,
            },
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded source file");

        Ok(Self::with_provenance(
            path.display().to_string(),
            contents,
            Provenance::capture(),
        ))
    }
}

impl Readable for FileSource {
    fn contents(&self) -> &str {
        &self.text.contents
    }

    fn pathname(&self) -> &str {
        &self.text.pathname
    }

    fn content_hash(&self) -> &str {
        self.text.hash()
    }

    fn is_file(&self) -> bool {
        true
    }

    fn provenance(&self) -> &Provenance {
        &self.text.provenance
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contents())
    }
}

/// An in-memory source that never corresponds to a file on disk.
///
/// Useful for generated code, editor buffers, and tests. A display name
/// is optional; unnamed sources report the [`ANONYMOUS_PATHNAME`] marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VirtualSource {
    text: SourceText,
}

impl VirtualSource {
    /// Create an anonymous in-memory source.
    #[track_caller]
    pub fn new(contents: impl Into<Arc<str>>) -> Self {
        Self::with_provenance(ANONYMOUS_PATHNAME, contents, Provenance::capture())
    }

    /// Create an in-memory source with a display name.
    ///
    /// The name affects [`Readable::pathname`] only; the source still
    /// reports `is_file() == false`.
    #[track_caller]
    pub fn named(name: impl Into<String>, contents: impl Into<Arc<str>>) -> Self {
        Self::with_provenance(name, contents, Provenance::capture())
    }

    /// Create an in-memory source with an explicit construction record.
    pub fn with_provenance(
        name: impl Into<String>,
        contents: impl Into<Arc<str>>,
        provenance: Provenance,
    ) -> Self {
        VirtualSource {
            text: SourceText::new(contents.into(), name.into(), provenance),
        }
    }
}

impl Readable for VirtualSource {
    fn contents(&self) -> &str {
        &self.text.contents
    }

    fn pathname(&self) -> &str {
        &self.text.pathname
    }

    fn content_hash(&self) -> &str {
        self.text.hash()
    }

    fn is_file(&self) -> bool {
        false
    }

    fn provenance(&self) -> &Provenance {
        &self.text.provenance
    }
}

impl fmt::Display for VirtualSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contents())
    }
}
