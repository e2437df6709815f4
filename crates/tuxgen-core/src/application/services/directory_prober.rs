//! First-existing-directory lookup.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::{application::ports::Filesystem, domain::paths::DEFAULT_BASE_PATH};

/// Finds the first candidate that is an existing directory under `root`.
pub struct DirectoryProber<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
}

impl<'a> DirectoryProber<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, root: &'a Path) -> Self {
        Self { filesystem, root }
    }

    /// Return the first candidate that exists and is a directory, or `.`.
    ///
    /// Candidates are checked in order and the search stops at the first
    /// hit. The returned path is the candidate as given (relative to root),
    /// not the joined absolute path.
    pub fn probe<I, P>(&self, candidates: I) -> PathBuf
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for candidate in candidates {
            let candidate = candidate.as_ref();
            let full = self.root.join(candidate);
            if self.filesystem.exists(&full) && self.filesystem.is_dir(&full) {
                debug!(base_path = %candidate.display(), "Base path detected");
                return candidate.to_path_buf();
            }
            trace!(candidate = %candidate.display(), "Not a directory");
        }

        debug!("No candidate directory found, using current directory");
        PathBuf::from(DEFAULT_BASE_PATH)
    }
}
