//! Reading collections out of a Slack export directory

use super::error::{ConvertError, ConvertResult};
use super::records::SlackRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An export directory on disk
#[derive(Debug, Clone)]
pub struct SlackExport {
    root: PathBuf,
}

impl SlackExport {
    /// Open an export rooted at `dir`, which must be an existing directory.
    pub fn open(dir: impl AsRef<Path>) -> ConvertResult<Self> {
        let root = dir.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ConvertError::SourceNotFound(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a collection's source file, if the kind has one.
    fn source_path<R: SlackRecord>(&self) -> Option<PathBuf> {
        R::KIND.source_file().map(|file| self.root.join(file))
    }

    /// Load every record of `R`'s collection.
    ///
    /// A converted kind whose file is absent is `SourceNotFound`. Kinds that
    /// are not converted yield `Ok(None)` instead.
    pub fn load<R: SlackRecord>(&self) -> ConvertResult<Option<Vec<R>>> {
        let Some(path) = self.source_path::<R>() else {
            debug!(kind = %R::KIND, "collection has no single source file");
            return Ok(None);
        };

        if !path.exists() {
            if R::KIND.is_converted() {
                return Err(ConvertError::SourceNotFound(path));
            }
            debug!(kind = %R::KIND, path = %path.display(), "source file missing, skipping collection");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConvertError::Read {
            path: path.clone(),
            source,
        })?;
        let records: Vec<R> = serde_json::from_str(&content)
            .map_err(|source| ConvertError::Malformed { path: path.clone(), source })?;

        debug!(kind = %R::KIND, count = records.len(), "loaded records");
        Ok(Some(records))
    }
}
