//! Writing `.tif.json` documents

use crate::intermediate::IntermediateFile;
use crate::slack::{ConvertError, ConvertResult};
use std::path::{Path, PathBuf};
use tracing::info;

pub const OUTPUT_EXTENSION: &str = ".tif.json";

/// `<base>.tif.json`, with `base` kept verbatim
pub fn output_path(base: impl AsRef<Path>) -> PathBuf {
    let mut path = base.as_ref().as_os_str().to_owned();
    path.push(OUTPUT_EXTENSION);
    PathBuf::from(path)
}

/// Pretty-print `file` to `<base>.tif.json`, returning the written path.
pub fn write_intermediate_file(base: impl AsRef<Path>, file: &IntermediateFile) -> ConvertResult<PathBuf> {
    let path = output_path(base);
    let json = serde_json::to_string_pretty(file)?;
    std::fs::write(&path, json).map_err(|source| ConvertError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "Tana Intermediate Nodes written");
    Ok(path)
}
