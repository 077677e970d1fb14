//! Converter configuration
//!
//! Loaded from an optional YAML file; every key is optional.
//!
//! ```yaml
//! truncate_names: 3
//! id_strategy: sequential
//! ```

use crate::intermediate::{NodeFactory, UuidIdGenerator};
use crate::slack::{ConvertError, ConvertResult, NameTruncation};
use serde::Deserialize;
use std::path::Path;

/// How fresh node uids are issued
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// `node-1`, `node-2`, ... for reproducible documents
    Sequential,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Cut node labels and user names to this many characters
    pub truncate_names: Option<usize>,
    pub id_strategy: IdStrategy,
}

impl ConverterConfig {
    pub fn load(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    pub fn truncation(&self) -> NameTruncation {
        NameTruncation::from(self.truncate_names)
    }

    /// A fresh factory for one conversion run
    pub fn node_factory(&self) -> NodeFactory {
        match self.id_strategy {
            IdStrategy::Uuid => NodeFactory::new(UuidIdGenerator),
            IdStrategy::Sequential => NodeFactory::sequential("node"),
        }
    }
}
