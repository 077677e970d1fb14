//! SlackConverter: turns an export directory into an IntermediateFile

use super::error::ConvertResult;
use super::export::SlackExport;
use super::mapper::{map_user_collection, NameTruncation};
use super::records::{CollectionKind, SlackUser};
use crate::config::ConverterConfig;
use crate::intermediate::{
    Attribute, IntermediateFile, IntermediateNode, NodeFactory, Summary, Supertag,
};
use std::path::Path;
use tracing::{debug, info};

/// Runs a single conversion pass: load, map, assemble.
#[derive(Debug, Clone, Default)]
pub struct SlackConverter {
    config: ConverterConfig,
}

impl SlackConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Convert the export at `dir` using a factory built from the config.
    pub fn convert(&self, dir: impl AsRef<Path>) -> ConvertResult<IntermediateFile> {
        let mut factory = self.config.node_factory();
        self.convert_with(dir, &mut factory)
    }

    /// Convert the export at `dir`, drawing uids and timestamps from `factory`.
    ///
    /// Fails when the export directory or a converted collection's source
    /// file is missing. Otherwise yields a complete document.
    pub fn convert_with(
        &self,
        dir: impl AsRef<Path>,
        factory: &mut NodeFactory,
    ) -> ConvertResult<IntermediateFile> {
        let export = SlackExport::open(dir)?;
        info!(source = %export.root().display(), "converting Slack export");

        let truncation = self.config.truncation();
        let mut summary = Summary::default();
        let mut nodes = Vec::new();

        for kind in CollectionKind::ALL {
            if !kind.is_converted() {
                debug!(%kind, "collection conversion not implemented, skipping");
                continue;
            }
            let container =
                convert_collection(kind, &export, factory, truncation, &mut summary)?;
            nodes.extend(container);
        }

        let attributes = attribute_catalog(&nodes);
        Ok(IntermediateFile::new(summary, nodes, supertag_catalog(), attributes))
    }
}

fn convert_collection(
    kind: CollectionKind,
    export: &SlackExport,
    factory: &mut NodeFactory,
    truncation: NameTruncation,
    summary: &mut Summary,
) -> ConvertResult<Option<IntermediateNode>> {
    let mapped = match kind {
        CollectionKind::Users => export
            .load::<SlackUser>()?
            .map(|users| map_user_collection(&users, factory, truncation)),
        CollectionKind::Messages | CollectionKind::Channels => None,
    };

    Ok(mapped.map(|mapped| {
        info!(%kind, records = mapped.node.children.len(), "mapped collection");
        *summary += mapped.summary;
        mapped.node
    }))
}

/// Convert the export at `dir` with the default configuration.
pub fn convert(dir: impl AsRef<Path>) -> ConvertResult<IntermediateFile> {
    SlackConverter::default().convert(dir)
}

/// The fixed supertag catalog: one entry per collection kind.
pub fn supertag_catalog() -> Vec<Supertag> {
    CollectionKind::ALL.iter().map(|kind| kind.supertag()).collect()
}

/// The declared attribute catalog, each entry counting the field nodes with
/// that name under `nodes`.
pub fn attribute_catalog(nodes: &[IntermediateNode]) -> Vec<Attribute> {
    CollectionKind::ALL
        .iter()
        .flat_map(|kind| kind.field_names().iter().copied())
        .map(|name| {
            let count = nodes
                .iter()
                .flat_map(|n| n.descendants())
                .filter(|n| n.is_field() && n.name == name)
                .count();
            Attribute::new(name, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;
    use crate::intermediate::NodeUid;
    use crate::slack::ConvertError;

    const USERS: &str = r#"[
        {"id":"U1","name":"alice","real_name":"Alice Example","tz":"America/Los_Angeles","tz_label":"Pacific","tz_offset":-28800,"deleted":false,"image_original":"x"},
        {"id":"U2","name":"bob","real_name":"Bob Builder","tz":"Europe/London","tz_label":"GMT","tz_offset":0,"deleted":true,"image_original":"y"}
    ]"#;

    fn export(users: Option<&str>) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = users {
            std::fs::write(dir.path().join("users.json"), content).unwrap();
        }
        dir
    }

    #[test]
    fn converts_users_under_single_container() {
        let dir = export(Some(USERS));
        let file = convert(dir.path()).unwrap();

        assert_eq!(file.nodes.len(), 1);
        let users = &file.nodes[0];
        assert_eq!(users.uid.as_str(), "usersUid");
        assert_eq!(users.children.len(), 2);
        assert_eq!(users.children[1].uid.as_str(), "U2");
        assert_eq!(users.children[1].field("deleted"), Some("true"));

        assert_eq!(file.summary.top_level_nodes, 1);
        assert_eq!(file.summary.leaf_nodes, 2);
        assert_eq!(file.summary.total_nodes, 2);
        assert_eq!(file.summary.fields, 10);
    }

    #[test]
    fn absent_users_file_is_source_not_found() {
        let dir = export(None);
        let err = convert(dir.path()).unwrap_err();

        assert!(matches!(&err, ConvertError::SourceNotFound(p) if p.ends_with("users.json")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_users_file_yields_container_and_catalogs() {
        let dir = export(Some("[]"));
        let file = convert(dir.path()).unwrap();

        assert_eq!(file.nodes.len(), 1);
        assert!(file.nodes[0].children.is_empty());
        assert_eq!(file.summary, Summary::top_level());
        assert_eq!(file.supertags.len(), 3);
        assert_eq!(file.attributes.len(), 5);
        assert!(file.attributes.iter().all(|a| a.count == 0));
    }

    #[test]
    fn missing_directory_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert(dir.path().join("gone")).unwrap_err();
        assert!(matches!(err, ConvertError::SourceNotFound(_)));
    }

    #[test]
    fn malformed_users_file_is_reported() {
        let dir = export(Some("not json"));
        let err = convert(dir.path()).unwrap_err();
        assert!(matches!(err, ConvertError::Malformed { .. }));
    }

    #[test]
    fn supertag_catalog_is_static() {
        let tags = supertag_catalog();
        let uids: Vec<&str> = tags.iter().map(|t| t.uid.as_str()).collect();
        assert_eq!(uids, vec!["slack-user-uid", "slack-message-uid", "slack-channel-uid"]);
        assert_eq!(tags[0].name, "slack-user");
    }

    #[test]
    fn attribute_counts_follow_field_occurrences() {
        let dir = export(Some(USERS));
        let file = convert(dir.path()).unwrap();

        let names: Vec<&str> = file.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["UserName", "tz", "tz_label", "tz_offset", "deleted"]);
        assert!(file.attributes.iter().all(|a| a.count == 2));
        assert!(file.attributes.iter().all(|a| a.values.is_empty()));
    }

    #[test]
    fn configured_truncation_and_ids_apply() {
        let dir = export(Some(USERS));
        let converter = SlackConverter::new(ConverterConfig {
            truncate_names: Some(3),
            id_strategy: IdStrategy::Sequential,
        });
        let file = converter.convert(dir.path()).unwrap();

        let alice = &file.nodes[0].children[0];
        assert_eq!(alice.name, "Ali");
        assert_eq!(alice.field("UserName"), Some("ali"));
        assert_eq!(alice.supertags, Some(vec![NodeUid::from("slack-user-uid")]));
        assert_eq!(alice.children[0].uid.as_str(), "node-1");
    }
}
