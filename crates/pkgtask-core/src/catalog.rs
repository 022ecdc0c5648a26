//! Task catalog for the orchestrator's `describe` query.
//!
//! The catalog is the declarative wire format the host consumes: a fixed
//! schema version, the plugin identity block, and one descriptor per
//! script. Descriptor order is the script-table order (ascending by name,
//! case-sensitive), so repeated describes of an unchanged manifest
//! serialize byte-identically.

use crate::manifest::find_manifest;
use crate::scripts::{load_scripts, ScriptError};
use serde::Serialize;
use std::path::Path;

pub const SCHEMA_VERSION: u32 = 1;
pub const PLUGIN_ID: &str = "package";
pub const PLUGIN_TITLE: &str = "Package Scripts";
pub const PLUGIN_VERSION: &str = "0.1.0";

/// Constant group label for every descriptor this plugin publishes.
const TASK_GROUP: &str = "Node";

/// One runnable task as published to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDescriptor {
    pub name: String,
    pub title: String,
    pub group: String,
    pub description: String,
    /// Host schema allows prompted inputs; this plugin never declares any,
    /// but the field must still serialize as `[]`.
    pub inputs: Vec<serde_json::Value>,
}

impl TaskDescriptor {
    /// Project one script-table entry into its catalog form.
    pub fn from_script(name: &str, command: &str) -> Self {
        Self {
            name: name.to_string(),
            title: format!("Run {name}"),
            group: TASK_GROUP.to_string(),
            description: command.to_string(),
            inputs: Vec::new(),
        }
    }
}

/// Plugin identity block of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginInfo {
    pub id: String,
    pub title: String,
    pub version: String,
}

/// Full `describe` payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManifest {
    pub schema_version: u32,
    pub plugin: PluginInfo,
    pub tasks: Vec<TaskDescriptor>,
}

/// Build the catalog for the project containing `start_dir`.
///
/// No manifest anywhere in the ancestry is not an error: the catalog is
/// simply empty. An unreadable or undecodable manifest propagates.
pub fn build_catalog(start_dir: &Path) -> Result<CatalogManifest, ScriptError> {
    let tasks = match find_manifest(start_dir) {
        Some(manifest_path) => load_scripts(&manifest_path)?
            .iter()
            .map(|(name, command)| TaskDescriptor::from_script(name, command))
            .collect(),
        None => Vec::new(),
    };

    Ok(CatalogManifest {
        schema_version: SCHEMA_VERSION,
        plugin: PluginInfo {
            id: PLUGIN_ID.to_string(),
            title: PLUGIN_TITLE.to_string(),
            version: PLUGIN_VERSION.to_string(),
        },
        tasks,
    })
}
