pub mod catalog;
pub mod manifest;
pub mod payload;
pub mod runner;
pub mod scripts;

pub use catalog::{build_catalog, CatalogManifest, PluginInfo, TaskDescriptor};
pub use manifest::{find_manifest, MANIFEST_NAME};
pub use payload::{parse_payload, resolve_workdir, PayloadError, RunPayload, CWD_ENV_VAR};
pub use runner::{pick_runner, PackageManager, PathProbe, RunnerChoice, ToolNotFound, ToolProbe};
pub use scripts::{load_scripts, ScriptError, ScriptTable};
