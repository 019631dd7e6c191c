use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::{Result, RunScriptError};

/// The subset of `package.json` the runner reads.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PackageManifest {
    /// Missing or `null` means no scripts are declared. Values are kept as
    /// raw JSON; only the shell launcher needs them to be strings.
    scripts: Option<BTreeMap<String, Value>>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|source| RunScriptError::ManifestUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let manifest =
            serde_json::from_str(&content).map_err(|source| RunScriptError::ManifestMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(manifest)
    }

    /// Value declared for `name`, if the key exists.
    pub fn script(&self, name: &str) -> Option<&Value> {
        self.scripts.as_ref().and_then(|scripts| scripts.get(name))
    }
}
