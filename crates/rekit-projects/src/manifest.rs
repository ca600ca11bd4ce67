//! `package.json` script patching
//!
//! The manifest is parsed into an order-preserving JSON object, its
//! `scripts` key is replaced wholesale, and the result is written back.

use camino::Utf8Path;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

/// Rewrites the `scripts` mapping of a manifest file
#[derive(Debug, Clone)]
pub struct ManifestPatcher {
    scripts: Vec<(String, String)>,
}

impl ManifestPatcher {
    /// Patch with the given script entries, kept in the given order
    pub fn new(scripts: Vec<(String, String)>) -> Self {
        Self { scripts }
    }

    /// Replace `scripts` in the manifest at `path`
    pub fn patch(&self, path: &Utf8Path) -> Result<()> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::manifest_patch(path.as_str(), format!("read failed: {}", e)))?;

        let mut manifest: Value = serde_json::from_str(&raw)
            .map_err(|e| Error::manifest_patch(path.as_str(), format!("invalid JSON: {}", e)))?;

        self.apply_scripts(&mut manifest)
            .map_err(|message| Error::manifest_patch(path.as_str(), message))?;

        let mut output = serde_json::to_string_pretty(&manifest)
            .map_err(|e| Error::manifest_patch(path.as_str(), e.to_string()))?;
        output.push('\n');

        std::fs::write(path, output)
            .map_err(|e| Error::manifest_patch(path.as_str(), format!("write failed: {}", e)))?;

        debug!("Patched scripts in {}", path);
        Ok(())
    }

    /// Overwrite the `scripts` key of a manifest object, leaving every other
    /// key and its position untouched.
    ///
    /// Fails if the manifest root is not a JSON object.
    pub fn apply_scripts(&self, manifest: &mut Value) -> std::result::Result<(), String> {
        let Value::Object(object) = manifest else {
            return Err(format!("expected a JSON object, found {}", kind(manifest)));
        };

        let scripts: Map<String, Value> = self
            .scripts
            .iter()
            .map(|(name, command)| (name.clone(), Value::String(command.clone())))
            .collect();

        // insert() on an existing key keeps its position with preserve_order
        object.insert("scripts".to_string(), Value::Object(scripts));
        Ok(())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
