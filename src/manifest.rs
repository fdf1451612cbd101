//! `package.json` handling and the dependency table

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::document::load_document;
use crate::error::{Error, Result};

pub const MANIFEST_FILE: &str = "package.json";

const DEV_DEPENDENCIES: &str = "devDependencies";

/// A `devDependencies` entry: package name and version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevDependency {
    pub name: &'static str,
    pub version: &'static str,
}

const fn dep(name: &'static str, version: &'static str) -> DevDependency {
    DevDependency { name, version }
}

pub const VITEST: DevDependency = dep("vitest", "^0.29.2");
pub const KODKAFA_ESLINT_CONFIG: DevDependency = dep("@kodkafa/eslint-config", "^1.0.1");
pub const ESLINT_CONFIG_PRETTIER: DevDependency = dep("eslint-config-prettier", "^8.7.0");
pub const ESLINT_PLUGIN_PRETTIER: DevDependency = dep("eslint-plugin-prettier", "^4.2.1");
pub const TYPESCRIPT_ESLINT_PLUGIN: DevDependency =
    dep("@typescript-eslint/eslint-plugin", "^5.54.1");
pub const TYPESCRIPT_ESLINT_PARSER: DevDependency = dep("@typescript-eslint/parser", "^5.54.1");
pub const ESLINT: DevDependency = dep("eslint", "^8.35.0");
pub const ESLINT_PLUGIN_REACT: DevDependency = dep("eslint-plugin-react", "^7.32.2");
pub const PRETTIER: DevDependency = dep("prettier", "^2.8.4");

pub fn manifest_path(project_root: &Path) -> PathBuf {
    project_root.join(MANIFEST_FILE)
}

/// Load `package.json` from the project root. It must be a JSON object.
pub fn load_manifest(project_root: &Path) -> Result<Value> {
    let path = manifest_path(project_root);
    debug!(path = %path.display(), "loading manifest");
    let manifest = load_document(&path)?;
    if !manifest.is_object() {
        return Err(Error::shape(MANIFEST_FILE, "the document", "an object"));
    }
    Ok(manifest)
}

/// Return `manifest` with `deps` inserted into `devDependencies` in order.
///
/// A missing `devDependencies` object is created first, even for an empty
/// `deps`. Packages already present keep their position and get the new version.
pub fn with_dev_dependencies(mut manifest: Value, deps: &[DevDependency]) -> Result<Value> {
    let entries = dev_dependencies_mut(&mut manifest)?;
    for dep in deps {
        entries.insert(dep.name.to_string(), Value::String(dep.version.to_string()));
    }
    Ok(manifest)
}

fn dev_dependencies_mut(manifest: &mut Value) -> Result<&mut Map<String, Value>> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| Error::shape(MANIFEST_FILE, "the document", "an object"))?;

    let entry = root
        .entry(DEV_DEPENDENCIES)
        .or_insert_with(|| Value::Object(Map::new()));
    // `null` is treated the same as a missing key
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }

    entry
        .as_object_mut()
        .ok_or_else(|| Error::shape(MANIFEST_FILE, DEV_DEPENDENCIES, "an object"))
}
