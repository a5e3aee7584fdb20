//! package.json patching

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::copier;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the package descriptor at the root of every template
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Replace the `name` field of a package descriptor, keeping every other key
/// (and the key order) as it was. Output uses 2-space indentation.
pub fn set_package_name(source: &str, package_name: &str, path: &Path) -> ScaffoldResult<String> {
    let parse_error = |err: serde_json::Error| ScaffoldError::ParseError {
        path: path.to_path_buf(),
        source: err,
    };

    let mut descriptor: Map<String, Value> = serde_json::from_str(source).map_err(parse_error)?;
    descriptor.insert("name".to_string(), Value::String(package_name.to_string()));
    serde_json::to_string_pretty(&descriptor).map_err(parse_error)
}

/// Read the template's package.json, rename the package, and write it into `target_dir`.
/// Returns the written path relative to `target_dir`.
pub async fn write_descriptor(
    template_dir: &Path,
    target_dir: &Path,
    package_name: &str,
) -> ScaffoldResult<PathBuf> {
    let source_path = template_dir.join(DESCRIPTOR_FILE);
    let source = match fs::read_to_string(&source_path).await {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScaffoldError::MissingDescriptor(source_path))
        }
        Err(e) => return Err(ScaffoldError::io(&source_path, e)),
    };

    let patched = set_package_name(&source, package_name, &source_path)?;
    copier::write_file(target_dir, DESCRIPTOR_FILE, &patched).await
}
