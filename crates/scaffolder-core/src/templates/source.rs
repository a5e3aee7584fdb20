//! Locating the template root on disk
//!
//! The template root holds one `template-<id>` directory per template. It is
//! resolved from, in order: an explicit path, the product's environment
//! variable, a `templates/` directory next to the executable, and finally the
//! product's default location.

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::product::ProductConfig;
use crate::templates::catalog::{template_dir_name, TEMPLATE_DIR_PREFIX};
use std::path::{Path, PathBuf};

/// Directory holding the `template-<id>` folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    root: PathBuf,
}

impl TemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the template root for a product
    pub fn resolve<C: ProductConfig>(config: &C, explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }

        if let Some(path) = std::env::var_os(config.template_dir_env()).filter(|v| !v.is_empty()) {
            return Self::new(path);
        }

        if let Some(path) = Self::next_to_executable() {
            return Self::new(path);
        }

        Self::new(config.default_template_dir())
    }

    fn next_to_executable() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        let dir = exe.parent()?.join("templates");
        dir.is_dir().then_some(dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the template `template_id`; fails if it doesn't exist
    pub fn template_dir(&self, template_id: &str) -> ScaffoldResult<PathBuf> {
        let dir = self.root.join(template_dir_name(template_id));
        if dir.is_dir() {
            Ok(dir)
        } else {
            Err(ScaffoldError::TemplateNotFound {
                id: template_id.to_string(),
                root: self.root.clone(),
                available: self.available(),
            })
        }
    }

    /// Ids of the templates present under the root, sorted
    pub fn available(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut ids: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_prefix(TEMPLATE_DIR_PREFIX))
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
            })
            .collect();
        ids.sort();
        ids
    }
}
