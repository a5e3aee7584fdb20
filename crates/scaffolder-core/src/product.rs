//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to describe its identity, its built-in
//! template catalog, where its templates live, and what to tell the user once
//! the project exists.

use crate::templates::catalog::TemplateFamily;
use std::path::{Path, PathBuf};

/// Configuration trait for scaffolding products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Built-in template catalog offered by the prompts
    fn families(&self) -> &'static [TemplateFamily];

    /// Placeholder project name proposed by the first question
    fn default_project_name(&self) -> &'static str {
        "my-app"
    }

    /// Environment variable name for overriding the template root
    fn template_dir_env(&self) -> &'static str;

    /// Template root used when nothing else is configured
    fn default_template_dir(&self) -> PathBuf;

    /// Dependency install command shown after creation
    fn install_command(&self) -> &'static str {
        "npm install"
    }

    /// Generate the "next steps" commands after project creation
    fn next_steps(&self, cwd: &Path, root: &Path) -> Vec<String> {
        let mut steps = Vec::new();

        if root != cwd {
            let relative = root.strip_prefix(cwd).unwrap_or(root);
            steps.push(format!("cd {}", relative.display()));
        }
        steps.push(self.install_command().to_string());

        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestConfig;

    #[test]
    fn test_next_steps_change_directory() {
        let steps = TestConfig.next_steps(Path::new("/work"), Path::new("/work/demo"));
        assert_eq!(steps, vec!["cd demo", "npm install"]);
    }

    #[test]
    fn test_next_steps_in_place() {
        let steps = TestConfig.next_steps(Path::new("/work"), Path::new("/work/."));
        assert_eq!(steps, vec!["npm install"]);
    }

    #[test]
    fn test_next_steps_outside_cwd() {
        let steps = TestConfig.next_steps(Path::new("/work"), Path::new("/elsewhere/demo"));
        assert_eq!(steps, vec!["cd /elsewhere/demo", "npm install"]);
    }
}
