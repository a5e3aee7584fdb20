//! Project creation from a resolved configuration

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::flow::ResolvedConfig;
use crate::templates::{copier, descriptor, TemplateSource};
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Outcome of a successful project creation
#[derive(Debug, Clone)]
pub struct CreatedProject {
    /// Absolute destination root
    pub root: PathBuf,

    /// Written files, relative to `root`
    pub files: Vec<PathBuf>,
}

/// Destination root for a resolved configuration.
///
/// The target directory is always taken relative to `cwd`: root and prefix
/// components of an absolute target are dropped, so `/tmp/x` lands in `<cwd>/tmp/x`.
pub fn project_root(cwd: &Path, resolved: &ResolvedConfig) -> PathBuf {
    let mut root = cwd.to_path_buf();
    for component in Path::new(&resolved.target_dir).components() {
        match component {
            Component::Normal(part) => root.push(part),
            Component::ParentDir => root.push(".."),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
        }
    }
    root
}

/// Count entries already present at `root` (0 if it doesn't exist yet)
pub async fn count_entries(root: &Path) -> usize {
    let Ok(mut entries) = fs::read_dir(root).await else {
        return 0;
    };
    let mut count = 0;
    while let Ok(Some(_)) = entries.next_entry().await {
        count += 1;
    }
    count
}

/// Copy the chosen template into `<cwd>/<target_dir>` and write its patched package.json.
///
/// The template is looked up before anything is created, so an unknown id
/// leaves the filesystem untouched. A failure after that point leaves whatever
/// was already written in place.
pub async fn create_project(
    source: &TemplateSource,
    resolved: &ResolvedConfig,
    cwd: &Path,
) -> ScaffoldResult<CreatedProject> {
    let template_dir = source.template_dir(&resolved.template_id)?;
    let root = project_root(cwd, resolved);

    fs::create_dir_all(&root)
        .await
        .map_err(|e| ScaffoldError::io(&root, e))?;

    let mut files = copier::copy_template(&template_dir, &root).await?;
    files.push(descriptor::write_descriptor(&template_dir, &root, &resolved.package_name).await?);

    Ok(CreatedProject { root, files })
}
