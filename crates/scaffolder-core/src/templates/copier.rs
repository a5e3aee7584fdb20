//! Template tree copying

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::templates::descriptor::DESCRIPTOR_FILE;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Files that cannot ship under their real name inside a template
/// (package managers drop `.gitignore` on publish)
const RENAME_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Output name for a top-level template entry
pub fn renamed(file_name: &str) -> &str {
    RENAME_FILES
        .iter()
        .find(|(source, _)| *source == file_name)
        .map(|(_, dest)| *dest)
        .unwrap_or(file_name)
}

/// Map a template-relative path to its output path.
///
/// Only the first component goes through the rename table; anything deeper is
/// copied literally.
fn output_path(relative: &Path) -> PathBuf {
    let mut components = relative.components();
    let mut out = PathBuf::new();
    if let Some(Component::Normal(first)) = components.next() {
        match first.to_str() {
            Some(name) => out.push(renamed(name)),
            None => out.push(first),
        }
    }
    let rest = components.as_path();
    if !rest.as_os_str().is_empty() {
        out.push(rest);
    }
    out
}

/// Write `contents` to `file_name` at the top of `target_dir`, applying the rename table
pub async fn write_file(
    target_dir: &Path,
    file_name: &str,
    contents: &str,
) -> ScaffoldResult<PathBuf> {
    let relative = PathBuf::from(renamed(file_name));
    let target_path = target_dir.join(&relative);
    fs::write(&target_path, contents)
        .await
        .map_err(|e| ScaffoldError::io(&target_path, e))?;
    Ok(relative)
}

/// Copy every entry of `template_dir` into `target_dir`, except the top-level
/// package.json which is written separately.
///
/// Directories are created on demand and existing files are overwritten.
/// Returns the written files relative to `target_dir`.
pub async fn copy_template(
    template_dir: &Path,
    target_dir: &Path,
) -> ScaffoldResult<Vec<PathBuf>> {
    fs::create_dir_all(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(target_dir, e))?;

    let mut copied_files = Vec::new();

    let walker = WalkDir::new(template_dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !(entry.depth() == 1 && entry.file_name() == DESCRIPTOR_FILE));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(template_dir).to_path_buf();
            ScaffoldError::io(path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(template_dir) else {
            continue;
        };

        let relative = output_path(relative);
        let target_path = target_dir.join(&relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .map_err(|e| ScaffoldError::io(&target_path, e))?;
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ScaffoldError::io(parent, e))?;
        }
        fs::copy(entry.path(), &target_path)
            .await
            .map_err(|e| ScaffoldError::io(entry.path(), e))?;

        copied_files.push(relative);
    }

    Ok(copied_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn files_under(root: &Path) -> BTreeSet<String> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_renamed() {
        assert_eq!(renamed("_gitignore"), ".gitignore");
        assert_eq!(renamed("index.js"), "index.js");
        assert_eq!(renamed("_npmrc"), "_npmrc");
    }

    #[test]
    fn test_output_path_renames_first_component_only() {
        assert_eq!(output_path(Path::new("_gitignore")), PathBuf::from(".gitignore"));
        assert_eq!(
            output_path(Path::new("src/_gitignore")),
            PathBuf::from("src/_gitignore")
        );
        assert_eq!(
            output_path(Path::new("_gitignore/keep")),
            PathBuf::from(".gitignore/keep")
        );
    }

    #[tokio::test]
    async fn test_copy_mirrors_tree() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(template.path(), "index.js", "console.log('hi')");
        write(template.path(), "src/app.js", "export {}");
        write(template.path(), "src/components/button.js", "export {}");
        write(template.path(), "public/favicon.ico", "\u{0}\u{1}");

        let out = target.path().join("app");
        let copied = copy_template(template.path(), &out).await.unwrap();

        assert_eq!(copied.len(), 4);
        assert_eq!(files_under(&out), files_under(template.path()));
        assert_eq!(
            std::fs::read_to_string(out.join("src/app.js")).unwrap(),
            "export {}"
        );
        assert_eq!(std::fs::read(out.join("public/favicon.ico")).unwrap(), vec![0, 1]);
    }

    #[tokio::test]
    async fn test_copy_renames_top_level_and_skips_descriptor() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(template.path(), "_gitignore", "node_modules");
        write(template.path(), "package.json", "{}");
        write(template.path(), "nested/_gitignore", "dist");
        write(template.path(), "nested/package.json", "{}");

        copy_template(template.path(), target.path()).await.unwrap();

        let expected: BTreeSet<String> = [".gitignore", "nested/_gitignore", "nested/package.json"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(files_under(target.path()), expected);
        assert_eq!(
            std::fs::read_to_string(target.path().join(".gitignore")).unwrap(),
            "node_modules"
        );
    }

    #[tokio::test]
    async fn test_copy_keeps_empty_directories() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        std::fs::create_dir_all(template.path().join("assets/empty")).unwrap();

        let copied = copy_template(template.path(), target.path()).await.unwrap();

        assert!(copied.is_empty());
        assert!(target.path().join("assets/empty").is_dir());
    }

    #[tokio::test]
    async fn test_copy_overwrites_existing_files() {
        let template = tempdir().unwrap();
        let target = tempdir().unwrap();
        write(template.path(), "README.md", "fresh");
        write(target.path(), "README.md", "stale");
        write(target.path(), "notes.txt", "untouched");

        copy_template(template.path(), target.path()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(target.path().join("README.md")).unwrap(),
            "fresh"
        );
        assert!(target.path().join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_copy_missing_template_fails() {
        let target = tempdir().unwrap();
        let missing = target.path().join("does-not-exist");

        let err = copy_template(&missing, &target.path().join("out"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[tokio::test]
    async fn test_write_file_applies_rename_table() {
        let target = tempdir().unwrap();

        let written = write_file(target.path(), "_gitignore", "dist").await.unwrap();

        assert_eq!(written, PathBuf::from(".gitignore"));
        assert_eq!(
            std::fs::read_to_string(target.path().join(".gitignore")).unwrap(),
            "dist"
        );
    }
}
