// src/discovery.rs
use anyhow::{bail, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

static IMAGE_EXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpe?g|gif|bmp|webp)$").unwrap_or_else(|_| panic!("Invalid Regex"))
});

const PRUNE_DIRS: &[&str] = &["node_modules", "target", "__MACOSX"];

/// Expands design arguments into image files. Files are taken as given;
/// directories are walked for image extensions, sorted per directory.
///
/// # Errors
/// Returns error if an argument does not exist.
pub fn discover(inputs: &[PathBuf], verbose: bool) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for input in inputs {
        if input.is_file() {
            found.push(input.clone());
        } else if input.is_dir() {
            found.extend(walk_directory(input, verbose));
        } else {
            bail!("Design not found: {}", input.display());
        }
    }
    Ok(found)
}

#[must_use]
pub fn is_image(path: &Path) -> bool {
    let filename = path.file_name().map_or("", |f| f.to_str().unwrap_or(""));
    IMAGE_EXT_RE.is_match(filename)
}

fn should_prune(name: &str) -> bool {
    (name.starts_with('.') && name.len() > 1) || PRUNE_DIRS.contains(&name)
}

fn walk_directory(root: &Path, verbose: bool) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        tracing::warn!(root = %root.display(), errors = error_count, "skipped unreadable entries");
        if verbose {
            eprintln!("WARN: Encountered {error_count} errors during file walk");
        }
    }
    paths
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_image(entry.path()) {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn recognizes_image_extensions() {
        assert!(is_image(Path::new("hero.PNG")));
        assert!(is_image(Path::new("a/b/banner.jpeg")));
        assert!(is_image(Path::new("x.webp")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("png")));
    }

    #[test]
    fn walks_directories_and_skips_hidden() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::create_dir_all(dir.path().join("nested"))?;
        fs::create_dir_all(dir.path().join(".cache"))?;
        fs::write(dir.path().join("b.png"), b"")?;
        fs::write(dir.path().join("a.jpg"), b"")?;
        fs::write(dir.path().join("readme.md"), b"")?;
        fs::write(dir.path().join("nested/c.gif"), b"")?;
        fs::write(dir.path().join(".cache/d.png"), b"")?;

        let found = discover(&[dir.path().to_path_buf()], false)?;
        let names: Vec<String> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "nested/c.gif"]);
        Ok(())
    }

    #[test]
    fn missing_input_is_an_error() {
        assert!(discover(&[PathBuf::from("/definitely/not/here.png")], false).is_err());
    }
}
