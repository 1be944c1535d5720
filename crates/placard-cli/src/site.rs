/* crates/placard-cli/src/site.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Collect every HTML page under the site root, as paths relative to it,
/// in sorted order. The output directory and dot-directories are skipped.
pub fn discover_pages(root: &Path, out_dir: &str) -> Result<Vec<String>> {
  let mut pages = Vec::new();
  walk(root, root, out_dir, &mut pages)?;
  pages.sort();
  Ok(pages)
}

fn walk(root: &Path, dir: &Path, out_dir: &str, pages: &mut Vec<String>) -> Result<()> {
  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;
  for entry in entries {
    let entry = entry?;
    let path = entry.path();
    let name = entry.file_name().to_string_lossy().into_owned();

    if path.is_dir() {
      if name.starts_with('.') || name == out_dir {
        continue;
      }
      walk(root, &path, out_dir, pages)?;
    } else if name.ends_with(".html") {
      let relative = path
        .strip_prefix(root)
        .unwrap_or(&path)
        .to_string_lossy()
        .replace('\\', "/");
      pages.push(relative);
    }
  }
  Ok(())
}

pub fn read_page(root: &Path, page: &str) -> Result<String> {
  let path = root.join(page);
  std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn write_page(out_dir: &Path, page: &str, html: &str) -> Result<PathBuf> {
  let path = out_dir.join(page);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn discovers_pages_recursively_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("research")).unwrap();
    std::fs::create_dir_all(dir.path().join("dist")).unwrap();
    std::fs::create_dir_all(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join("index.html"), "<p>i</p>").unwrap();
    std::fs::write(dir.path().join("research/housing.html"), "<p>h</p>").unwrap();
    std::fs::write(dir.path().join("dist/index.html"), "<p>built</p>").unwrap();
    std::fs::write(dir.path().join(".git/x.html"), "<p>no</p>").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();

    let pages = discover_pages(dir.path(), "dist").unwrap();
    assert_eq!(pages, ["index.html", "research/housing.html"]);
  }

  #[test]
  fn write_page_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dist");
    let path = write_page(&out, "research/housing.html", "<p>x</p>").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "<p>x</p>");
  }
}
