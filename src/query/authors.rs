//! Known author lists and new author detection.
//!
//! Known authors live in a directory of plain-text files, one name per line.
//! All files are merged into a single set. A file that cannot be read adds
//! nothing; the rest of the directory is still used.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::library::Catalog;

/// Names listed in one author file, blank lines skipped
pub fn read_author_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read author file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Union of the names in every file under `dir`
///
/// Subdirectories are ignored. An unreadable directory yields an empty set.
pub fn read_known_authors(dir: &Path) -> HashSet<String> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "Cannot list author directory");
            return HashSet::new();
        }
    };

    let mut known = HashSet::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        if path.is_dir() {
            continue;
        }

        match read_author_file(&path) {
            Ok(names) => {
                debug!(file = %path.display(), names = names.len(), "Read author file");
                known.extend(names);
            }
            Err(e) => warn!(error = %format!("{:#}", e), "Skipping author file"),
        }
    }

    known
}

/// Authors in the catalog missing from `known`
pub fn new_authors(catalog: &Catalog, known: &HashSet<String>) -> BTreeSet<String> {
    catalog
        .iter()
        .flat_map(|post| post.authors.iter())
        .filter(|author| !known.contains(author.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, PostType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn post(authors: &[&str]) -> Post {
        Post::new(
            "Title",
            authors.iter().copied(),
            PostType::Blog,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            "https://www.epam.com/title",
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_new_authors_set_difference() {
        let known: HashSet<String> = ["A", "B"].iter().map(|s| s.to_string()).collect();
        let catalog = Catalog::from_posts(vec![post(&["A"]), post(&["C"])]);

        let result = new_authors(&catalog, &known);

        assert_eq!(result, BTreeSet::from(["C".to_string()]));
    }

    #[test]
    fn test_read_author_file_skips_blank_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("authors.txt");
        std::fs::write(&path, "Ada Lovelace\r\n\n  Grace Hopper  \n").unwrap();

        let names = read_author_file(&path).unwrap();

        assert_eq!(names, vec!["Ada Lovelace".to_string(), "Grace Hopper".to_string()]);
    }

    #[test]
    fn test_read_known_authors_merges_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("2019.txt"), "Ada\nGrace\n").unwrap();
        std::fs::write(temp.path().join("2020.txt"), "Grace\nLinus\n").unwrap();
        std::fs::create_dir(temp.path().join("archive")).unwrap();

        let known = read_known_authors(temp.path());

        assert_eq!(known.len(), 3);
        assert!(known.contains("Ada"));
        assert!(known.contains("Linus"));
    }

    #[test]
    fn test_unreadable_file_contributes_nothing() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("good.txt"), "Ada\n").unwrap();
        std::fs::write(temp.path().join("binary.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let known = read_known_authors(temp.path());

        assert_eq!(known, HashSet::from(["Ada".to_string()]));
    }

    #[test]
    fn test_missing_directory_yields_empty_set() {
        let temp = TempDir::new().unwrap();

        assert!(read_known_authors(&temp.path().join("nope")).is_empty());
    }
}
