//! Directory listing snapshots
//!
//! The classifier consumes a snapshot of sibling file names instead of
//! touching the filesystem directly. This keeps the rule logic pure and
//! lets tests feed it synthetic listings.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File names present in one scanned directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    names: HashSet<String>,
}

impl DirectoryListing {
    /// Build a listing from an explicit collection of names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot the file names of `dir`. Subdirectory names are not part
    /// of the listing.
    ///
    /// # Errors
    /// Propagates the filesystem error if `dir` is missing or unreadable.
    pub fn read_dir(dir: &Path) -> std::io::Result<Self> {
        let mut names = HashSet::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => {
                    names.insert(name);
                },
                Err(name) => {
                    log::warn!("Skipping file with non-UTF-8 name: {:?}", name);
                },
            }
        }
        Ok(Self { names })
    }

    /// Whether a file of exactly this name exists in the directory.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the file names in the listing, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of files in the listing.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the listing holds no files at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Immediate subdirectories of `dir`, sorted by name for a stable walk
/// order.
///
/// # Errors
/// Propagates the filesystem error if `dir` is missing or unreadable.
pub fn subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_from_names_checks_exact_names() {
        let listing = DirectoryListing::from_names(["WALL01.tga", "WALL01_fb.tga"]);

        assert!(listing.contains("WALL01.tga"));
        assert!(listing.contains("WALL01_fb.tga"));
        assert!(!listing.contains("WALL01"));
        assert!(!listing.contains("wall01.tga"));
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn test_read_dir_lists_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("WALL01.tga"), b"").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"notes").unwrap();
        std::fs::create_dir(dir.path().join("e1m1")).unwrap();

        let listing = DirectoryListing::read_dir(dir.path()).unwrap();
        assert!(listing.contains("WALL01.tga"));
        assert!(listing.contains("readme.txt"));
        assert!(!listing.contains("e1m1"));
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn test_read_dir_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");

        assert!(DirectoryListing::read_dir(&missing).is_err());
    }

    #[test]
    fn test_subdirectories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("zeta")).unwrap();
        std::fs::create_dir(dir.path().join("alpha")).unwrap();
        std::fs::write(dir.path().join("WALL01.tga"), b"").unwrap();

        let dirs = subdirectories(dir.path()).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
