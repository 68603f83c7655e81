//! Filter configuration and the per-entry predicates behind both modes.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Case-sensitive name and extension sets for one filter mode.
///
/// Extensions are stored normalized with a leading dot, so lookups always
/// compare dotted values regardless of how the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSets {
    pub files: HashSet<String>,
    pub extensions: HashSet<String>,
    pub directories: HashSet<String>,
}

impl NameSets {
    /// Build the sets from raw CLI values, normalizing extensions so that
    /// `log` and `.log` mean the same thing.
    pub fn new(files: Vec<String>, extensions: Vec<String>, directories: Vec<String>) -> Self {
        NameSets {
            files: files.into_iter().collect(),
            extensions: extensions.into_iter().map(normalize_extension).collect(),
            directories: directories.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.extensions.is_empty() && self.directories.is_empty()
    }

    /// Exclusion-mode predicate: directories are matched by name only,
    /// files by name or extension.
    pub fn excludes(&self, name: &str, is_dir: bool) -> bool {
        if is_dir {
            return self.directories.contains(name);
        }
        if self.files.contains(name) {
            return true;
        }
        match extension_of(name) {
            Some(ext) => self.extensions.contains(&ext),
            None => false,
        }
    }

    /// Inclusion-mode predicate for files. Empty sets never match.
    pub fn matches_file(&self, name: &str) -> bool {
        if self.files.contains(name) {
            return true;
        }
        match extension_of(name) {
            Some(ext) => self.extensions.contains(&ext),
            None => false,
        }
    }

    /// Whether a directory is explicitly listed by an inclusion rule.
    /// Distinct from "contains a match": an explicitly named directory is
    /// shown with its entire subtree.
    pub fn names_directory(&self, name: &str) -> bool {
        self.directories.contains(name)
    }
}

impl fmt::Display for NameSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file name(s), {} extension(s), {} directory name(s)",
            self.files.len(),
            self.extensions.len(),
            self.directories.len()
        )
    }
}

/// The resolved filter for one run. Exclusion and inclusion are separate
/// variants, so holding one rules out consulting the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// No filtering: every entry is visible.
    Everything,
    /// Hide matched entries, show the rest.
    Exclude(NameSets),
    /// Show only matched entries and the ancestors needed to reach them.
    Include(NameSets),
}

impl Filter {
    /// Whether `name` is explicitly listed as an included directory.
    /// Always false outside inclusion mode.
    pub fn names_directory(&self, name: &str) -> bool {
        match self {
            Filter::Include(sets) => sets.names_directory(name),
            _ => false,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Everything => f.write_str("no filters"),
            Filter::Exclude(sets) => write!(f, "exclusion mode: {sets}"),
            Filter::Include(sets) => write!(f, "inclusion mode: {sets}"),
        }
    }
}

fn normalize_extension(ext: String) -> String {
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Extension of a file name, dot included: `"photo.png"` → `".png"`.
/// Names without a dot, and leading-dot names like `.gitignore`, have none.
fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}
