use std::path::Path;

use walkdir::WalkDir;

use crate::filter::NameSets;

/// Whether any descendant of `dir`, at any depth, matches the inclusion
/// sets. Stops at the first hit.
///
/// Probing only decides visibility, so unreadable branches below `dir`
/// count as "nothing matched there" and produce no output; the render pass
/// is the one that surfaces listing errors. Symlinked directories are
/// followed so the probe agrees with the renderer's resolved view of what
/// is a directory.
pub fn has_matching_descendant(dir: &Path, include: &NameSets) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .any(|entry| {
            let name = entry.file_name().to_string_lossy();
            if entry.file_type().is_dir() {
                include.names_directory(&name)
            } else {
                include.matches_file(&name)
            }
        })
}
