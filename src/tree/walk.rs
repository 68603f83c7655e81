use std::io::{self, Write};
use std::path::Path;

use super::probe::has_matching_descendant;
use super::{list_dir, TreeEntry};
use crate::filter::Filter;

const TEE: &str = "\u{251c}\u{2500}\u{2500} "; // ├──
const ELBOW: &str = "\u{2514}\u{2500}\u{2500} "; // └──
const PIPE: &str = "\u{2502}   "; // │
const SPACER: &str = "    ";

/// Render the whole tree: the root path exactly as supplied, then the
/// filtered walk below it.
pub fn render_tree<W: Write>(root: &Path, filter: &Filter, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", root.display())?;
    render_dir(root, "", filter, false, out)
}

/// Render one directory level and recurse into its visible subdirectories.
///
/// Listing problems become output lines, not errors: a target that is not
/// a directory gets a single diagnostic line, an unreadable directory gets
/// a bracketed line in place of its children, and in both cases the walk
/// continues with the caller's remaining siblings. Only failures on the
/// output stream itself propagate.
///
/// `force_show_all` is set once the walk enters a directory that was kept
/// because its own name matched an inclusion directory rule; from then on
/// every descendant is emitted without further filter evaluation.
pub fn render_dir<W: Write>(
    dir: &Path,
    prefix: &str,
    filter: &Filter,
    force_show_all: bool,
    out: &mut W,
) -> io::Result<()> {
    if !dir.is_dir() {
        writeln!(out, "Error: '{}' is not a directory.", dir.display())?;
        return Ok(());
    }

    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            writeln!(out, "{prefix}[Permission Denied]")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "{prefix}[Error: {e}]")?;
            return Ok(());
        }
    };

    let visible: Vec<&TreeEntry> = entries
        .iter()
        .filter(|entry| force_show_all || keeps_entry(filter, entry))
        .collect();

    let count = visible.len();
    for (i, entry) in visible.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { ELBOW } else { TEE };
        writeln!(out, "{prefix}{connector}{}", entry.name)?;

        if entry.is_dir {
            let child_prefix = format!("{prefix}{}", if is_last { SPACER } else { PIPE });
            let force = force_show_all || filter.names_directory(&entry.name);
            render_dir(&entry.path, &child_prefix, filter, force, out)?;
        }
    }
    Ok(())
}

/// Visibility of one entry under the active filter mode.
///
/// In inclusion mode a directory that is not explicitly named is kept only
/// if probing finds a matching descendant somewhere below it; the probe
/// re-lists that subtree, and the renderer lists it again if it is kept.
fn keeps_entry(filter: &Filter, entry: &TreeEntry) -> bool {
    match filter {
        Filter::Everything => true,
        Filter::Exclude(sets) => !sets.excludes(&entry.name, entry.is_dir),
        Filter::Include(sets) => {
            if entry.is_dir {
                sets.names_directory(&entry.name) || has_matching_descendant(&entry.path, sets)
            } else {
                sets.matches_file(&entry.name)
            }
        }
    }
}
