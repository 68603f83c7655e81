mod common;

use common::{create_fixture, render_to_string};
use siftree::filter::Filter;
use tempfile::TempDir;

#[test]
fn lists_every_entry_with_no_filters() {
    let tmp = create_fixture(&["src/", "src/main.rs", "README.md", "notes.txt"]);
    let output = render_to_string(tmp.path(), &Filter::Everything);
    let expected = format!(
        "{}\n\
         ├── notes.txt\n\
         ├── README.md\n\
         └── src\n\
         \u{20}   └── main.rs\n",
        tmp.path().display()
    );
    assert_eq!(output, expected);
}

#[test]
fn sort_is_case_insensitive_alphabetical() {
    let tmp = create_fixture(&["Banana.txt", "apple.txt", "Cherry.txt"]);
    let output = render_to_string(tmp.path(), &Filter::Everything);
    let names: Vec<&str> = output
        .lines()
        .skip(1)
        .map(|l| l.rsplit(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec!["apple.txt", "Banana.txt", "Cherry.txt"]);
}

#[test]
fn connector_glyphs_distinguish_last_entry() {
    let tmp = create_fixture(&["a/", "a/deep.txt", "b.txt"]);
    let output = render_to_string(tmp.path(), &Filter::Everything);
    let expected = format!(
        "{}\n\
         ├── a\n\
         │   └── deep.txt\n\
         └── b.txt\n",
        tmp.path().display()
    );
    assert_eq!(output, expected);
}

#[test]
fn continuation_marker_tracks_non_last_ancestors() {
    let tmp = create_fixture(&["a/", "a/inner/", "a/inner/leaf.txt", "a/z.txt", "b.txt"]);
    let output = render_to_string(tmp.path(), &Filter::Everything);
    let expected = format!(
        "{}\n\
         ├── a\n\
         │   ├── inner\n\
         │   │   └── leaf.txt\n\
         │   └── z.txt\n\
         └── b.txt\n",
        tmp.path().display()
    );
    assert_eq!(output, expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let tmp = create_fixture(&["src/", "src/lib.rs", "Cargo.toml", "docs/", "docs/guide.md"]);
    let first = render_to_string(tmp.path(), &Filter::Everything);
    let second = render_to_string(tmp.path(), &Filter::Everything);
    assert_eq!(first, second);
}

#[test]
fn root_line_is_path_as_supplied() {
    let tmp = create_fixture(&["file.txt"]);
    let output = render_to_string(tmp.path(), &Filter::Everything);
    let first_line = output.lines().next().unwrap();
    assert_eq!(first_line, tmp.path().display().to_string());
}

#[test]
fn not_a_directory_target_emits_single_diagnostic() {
    let tmp = create_fixture(&["afile.txt"]);
    let file = tmp.path().join("afile.txt");
    let output = render_to_string(&file, &Filter::Everything);
    let expected = format!(
        "{}\nError: '{}' is not a directory.\n",
        file.display(),
        file.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn nonexistent_target_emits_single_diagnostic() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let output = render_to_string(&missing, &Filter::Everything);
    let expected = format!(
        "{}\nError: '{}' is not a directory.\n",
        missing.display(),
        missing.display()
    );
    assert_eq!(output, expected);
}

#[test]
fn empty_directory_prints_only_root_line() {
    let tmp = TempDir::new().unwrap();
    let output = render_to_string(tmp.path(), &Filter::Everything);
    assert_eq!(output, format!("{}\n", tmp.path().display()));
}
