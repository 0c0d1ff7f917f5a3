use goscaffold::scaffold::DIRECTORY_PLAN;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collects every entry under `root` as a relative path, directories suffixed with `/`.
pub fn collect_tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_string_lossy().to_string();
            if entry.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect()
}

/// Prints the entries only present in one of two trees.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let actual = collect_tree(dir1);
    let expected = collect_tree(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);
    for entry in actual.difference(&expected) {
        println!("  + {entry}");
    }
    for entry in expected.difference(&actual) {
        println!("  - {entry}");
    }
    for entry in actual.intersection(&expected).filter(|e| !e.ends_with('/')) {
        let content1 = fs::read(dir1.join(entry)).unwrap();
        let content2 = fs::read(dir2.join(entry)).unwrap();
        if content1 != content2 {
            println!("  ~ {entry}");
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Materializes an expected tree: the fixture files plus every planned directory,
/// some of which stay empty and cannot be kept in the fixture itself.
pub fn expected_tree(fixture: &str) -> tempfile::TempDir {
    let expected = tempfile::tempdir().unwrap();
    for dir in DIRECTORY_PLAN {
        fs::create_dir_all(expected.path().join(dir)).unwrap();
    }
    let fixture_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(fixture);
    for entry in WalkDir::new(&fixture_root).into_iter().filter_map(Result::ok) {
        let rel = entry.path().strip_prefix(&fixture_root).unwrap();
        let target = expected.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
    expected
}

/// Asserts that `actual` matches the fixture tree, printing the differences if not.
pub fn assert_matches_fixture(actual: &Path, fixture: &str) {
    let expected = expected_tree(fixture);
    if dir_diff::is_different(actual, expected.path()).unwrap() {
        print_dir_diff(actual, expected.path());
        panic!("Directories differ. See above for details.");
    }
}
