//! Common test utilities for integration tests.

use std::fs;
use std::path::PathBuf;

/// An alias document exercising every formatting feature: plain aliases,
/// nested directories, placeholders, spaces, and a home-relative path.
pub const SAMPLE_DOCUMENT: &str = "-
  - foo: foo.txt
-
  - test_directory/
  -
    -
      - bar: bar.txt
    -
      - deep: deep_test_directory
      -
        -
          - baz: <file_name>.<file_type>
-
  - spacy: /A Folder/a file.txt
-
  - homey: ~/Documents
";

/// Write an alias file with the given contents into `dir`.
#[allow(dead_code)]
pub fn write_alias_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("paths.yml");
    fs::write(&path, contents).unwrap();
    path
}
