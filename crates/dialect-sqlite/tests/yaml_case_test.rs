use std::{fs, path::PathBuf};

use geoddl_dialect_sqlite::{SqliteDialect, SpatialiteSpatialIndexGenerator};
use geoddl_testkit::{TestResult, load_test_cases_from_path, registry_with, run_test};

#[test]
fn sqlite_yaml_cases_pass() {
    let registry = registry_with(SpatialiteSpatialIndexGenerator);
    let context = SqliteDialect::new();

    let mut paths: Vec<PathBuf> = fs::read_dir(cases_root())
        .unwrap_or_else(|error| panic!("failed to read case directory: {error}"))
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "yml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no case files under {}", cases_root().display());

    for path in paths {
        let cases = load_test_cases_from_path(&path)
            .unwrap_or_else(|error| panic!("failed to load case '{}': {error}", path.display()));
        assert!(!cases.is_empty(), "case file '{}' is empty", path.display());

        for (case_name, case) in cases {
            match run_test(&registry, &context, &case) {
                TestResult::Passed => {}
                TestResult::Skipped(reason) => {
                    panic!("testcase '{case_name}' unexpectedly skipped: {reason}")
                }
                TestResult::Failed(reason) => panic!("testcase '{case_name}' failed: {reason}"),
            }
        }
    }
}

fn cases_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/sqlite")
}
