use std::path::PathBuf;

use geoddl_core::GeneratorRegistry;
use geoddl_dialect_postgres::{PostgresDialect, register};
use geoddl_testkit::{TestResult, load_test_cases_from_path, run_test};

#[test]
fn postgres_yaml_cases_pass() {
    let mut registry = GeneratorRegistry::new();
    register(&mut registry);
    let context = PostgresDialect::new();

    let path = cases_root().join("0001-gist-index.yml");
    let cases = load_test_cases_from_path(&path)
        .unwrap_or_else(|error| panic!("failed to load case '{}': {error}", path.display()));
    assert!(!cases.is_empty());

    let mut skipped = 0;
    for (case_name, case) in cases {
        match run_test(&registry, &context, &case) {
            TestResult::Passed => {}
            TestResult::Skipped(_) => skipped += 1,
            TestResult::Failed(reason) => panic!("testcase '{case_name}' failed: {reason}"),
        }
    }
    assert_eq!(skipped, 1, "exactly one case targets another dialect");
}

fn cases_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../tests/postgres")
}
