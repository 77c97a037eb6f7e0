use std::{fs, path::PathBuf};

use geoddl_core::{DialectContext, GeneratorRegistry};
use geoddl_testkit::{TestResult, load_test_cases_from_path, run_test};

#[test]
fn every_dialect_directory_passes() {
    let mut registry = GeneratorRegistry::new();
    geoddl_dialect_oracle::register(&mut registry);
    geoddl_dialect_postgres::register(&mut registry);
    geoddl_dialect_mysql::register(&mut registry);
    geoddl_dialect_sqlite::register(&mut registry);
    geoddl_dialect_mssql::register(&mut registry);

    let contexts: [(&str, Box<dyn DialectContext>); 5] = [
        ("oracle", Box::new(geoddl_dialect_oracle::OracleDialect::new())),
        ("postgres", Box::new(geoddl_dialect_postgres::PostgresDialect::new())),
        ("mysql", Box::new(geoddl_dialect_mysql::MysqlDialect::new())),
        ("sqlite", Box::new(geoddl_dialect_sqlite::SqliteDialect::new())),
        ("mssql", Box::new(geoddl_dialect_mssql::MssqlDialect::new())),
    ];

    for (directory, context) in contexts {
        let files = case_files(directory);
        assert!(!files.is_empty(), "no case files under tests/{directory}");

        for path in files {
            let cases = load_test_cases_from_path(&path).unwrap_or_else(|error| {
                panic!("failed to load case '{}': {error}", path.display())
            });
            for (case_name, case) in cases {
                match run_test(&registry, context.as_ref(), &case) {
                    TestResult::Passed | TestResult::Skipped(_) => {}
                    TestResult::Failed(reason) => panic!(
                        "{directory} testcase '{case_name}' in '{}' failed: {reason}",
                        path.display()
                    ),
                }
            }
        }
    }
}

fn case_files(directory: &str) -> Vec<PathBuf> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests")
        .join(directory);
    let mut files: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap_or_else(|error| panic!("failed to read '{}': {error}", root.display()))
        .map(|entry| entry.expect("directory entry").path())
        .filter(|path| path.extension().is_some_and(|extension| extension == "yml"))
        .collect();
    files.sort();
    files
}
