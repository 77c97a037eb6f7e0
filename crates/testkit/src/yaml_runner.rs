use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use geoddl_core::{
    BoundingBox, CreateSpatialIndex, Decimal, DialectContext, GeneratorRegistry, Renderer,
    parse_decimal,
};
use serde::Deserialize;
use thiserror::Error;

const TESTCASE_SOURCE_LABEL: &str = "yaml testcase";

/// One spatial index request and the script it must render to.
///
/// Decimal bounds are strings so their written scale survives loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestCase {
    pub index: String,
    pub table: String,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub columns: Vec<String>,
    pub tablespace: Option<String>,
    pub geometry_type: Option<String>,
    pub srid: Option<i32>,
    pub min_x: Option<String>,
    pub max_x: Option<String>,
    pub min_y: Option<String>,
    pub max_y: Option<String>,
    pub min_z: Option<String>,
    pub max_z: Option<String>,
    pub tolerance: Option<String>,
    pub expected: Option<String>,
    pub error: Option<String>,
    /// Dialect tag the case applies to; a leading `!` excludes that dialect.
    pub dialect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Error)]
pub enum TestkitError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid {TESTCASE_SOURCE_LABEL} at {}: {source}", render_location(.location))]
    Yaml {
        location: Option<(usize, usize)>,
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Core(#[from] geoddl_core::Error),
    #[error("{0}")]
    Assertion(String),
}

pub type TestkitResult<T> = std::result::Result<T, TestkitError>;

impl TestCase {
    pub fn to_statement(&self) -> TestkitResult<CreateSpatialIndex> {
        let mut builder =
            CreateSpatialIndex::builder(&self.index, &self.table).columns(&self.columns);

        if let Some(catalog) = &self.catalog {
            builder = builder.catalog(catalog);
        }
        if let Some(schema) = &self.schema {
            builder = builder.schema(schema);
        }
        if let Some(tablespace) = &self.tablespace {
            builder = builder.tablespace(tablespace);
        }
        if let Some(geometry_type) = &self.geometry_type {
            builder = builder.geometry_type(geometry_type);
        }
        if let Some(srid) = self.srid {
            builder = builder.srid(srid);
        }
        if let Some(tolerance) = decimal_field("tolerance", self.tolerance.as_deref())? {
            builder = builder.tolerance(tolerance);
        }

        let bounds = BoundingBox {
            min_x: decimal_field("min_x", self.min_x.as_deref())?,
            max_x: decimal_field("max_x", self.max_x.as_deref())?,
            min_y: decimal_field("min_y", self.min_y.as_deref())?,
            max_y: decimal_field("max_y", self.max_y.as_deref())?,
            min_z: decimal_field("min_z", self.min_z.as_deref())?,
            max_z: decimal_field("max_z", self.max_z.as_deref())?,
        };

        Ok(builder.bounding_box(bounds).build())
    }
}

pub fn load_test_cases_from_str(yaml: &str) -> TestkitResult<BTreeMap<String, TestCase>> {
    serde_yaml::from_str(yaml).map_err(|source| TestkitError::Yaml {
        location: source
            .location()
            .map(|location| (location.line(), location.column())),
        source,
    })
}

pub fn load_test_cases_from_path(path: &Path) -> TestkitResult<BTreeMap<String, TestCase>> {
    let yaml = fs::read_to_string(path).map_err(|source| TestkitError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_test_cases_from_str(&yaml)
}

pub fn matches_dialect(requirement: Option<&str>, current: &str) -> bool {
    let Some(requirement) = requirement.map(str::trim).filter(|value| !value.is_empty()) else {
        return true;
    };

    if let Some(excluded) = requirement.strip_prefix('!') {
        return !excluded.eq_ignore_ascii_case(current);
    }

    requirement.eq_ignore_ascii_case(current)
}

pub fn run_test(
    registry: &GeneratorRegistry,
    context: &dyn DialectContext,
    test: &TestCase,
) -> TestResult {
    let current = context.dialect().to_string();
    if !matches_dialect(test.dialect.as_deref(), &current) {
        return TestResult::Skipped(format!(
            "case requires dialect '{}', running on '{current}'",
            test.dialect.as_deref().unwrap_or_default()
        ));
    }

    match evaluate_expected_error(test, run_test_flow(registry, context, test)) {
        Ok(()) => TestResult::Passed,
        Err(error) => TestResult::Failed(error.to_string()),
    }
}

fn run_test_flow(
    registry: &GeneratorRegistry,
    context: &dyn DialectContext,
    test: &TestCase,
) -> TestkitResult<()> {
    let statement = test.to_statement()?;
    let fragments = registry.generate(&statement, context)?;
    let actual = Renderer::new(context).render(&fragments);

    let Some(expected) = test.expected.as_deref() else {
        return Ok(());
    };
    if expected.trim() == actual.trim() {
        return Ok(());
    }

    Err(TestkitError::Assertion(format!(
        "SQL mismatch; expected:\n{}\nactual:\n{}",
        expected.trim(),
        actual.trim()
    )))
}

fn evaluate_expected_error(test: &TestCase, result: TestkitResult<()>) -> TestkitResult<()> {
    let Some(expected_error) = test.error.as_deref() else {
        return result;
    };

    match result {
        Ok(()) => Err(TestkitError::Assertion(format!(
            "expected error: {expected_error}, but got no error"
        ))),
        Err(TestkitError::Assertion(message)) => Err(TestkitError::Assertion(message)),
        Err(actual) => {
            let actual = actual.to_string();
            if actual == expected_error.trim() {
                Ok(())
            } else {
                Err(TestkitError::Assertion(format!(
                    "expected error: {expected_error}, but got: {actual}"
                )))
            }
        }
    }
}

fn decimal_field(field: &str, value: Option<&str>) -> TestkitResult<Option<Decimal>> {
    value
        .map(|value| parse_decimal(field, value).map_err(TestkitError::from))
        .transpose()
}

fn render_location(location: &Option<(usize, usize)>) -> String {
    match location {
        Some((line, column)) => format!("line {line}, column {column}"),
        None => "unknown location".to_string(),
    }
}
