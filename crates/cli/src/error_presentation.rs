use std::{io, path::PathBuf};

use anyhow::Context;
use geoddl_core::DialectId;
use miette::Report;

const GENERATION_CONTEXT: &str = "while generating spatial index DDL";
const FILE_WRITE_CONTEXT: &str = "while writing rendered script";

pub(crate) type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub(crate) enum CliError {
    WriteFile { path: PathBuf, source: io::Error },
    Core(geoddl_core::Error),
    DialectNotEnabled(DialectId),
}

impl From<geoddl_core::Error> for CliError {
    fn from(value: geoddl_core::Error) -> Self {
        Self::Core(value)
    }
}

pub(crate) fn render_runtime_error(error: CliError) -> String {
    match error {
        CliError::WriteFile { path, source } => {
            let context = format!("{FILE_WRITE_CONTEXT} `{}`", path.display());
            let report = report_with_context(source, context);
            format!("[io] {report}")
        }
        CliError::Core(source) => {
            let category = core_category(&source);
            let report = report_with_context(source, GENERATION_CONTEXT);
            format!("[{category}] {report}")
        }
        CliError::DialectNotEnabled(dialect) => {
            format!("[config] {}", dialect_not_enabled_message(dialect))
        }
    }
}

fn report_with_context<E, C>(source: E, context: C) -> Report
where
    E: std::error::Error + Send + Sync + 'static,
    C: Into<String>,
{
    let context = context.into();
    let anyhow_error = std::result::Result::<(), E>::Err(source)
        .context(context)
        .expect_err("context wrapping must produce an error");
    miette::miette!("{anyhow_error:#}")
}

fn core_category(error: &geoddl_core::Error) -> &'static str {
    match error {
        geoddl_core::Error::Statement(_) => "statement",
        geoddl_core::Error::Generate(_) => "generate",
    }
}

fn dialect_not_enabled_message(dialect: DialectId) -> String {
    format!("dialect `{dialect}` is not enabled in this build; rebuild with `--features {dialect}`")
}
