mod error_presentation;

use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use error_presentation::{CliError, CliResult, render_runtime_error};
use geoddl_core::{
    BoundingBox, CreateSpatialIndex, DialectContext, DialectId, GeneratorRegistry, QuotingPolicy,
    Renderer, parse_decimal,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Render the SQL that creates a spatial index on the target database.
#[derive(Debug, Parser)]
#[command(name = "geoddl", version)]
struct Cli {
    /// Target dialect: oracle, postgres, mysql, sqlite or mssql.
    dialect: DialectId,
    #[arg(long)]
    index: String,
    #[arg(long)]
    table: String,
    /// Indexed column; only the first one is used.
    #[arg(long = "column", required = true)]
    columns: Vec<String>,
    #[arg(long)]
    catalog: Option<String>,
    #[arg(long)]
    schema: Option<String>,
    #[arg(long)]
    tablespace: Option<String>,
    /// OGC geometry type, e.g. Point or MultiPolygon.
    #[arg(long)]
    geometry_type: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    srid: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    min_x: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    max_x: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    min_y: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    max_y: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    min_z: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    max_z: Option<String>,
    #[arg(long)]
    tolerance: Option<String>,
    /// Quote every identifier instead of only those that need it.
    #[arg(long)]
    quote_all: bool,
    /// Write the script to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", render_runtime_error(error));
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let statement = build_statement(cli)?;
    let context = dialect_context(cli.dialect, cli.quote_all)
        .ok_or(CliError::DialectNotEnabled(cli.dialect))?;
    let registry = build_registry();
    let generator = registry.select(cli.dialect, &statement)?;

    let fragments = generator.generate(&statement, context.as_ref())?;
    debug!(fragments = fragments.len(), "rendering spatial index script");
    let script = Renderer::new(context.as_ref()).render(&fragments);

    match &cli.output {
        Some(path) => fs::write(path, script).map_err(|source| CliError::WriteFile {
            path: path.clone(),
            source,
        }),
        None => {
            print!("{script}");
            Ok(())
        }
    }
}

fn build_statement(cli: &Cli) -> CliResult<CreateSpatialIndex> {
    let mut builder = CreateSpatialIndex::builder(&cli.index, &cli.table).columns(&cli.columns);

    if let Some(catalog) = &cli.catalog {
        builder = builder.catalog(catalog);
    }
    if let Some(schema) = &cli.schema {
        builder = builder.schema(schema);
    }
    if let Some(tablespace) = &cli.tablespace {
        builder = builder.tablespace(tablespace);
    }
    if let Some(geometry_type) = &cli.geometry_type {
        builder = builder.geometry_type(geometry_type);
    }
    if let Some(srid) = cli.srid {
        builder = builder.srid(srid);
    }
    if let Some(tolerance) = &cli.tolerance {
        builder = builder.tolerance(parse_decimal("tolerance", tolerance)?);
    }

    let decimal = |field: &str, value: &Option<String>| {
        value
            .as_deref()
            .map(|value| parse_decimal(field, value))
            .transpose()
    };
    let bounds = BoundingBox {
        min_x: decimal("min_x", &cli.min_x)?,
        max_x: decimal("max_x", &cli.max_x)?,
        min_y: decimal("min_y", &cli.min_y)?,
        max_y: decimal("max_y", &cli.max_y)?,
        min_z: decimal("min_z", &cli.min_z)?,
        max_z: decimal("max_z", &cli.max_z)?,
    };

    Ok(builder.bounding_box(bounds).build())
}

fn build_registry() -> GeneratorRegistry {
    #[allow(unused_mut)]
    let mut registry = GeneratorRegistry::new();
    #[cfg(feature = "oracle")]
    geoddl_dialect_oracle::register(&mut registry);
    #[cfg(feature = "postgres")]
    geoddl_dialect_postgres::register(&mut registry);
    #[cfg(feature = "mysql")]
    geoddl_dialect_mysql::register(&mut registry);
    #[cfg(feature = "sqlite")]
    geoddl_dialect_sqlite::register(&mut registry);
    #[cfg(feature = "mssql")]
    geoddl_dialect_mssql::register(&mut registry);
    registry
}

#[allow(unused_variables)]
fn dialect_context(dialect: DialectId, quote_all: bool) -> Option<Box<dyn DialectContext>> {
    let policy = quote_all.then_some(QuotingPolicy::Always);

    #[allow(unreachable_patterns)]
    let context: Box<dyn DialectContext> = match dialect {
        #[cfg(feature = "oracle")]
        DialectId::Oracle => Box::new(policy.map_or_else(
            geoddl_dialect_oracle::OracleDialect::new,
            geoddl_dialect_oracle::OracleDialect::with_quoting,
        )),
        #[cfg(feature = "postgres")]
        DialectId::Postgres => Box::new(policy.map_or_else(
            geoddl_dialect_postgres::PostgresDialect::new,
            geoddl_dialect_postgres::PostgresDialect::with_quoting,
        )),
        #[cfg(feature = "mysql")]
        DialectId::MySql => Box::new(policy.map_or_else(
            geoddl_dialect_mysql::MysqlDialect::new,
            geoddl_dialect_mysql::MysqlDialect::with_quoting,
        )),
        #[cfg(feature = "sqlite")]
        DialectId::Sqlite => Box::new(policy.map_or_else(
            geoddl_dialect_sqlite::SqliteDialect::new,
            geoddl_dialect_sqlite::SqliteDialect::with_quoting,
        )),
        #[cfg(feature = "mssql")]
        DialectId::Mssql => Box::new(policy.map_or_else(
            geoddl_dialect_mssql::MssqlDialect::new,
            geoddl_dialect_mssql::MssqlDialect::with_quoting,
        )),
        _ => return None,
    };

    Some(context)
}
