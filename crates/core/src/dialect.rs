use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DialectId {
    Oracle,
    #[strum(to_string = "postgres", serialize = "postgresql")]
    Postgres,
    MySql,
    Sqlite,
    Mssql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Table,
    Column,
    Index,
}

/// Name handling the active database exposes to generators.
///
/// Implementations are read-only during generation and may be shared across
/// threads.
pub trait DialectContext: Send + Sync {
    fn dialect(&self) -> DialectId;

    /// Folds `name` to the form the database stores in its catalog views.
    fn correct_object_name(&self, name: &str, kind: ObjectKind) -> String;

    fn escape_index_name(&self, catalog: Option<&str>, schema: Option<&str>, name: &str)
    -> String;

    fn escape_table_name(&self, catalog: Option<&str>, schema: Option<&str>, name: &str)
    -> String;

    fn escape_column_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        column: &str,
    ) -> String;

    /// Tablespaces (filegroups on some products) are emitted verbatim unless
    /// the dialect needs them quoted.
    fn escape_tablespace_name(&self, name: &str) -> String {
        name.trim().to_string()
    }

    fn statement_terminator(&self) -> &str {
        ";"
    }

    fn batch_separator(&self) -> &str {
        ""
    }
}
