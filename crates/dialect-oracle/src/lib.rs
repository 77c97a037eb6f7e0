mod generator;
mod gtype;

use geoddl_core::{
    DialectContext, DialectId, GeneratorRegistry, IdentifierRules, NameCase, ObjectKind,
    Qualification, QuoteStyle, QuotingPolicy,
};

pub use generator::{METADATA_VIEW, OracleSpatialIndexGenerator, SPATIAL_INDEX_TYPE};
pub use gtype::layer_gtype;

const RESERVED_WORDS: &[&str] = &[
    "ACCESS", "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUDIT", "BETWEEN", "BY", "CHAR",
    "CHECK", "CLUSTER", "COLUMN", "COMMENT", "COMPRESS", "CONNECT", "CREATE", "CURRENT", "DATE",
    "DECIMAL", "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "EXCLUSIVE", "EXISTS",
    "FILE", "FLOAT", "FOR", "FROM", "GRANT", "GROUP", "HAVING", "IDENTIFIED", "IMMEDIATE", "IN",
    "INCREMENT", "INDEX", "INITIAL", "INSERT", "INTEGER", "INTERSECT", "INTO", "IS", "LEVEL",
    "LIKE", "LOCK", "LONG", "MAXEXTENTS", "MINUS", "MODE", "MODIFY", "NOAUDIT", "NOCOMPRESS",
    "NOT", "NOWAIT", "NULL", "NUMBER", "OF", "OFFLINE", "ON", "ONLINE", "OPTION", "OR", "ORDER",
    "PCTFREE", "PRIOR", "PUBLIC", "RAW", "RENAME", "RESOURCE", "REVOKE", "ROW", "ROWID",
    "ROWNUM", "ROWS", "SELECT", "SESSION", "SET", "SHARE", "SIZE", "SMALLINT", "START",
    "SUCCESSFUL", "SYNONYM", "SYSDATE", "TABLE", "THEN", "TO", "TRIGGER", "UID", "UNION",
    "UNIQUE", "UPDATE", "USER", "VALIDATE", "VALUES", "VARCHAR", "VARCHAR2", "VIEW", "WHENEVER",
    "WHERE", "WITH",
];

pub const IDENTIFIER_RULES: IdentifierRules = IdentifierRules {
    case: NameCase::Upper,
    quotes: QuoteStyle::DoubleQuote,
    policy: QuotingPolicy::WhenNeeded,
    qualification: Qualification::CatalogAsSchema,
    reserved: RESERVED_WORDS,
};

#[derive(Debug, Clone, Copy)]
pub struct OracleDialect {
    rules: IdentifierRules,
}

impl Default for OracleDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl OracleDialect {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: IDENTIFIER_RULES,
        }
    }

    #[must_use]
    pub const fn with_quoting(policy: QuotingPolicy) -> Self {
        Self {
            rules: IDENTIFIER_RULES.with_policy(policy),
        }
    }
}

impl DialectContext for OracleDialect {
    fn dialect(&self) -> DialectId {
        DialectId::Oracle
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        self.rules.correct(name)
    }

    fn escape_index_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.qualify(catalog, schema, name)
    }

    fn escape_table_name(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        self.rules.qualify(catalog, schema, name)
    }

    fn escape_column_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
        column: &str,
    ) -> String {
        self.rules.quote(column)
    }
}

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(Box::new(OracleSpatialIndexGenerator));
}
