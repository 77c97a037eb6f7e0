use std::fmt;

use crate::CreateSpatialIndex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl ObjectName {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            catalog: None,
            schema: None,
            name: name.into(),
        }
    }

    /// The table a spatial index statement targets.
    pub fn table_of(statement: &CreateSpatialIndex) -> Self {
        Self {
            catalog: statement.table_catalog().map(str::to_string),
            schema: statement.table_schema().map(str::to_string),
            name: statement.table_name().to_string(),
        }
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prefix in [&self.catalog, &self.schema].into_iter().flatten() {
            write!(f, "{prefix}.")?;
        }
        f.write_str(&self.name)
    }
}

/// The database object a fragment touches, used by hosts for impact tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AffectedObject {
    View(ObjectName),
    Table(ObjectName),
    Index { index: ObjectName, table: ObjectName },
}

impl AffectedObject {
    pub fn index_of(statement: &CreateSpatialIndex) -> Self {
        let table = ObjectName::table_of(statement);
        Self::Index {
            index: ObjectName {
                name: statement.index_name().to_string(),
                ..table.clone()
            },
            table,
        }
    }
}

/// One SQL statement, to be executed verbatim and in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFragment {
    pub sql: String,
    pub affected: AffectedObject,
}

impl SqlFragment {
    pub fn new(sql: impl Into<String>, affected: AffectedObject) -> Self {
        Self {
            sql: sql.into(),
            affected,
        }
    }
}
