#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use geoddl_core::{
    AffectedObject, CreateSpatialIndex, DialectContext, DialectId, ObjectKind, ObjectName, Result,
    SpatialIndexGenerator, SqlFragment,
};

/// Double-quotes everything and uppercases corrected names.
#[derive(Debug, Clone, Copy)]
pub struct FakeContext {
    pub dialect: DialectId,
}

impl FakeContext {
    pub fn new(dialect: DialectId) -> Self {
        Self { dialect }
    }
}

impl DialectContext for FakeContext {
    fn dialect(&self) -> DialectId {
        self.dialect
    }

    fn correct_object_name(&self, name: &str, _kind: ObjectKind) -> String {
        name.trim().to_uppercase()
    }

    fn escape_index_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        name: &str,
    ) -> String {
        format!("\"{name}\"")
    }

    fn escape_table_name(
        &self,
        _catalog: Option<&str>,
        schema: Option<&str>,
        name: &str,
    ) -> String {
        match schema {
            Some(schema) => format!("\"{schema}\".\"{name}\""),
            None => format!("\"{name}\""),
        }
    }

    fn escape_column_name(
        &self,
        _catalog: Option<&str>,
        _schema: Option<&str>,
        _table: &str,
        column: &str,
    ) -> String {
        format!("\"{column}\"")
    }
}

/// Records every statement it is asked to generate.
#[derive(Debug, Clone)]
pub struct FakeGenerator {
    pub label: &'static str,
    pub dialects: Vec<DialectId>,
    pub priority: i32,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGenerator {
    pub fn new(label: &'static str, dialects: &[DialectId]) -> Self {
        Self {
            label,
            dialects: dialects.to_vec(),
            priority: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("fake generator mutex should lock")
            .clone()
    }
}

impl SpatialIndexGenerator for FakeGenerator {
    fn name(&self) -> &str {
        self.label
    }

    fn supports(&self, dialect: DialectId) -> bool {
        self.dialects.contains(&dialect)
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        statement.validate()?;
        self.calls
            .lock()
            .expect("fake generator mutex should lock")
            .push(statement.index_name().to_string());

        Ok(vec![SqlFragment::new(
            format!(
                "-- {} {}",
                self.label,
                context.escape_table_name(None, statement.table_schema(), statement.table_name())
            ),
            AffectedObject::Table(ObjectName::table_of(statement)),
        )])
    }
}
