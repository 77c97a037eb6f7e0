use tracing::{debug, warn};

use crate::{
    CreateSpatialIndex, DialectContext, DialectId, GenerateError, Result, SpatialIndexGenerator,
    SqlFragment,
};

#[derive(Default)]
pub struct GeneratorRegistry {
    generators: Vec<Box<dyn SpatialIndexGenerator>>,
}

impl GeneratorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, generator: Box<dyn SpatialIndexGenerator>) -> &mut Self {
        self.generators.push(generator);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Highest priority wins; among equals the first registered is kept.
    #[must_use]
    pub fn find(&self, dialect: DialectId) -> Option<&dyn SpatialIndexGenerator> {
        let mut selected: Option<&dyn SpatialIndexGenerator> = None;
        for generator in self.generators.iter().map(Box::as_ref) {
            if !generator.supports(dialect) {
                continue;
            }
            if selected.is_none_or(|current| generator.priority() > current.priority()) {
                selected = Some(generator);
            }
        }
        selected
    }

    pub fn select(
        &self,
        dialect: DialectId,
        statement: &CreateSpatialIndex,
    ) -> Result<&dyn SpatialIndexGenerator> {
        let Some(generator) = self.find(dialect) else {
            warn!(
                %dialect,
                index = statement.index_name(),
                table = statement.table_name(),
                "no spatial index generator registered for dialect"
            );
            return Err(GenerateError::UnsupportedDialect {
                dialect: dialect.to_string(),
                index: statement.index_name().to_string(),
                table: statement.table_name().to_string(),
            }
            .into());
        };

        debug!(%dialect, generator = generator.name(), "selected spatial index generator");
        Ok(generator)
    }

    pub fn generate(
        &self,
        statement: &CreateSpatialIndex,
        context: &dyn DialectContext,
    ) -> Result<Vec<SqlFragment>> {
        let generator = self.select(context.dialect(), statement)?;
        generator.generate(statement, context)
    }
}
