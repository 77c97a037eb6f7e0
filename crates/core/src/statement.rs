use std::fmt;

use rust_decimal::Decimal;

use crate::{GeometryType, Result, StatementError};

/// Coordinate bounds of the indexed geometries.
///
/// All members are optional; [`CreateSpatialIndex::validate`] enforces that
/// z bounds come in pairs and that any bound is accompanied by a tolerance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: Option<Decimal>,
    pub max_x: Option<Decimal>,
    pub min_y: Option<Decimal>,
    pub max_y: Option<Decimal>,
    pub min_z: Option<Decimal>,
    pub max_z: Option<Decimal>,
}

impl BoundingBox {
    #[must_use]
    pub fn xy(min_x: Decimal, max_x: Decimal, min_y: Decimal, max_y: Decimal) -> Self {
        Self {
            min_x: Some(min_x),
            max_x: Some(max_x),
            min_y: Some(min_y),
            max_y: Some(max_y),
            min_z: None,
            max_z: None,
        }
    }

    #[must_use]
    pub fn with_z(mut self, min_z: Decimal, max_z: Decimal) -> Self {
        self.min_z = Some(min_z);
        self.max_z = Some(max_z);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates().iter().all(Option::is_none)
    }

    /// The X/Y extent when all four planar bounds are present.
    #[must_use]
    pub fn planar_extent(&self) -> Option<(Decimal, Decimal, Decimal, Decimal)> {
        Some((self.min_x?, self.min_y?, self.max_x?, self.max_y?))
    }

    fn coordinates(&self) -> [Option<Decimal>; 6] {
        [
            self.min_x, self.max_x, self.min_y, self.max_y, self.min_z, self.max_z,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        })
    }
}

/// Valid range and precision of one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionElement {
    pub axis: Axis,
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub tolerance: Option<Decimal>,
}

/// A request to create a spatial index over the first of `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSpatialIndex {
    index_name: String,
    table_catalog: Option<String>,
    table_schema: Option<String>,
    table_name: String,
    columns: Vec<String>,
    tablespace: Option<String>,
    geometry_type: Option<GeometryType>,
    srid: Option<i32>,
    bounds: BoundingBox,
    tolerance: Option<Decimal>,
}

impl CreateSpatialIndex {
    pub fn builder(
        index_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> CreateSpatialIndexBuilder {
        CreateSpatialIndexBuilder::new(index_name, table_name)
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn table_catalog(&self) -> Option<&str> {
        self.table_catalog.as_deref()
    }

    pub fn table_schema(&self) -> Option<&str> {
        self.table_schema.as_deref()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The indexed column. Call [`Self::validate`] first; an empty column
    /// list yields `None`.
    pub fn first_column(&self) -> Option<&str> {
        self.columns.first().map(String::as_str)
    }

    pub fn tablespace(&self) -> Option<&str> {
        self.tablespace.as_deref()
    }

    pub fn geometry_type(&self) -> Option<&GeometryType> {
        self.geometry_type.as_ref()
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn tolerance(&self) -> Option<Decimal> {
        self.tolerance
    }

    /// X and Y always, Z only when both z bounds are present. Every element
    /// shares the statement tolerance.
    #[must_use]
    pub fn dimension_elements(&self) -> Vec<DimensionElement> {
        let bounds = &self.bounds;
        let mut elements = vec![
            self.dimension(Axis::X, bounds.min_x, bounds.max_x),
            self.dimension(Axis::Y, bounds.min_y, bounds.max_y),
        ];
        if bounds.min_z.is_some() && bounds.max_z.is_some() {
            elements.push(self.dimension(Axis::Z, bounds.min_z, bounds.max_z));
        }
        elements
    }

    pub fn validate(&self) -> Result<()> {
        if self.index_name.trim().is_empty() {
            return Err(StatementError::MissingIndexName {
                table: self.table_name.clone(),
            }
            .into());
        }
        if self.table_name.trim().is_empty() {
            return Err(StatementError::MissingTableName {
                index: self.index_name.clone(),
            }
            .into());
        }
        if self.columns.is_empty() {
            return Err(StatementError::EmptyColumns {
                index: self.index_name.clone(),
                table: self.table_name.clone(),
            }
            .into());
        }
        if let Some(position) = self.columns.iter().position(|column| column.trim().is_empty()) {
            return Err(StatementError::BlankColumn {
                index: self.index_name.clone(),
                table: self.table_name.clone(),
                position,
            }
            .into());
        }

        match (self.bounds.min_z, self.bounds.max_z) {
            (Some(_), None) => return Err(self.partial_z("min_z", "max_z")),
            (None, Some(_)) => return Err(self.partial_z("max_z", "min_z")),
            _ => {}
        }

        if !self.bounds.is_empty() && self.tolerance.is_none() {
            return Err(StatementError::MissingTolerance {
                index: self.index_name.clone(),
                table: self.table_name.clone(),
            }
            .into());
        }

        Ok(())
    }

    fn dimension(
        &self,
        axis: Axis,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> DimensionElement {
        DimensionElement {
            axis,
            min,
            max,
            tolerance: self.tolerance,
        }
    }

    fn partial_z(&self, present: &'static str, missing: &'static str) -> crate::Error {
        StatementError::PartialZBounds {
            index: self.index_name.clone(),
            table: self.table_name.clone(),
            present,
            missing,
        }
        .into()
    }
}

#[derive(Debug, Clone)]
pub struct CreateSpatialIndexBuilder {
    inner: CreateSpatialIndex,
}

impl CreateSpatialIndexBuilder {
    pub fn new(index_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            inner: CreateSpatialIndex {
                index_name: index_name.into(),
                table_catalog: None,
                table_schema: None,
                table_name: table_name.into(),
                columns: Vec::new(),
                tablespace: None,
                geometry_type: None,
                srid: None,
                bounds: BoundingBox::default(),
                tolerance: None,
            },
        }
    }

    #[must_use]
    pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
        self.inner.table_catalog = Some(catalog.into());
        self
    }

    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.inner.table_schema = Some(schema.into());
        self
    }

    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.inner.columns.push(column.into());
        self
    }

    /// Copies `columns` into the statement; the caller's collection is not
    /// retained.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner
            .columns
            .extend(columns.into_iter().map(|column| column.as_ref().to_string()));
        self
    }

    #[must_use]
    pub fn tablespace(mut self, tablespace: impl Into<String>) -> Self {
        self.inner.tablespace = Some(tablespace.into());
        self
    }

    /// Blank names leave the geometry type unset.
    #[must_use]
    pub fn geometry_type(mut self, geometry_type: &str) -> Self {
        self.inner.geometry_type = GeometryType::parse(geometry_type);
        self
    }

    #[must_use]
    pub fn srid(mut self, srid: i32) -> Self {
        self.inner.srid = Some(srid);
        self
    }

    #[must_use]
    pub fn bounding_box(mut self, bounds: BoundingBox) -> Self {
        self.inner.bounds = bounds;
        self
    }

    #[must_use]
    pub fn tolerance(mut self, tolerance: Decimal) -> Self {
        self.inner.tolerance = Some(tolerance);
        self
    }

    #[must_use]
    pub fn build(self) -> CreateSpatialIndex {
        self.inner
    }
}

/// Parses a decimal literal keeping its scale, so `0.0050000` renders back
/// unchanged.
pub fn parse_decimal(field: &str, value: &str) -> Result<Decimal> {
    value.trim().parse::<Decimal>().map_err(|_| {
        StatementError::InvalidDecimal {
            field: field.to_string(),
            value: value.to_string(),
        }
        .into()
    })
}
