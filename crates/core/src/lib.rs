mod config;
mod dialect;
mod error;
mod fragment;
mod generator;
mod geometry;
mod registry;
mod renderer;
mod statement;

pub use config::{IdentifierRules, NameCase, Qualification, QuoteStyle, QuotingPolicy};
pub use dialect::{DialectContext, DialectId, ObjectKind};
pub use error::{Error, GenerateError, Result, StatementError};
pub use fragment::{AffectedObject, ObjectName, SqlFragment};
pub use generator::{DEFAULT_PRIORITY, SpatialIndexGenerator};
pub use geometry::{GeometryType, OgcGeometryType};
pub use registry::GeneratorRegistry;
pub use renderer::Renderer;
pub use rust_decimal::Decimal;
pub use statement::{
    Axis, BoundingBox, CreateSpatialIndex, CreateSpatialIndexBuilder, DimensionElement,
    parse_decimal,
};
