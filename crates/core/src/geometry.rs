use std::{fmt, str::FromStr};

use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

/// OGC geometry type names a spatial index can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum OgcGeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    Curve,
    MultiCurve,
    Triangle,
    Geometry,
}

impl OgcGeometryType {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// A geometry type as supplied by the caller.
///
/// Parsing never fails: names outside the OGC vocabulary are kept verbatim in
/// [`GeometryType::Other`] so each dialect can decide how to degrade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Ogc(OgcGeometryType),
    Other(String),
}

impl GeometryType {
    /// Returns `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(
            OgcGeometryType::from_str(trimmed)
                .map(Self::Ogc)
                .unwrap_or_else(|_| Self::Other(trimmed.to_string())),
        )
    }

    #[must_use]
    pub fn ogc(&self) -> Option<OgcGeometryType> {
        match self {
            Self::Ogc(kind) => Some(*kind),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ogc(kind) => f.write_str(kind.as_ref()),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
