use geoddl_core::{GeometryType, OgcGeometryType};
use tracing::debug;

const FALLBACK_GTYPE: &str = "COLLECTION";

/// Maps an OGC geometry type to the `layer_gtype` index parameter.
///
/// Unrecognised names degrade to `COLLECTION` rather than failing.
#[must_use]
pub fn layer_gtype(geometry_type: &GeometryType) -> String {
    let Some(kind) = geometry_type.ogc() else {
        debug!(%geometry_type, "unmapped geometry type, using {FALLBACK_GTYPE}");
        return FALLBACK_GTYPE.to_string();
    };

    match kind {
        OgcGeometryType::LineString => "LINE".to_string(),
        OgcGeometryType::MultiLineString => "MULTILINE".to_string(),
        OgcGeometryType::Triangle => "POLYGON".to_string(),
        OgcGeometryType::Point
        | OgcGeometryType::MultiPoint
        | OgcGeometryType::Curve
        | OgcGeometryType::MultiCurve
        | OgcGeometryType::Polygon
        | OgcGeometryType::MultiPolygon => kind.as_ref().to_uppercase(),
        OgcGeometryType::Geometry => FALLBACK_GTYPE.to_string(),
    }
}
