//! Construction des features GeoJSON
//!
//! Toutes les features produites portent le même socle de propriétés:
//! `name`, `type`, `category`, `layer` en tête, les attributs métier ensuite,
//! puis `color`, `validFrom` et `validTo` (toujours `null`).

use geo::{LineString, Point, Polygon};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

/// Début de validité commun à toutes les features générées
pub const VALID_FROM: &str = "2024-01-01T00:00:00Z";

/// Catégorie, couche et couleur d'affichage d'une famille de features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStyle {
    pub category: &'static str,
    pub layer: &'static str,
    pub color: &'static str,
}

pub const PIEZOMETRES: LayerStyle = LayerStyle {
    category: "nappe_phreatique",
    layer: "Piézomètres",
    color: "#4169E1",
};

pub const RIVIERES: LayerStyle = LayerStyle {
    category: "cours_eau",
    layer: "Rivières",
    color: "#1E90FF",
};

pub const LACS: LayerStyle = LayerStyle {
    category: "plan_eau",
    layer: "Lacs et plans d'eau",
    color: "#00CED1",
};

pub const INFRASTRUCTURES: LayerStyle = LayerStyle {
    category: "infrastructure",
    layer: "Infrastructures",
    color: "#FFD700",
};

pub const STATIONS_QUALITE: LayerStyle = LayerStyle {
    category: "surveillance",
    layer: "Stations qualité eau",
    color: "#00FF00",
};

pub const STATIONS_HYDRO: LayerStyle = LayerStyle {
    category: "mesure_debit",
    layer: "Stations hydrométriques",
    color: "#0066CC",
};

pub const GRANDS_COURS_EAU: LayerStyle = LayerStyle {
    category: "cours_eau",
    layer: "Cours d'eau",
    color: "#0099FF",
};

pub const PLANS_EAU: LayerStyle = LayerStyle {
    category: "plan_eau",
    layer: "Plans d'eau",
    color: "#00CCFF",
};

/// Assemble une feature en respectant l'ordre des propriétés
pub struct FeatureBuilder {
    geometry: Geometry,
    style: LayerStyle,
    properties: JsonObject,
}

impl FeatureBuilder {
    pub fn new(
        geometry: Geometry,
        name: impl Into<String>,
        kind: impl Into<String>,
        style: LayerStyle,
    ) -> Self {
        let mut properties = JsonObject::new();
        properties.insert("name".into(), JsonValue::String(name.into()));
        properties.insert("type".into(), JsonValue::String(kind.into()));
        properties.insert("category".into(), style.category.into());
        properties.insert("layer".into(), style.layer.into());

        Self {
            geometry,
            style,
            properties,
        }
    }

    /// Ajoute un attribut métier
    pub fn prop(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn build(mut self) -> Feature {
        self.properties
            .insert("color".into(), self.style.color.into());
        self.properties.insert("validFrom".into(), VALID_FROM.into());
        self.properties.insert("validTo".into(), JsonValue::Null);

        Feature {
            bbox: None,
            geometry: Some(self.geometry),
            id: None,
            properties: Some(self.properties),
            foreign_members: None,
        }
    }
}

/// Point (longitude, latitude)
pub fn point(lon: f64, lat: f64) -> Geometry {
    Geometry::new(Value::from(&Point::new(lon, lat)))
}

/// LineString depuis une liste de (longitude, latitude)
pub fn line_string(coords: &[(f64, f64)]) -> Geometry {
    Geometry::new(Value::from(&LineString::from(coords.to_vec())))
}

/// Polygone sans trou depuis un anneau extérieur (fermé automatiquement)
pub fn polygon(ring: &[(f64, f64)]) -> Geometry {
    Geometry::new(Value::from(&Polygon::new(
        LineString::from(ring.to_vec()),
        vec![],
    )))
}

/// FeatureCollection sans bbox ni membres étrangers
pub fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Nom du type de géométrie GeoJSON
pub fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Vérifie que toutes les coordonnées de la feature sont des nombres finis
pub fn has_finite_coordinates(feature: &Feature) -> bool {
    feature
        .geometry
        .as_ref()
        .map_or(false, |g| value_is_finite(&g.value))
}

fn value_is_finite(value: &Value) -> bool {
    let position = |p: &Vec<f64>| p.len() >= 2 && p.iter().all(|c| c.is_finite());

    match value {
        Value::Point(p) => position(p),
        Value::MultiPoint(ps) | Value::LineString(ps) => ps.iter().all(position),
        Value::MultiLineString(ls) | Value::Polygon(ls) => ls.iter().flatten().all(position),
        Value::MultiPolygon(polys) => polys.iter().flatten().flatten().all(position),
        Value::GeometryCollection(geoms) => geoms.iter().all(|g| value_is_finite(&g.value)),
    }
}

/// Valeur texte d'une propriété (None si absente ou non textuelle)
pub fn property_str<'a>(feature: &'a Feature, key: &str) -> Option<&'a str> {
    feature.properties.as_ref()?.get(key)?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_property_order() {
        let feature = FeatureBuilder::new(point(7.75, 48.58), "Test", "Lac", LACS)
            .prop("surface_ha", 115)
            .build();

        let keys: Vec<_> = feature.properties.as_ref().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "type",
                "category",
                "layer",
                "surface_ha",
                "color",
                "validFrom",
                "validTo"
            ]
        );
    }

    #[test]
    fn test_builder_common_properties() {
        let feature = FeatureBuilder::new(point(6.0, 48.0), "Station", "Barrage", INFRASTRUCTURES)
            .build();
        let props = feature.properties.as_ref().unwrap();

        assert_eq!(props["category"], "infrastructure");
        assert_eq!(props["layer"], "Infrastructures");
        assert_eq!(props["color"], "#FFD700");
        assert_eq!(props["validFrom"], VALID_FROM);
        assert!(props["validTo"].is_null());
    }

    #[test]
    fn test_geometry_helpers() {
        let p = point(7.75, 48.58);
        assert_eq!(geometry_type(&p.value), "Point");
        assert_eq!(p.value, Value::Point(vec![7.75, 48.58]));

        let l = line_string(&[(4.0, 48.0), (4.5, 48.5)]);
        assert_eq!(geometry_type(&l.value), "LineString");
        assert_eq!(
            l.value,
            Value::LineString(vec![vec![4.0, 48.0], vec![4.5, 48.5]])
        );

        let ring = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];
        let poly = polygon(&ring);
        match &poly.value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 5);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("expected Polygon, got {}", geometry_type(other)),
        }
    }

    #[test]
    fn test_has_finite_coordinates() {
        let ok = FeatureBuilder::new(point(1.0, 2.0), "a", "b", LACS).build();
        assert!(has_finite_coordinates(&ok));

        let nan = FeatureBuilder::new(
            Geometry::new(Value::Point(vec![f64::NAN, 2.0])),
            "a",
            "b",
            LACS,
        )
        .build();
        assert!(!has_finite_coordinates(&nan));

        let short = FeatureBuilder::new(Geometry::new(Value::Point(vec![1.0])), "a", "b", LACS)
            .build();
        assert!(!has_finite_coordinates(&short));
    }

    #[test]
    fn test_property_str() {
        let feature = FeatureBuilder::new(point(1.0, 2.0), "Lac Blanc", "Lac", LACS)
            .prop("profondeur_max", 72)
            .build();
        assert_eq!(property_str(&feature, "name"), Some("Lac Blanc"));
        assert_eq!(property_str(&feature, "profondeur_max"), None);
        assert_eq!(property_str(&feature, "absent"), None);
    }
}
