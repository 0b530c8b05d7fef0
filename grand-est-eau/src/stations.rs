//! Conversion des stations Hub'Eau en features
//!
//! Une station sans paire de coordonnées finies ne produit pas de feature.

use geojson::Feature;
use hubeau::{HydroStationRecord, Numeric, PiezometreRecord, QualiteStationRecord, StationRecord};
use tracing::debug;

use crate::feature::{point, FeatureBuilder, PIEZOMETRES, STATIONS_HYDRO, STATIONS_QUALITE};

/// Profondeur d'investigation retenue quand Hub'Eau n'en fournit pas (m)
pub const DEFAULT_PROFONDEUR: f64 = 10.0;

/// Features issues d'un lot de stations
#[derive(Debug, Default)]
pub struct Mapped {
    pub features: Vec<Feature>,
    /// Stations ignorées faute de coordonnées
    pub skipped: usize,
}

/// Convertit un lot de stations, en comptant celles sans coordonnées
pub fn map_records<T, F>(records: &[T], to_feature: F) -> Mapped
where
    T: StationRecord,
    F: Fn(&T) -> Option<Feature>,
{
    let mut mapped = Mapped::default();

    for record in records {
        match to_feature(record) {
            Some(feature) => mapped.features.push(feature),
            None => {
                debug!(station = %record.label(), "No coordinates, station skipped");
                mapped.skipped += 1;
            }
        }
    }

    mapped
}

fn text(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn text_or(value: &Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Piézomètre (nappe phréatique)
pub fn piezometre(record: &PiezometreRecord) -> Option<Feature> {
    let (lon, lat) = record.coordinates()?;

    let commune = text(&record.nom_commune);
    let code_bss = text(&record.code_bss);
    let name = format!(
        "{} - Piézomètre {}",
        if commune.is_empty() { "Unknown" } else { commune.as_str() },
        code_bss
    );

    let altitude_sol = record
        .altitude_station
        .as_ref()
        .map(Numeric::to_text)
        .unwrap_or_default();
    let profondeur = record
        .profondeur_investigation
        .as_ref()
        .and_then(Numeric::as_f64)
        .unwrap_or(DEFAULT_PROFONDEUR);

    let mut builder = FeatureBuilder::new(point(lon, lat), name, "Piézomètre", PIEZOMETRES)
        .prop("commune", commune)
        .prop("departement", text_or(&record.nom_departement, "Grand Est"))
        .prop("code_bss", code_bss)
        .prop("altitude_sol", altitude_sol)
        .prop("date_debut", text(&record.date_debut_mesure))
        .prop("profondeur", profondeur);

    if let Some(nappe) = record.libelle_pe.as_deref().filter(|s| !s.trim().is_empty()) {
        builder = builder.prop("nappe", nappe.trim());
    }

    Some(builder.build())
}

/// Station hydrométrique (mesure de débit)
pub fn station_hydro(record: &HydroStationRecord) -> Option<Feature> {
    let (lon, lat) = record.coordinates()?;

    let altitude = record
        .altitude_ref_alti_station
        .as_ref()
        .and_then(Numeric::as_f64)
        .unwrap_or(0.0);

    Some(
        FeatureBuilder::new(
            point(lon, lat),
            text_or(&record.libelle_station, "Station hydro inconnue"),
            "station_hydrometrie",
            STATIONS_HYDRO,
        )
        .prop("code_station", text(&record.code_station))
        .prop("commune", text(&record.libelle_commune))
        .prop("departement", text(&record.libelle_departement))
        .prop("cours_eau", text(&record.libelle_cours_eau))
        .prop("bassin", text(&record.libelle_bassin))
        .prop("altitude", altitude)
        .prop("en_service", record.en_service.unwrap_or(true))
        .build(),
    )
}

/// Station de surveillance de la qualité des cours d'eau
pub fn station_qualite(record: &QualiteStationRecord) -> Option<Feature> {
    let (lon, lat) = record.coordinates()?;

    Some(
        FeatureBuilder::new(
            point(lon, lat),
            text_or(&record.libelle_station, "Station inconnue"),
            "station_qualite",
            STATIONS_QUALITE,
        )
        .prop("code_station", text(&record.code_station))
        .prop("commune", text(&record.libelle_commune))
        .prop("code_commune", text(&record.code_commune))
        .prop("departement", text(&record.libelle_departement))
        .prop("cours_eau", text(&record.libelle_cours_eau))
        .prop("bassin", text(&record.libelle_bassin))
        .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{has_finite_coordinates, property_str};
    use geojson::Value;

    fn piezo(json: &str) -> PiezometreRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_piezometre_mapping() {
        let record = piezo(
            r#"{"code_bss":"02715X0045/P1","nom_commune":"Colmar","nom_departement":"Haut-Rhin",
                "altitude_station":"190","date_debut_mesure":"1972-03-01",
                "profondeur_investigation":18.5,"x":7.36,"y":48.08}"#,
        );

        let feature = piezometre(&record).unwrap();
        assert!(has_finite_coordinates(&feature));
        assert_eq!(
            feature.geometry.as_ref().unwrap().value,
            Value::Point(vec![7.36, 48.08])
        );

        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props["name"], "Colmar - Piézomètre 02715X0045/P1");
        assert_eq!(props["type"], "Piézomètre");
        assert_eq!(props["category"], "nappe_phreatique");
        assert_eq!(props["layer"], "Piézomètres");
        assert_eq!(props["departement"], "Haut-Rhin");
        assert_eq!(props["altitude_sol"], "190");
        assert_eq!(props["profondeur"], 18.5);
        assert_eq!(props["color"], "#4169E1");
        assert!(props["validTo"].is_null());
        assert!(props.get("nappe").is_none());
    }

    #[test]
    fn test_piezometre_defaults() {
        let record = piezo(r#"{"geometry_x":"5.14","geometry_y":"48.11"}"#);
        let feature = piezometre(&record).unwrap();
        let props = feature.properties.as_ref().unwrap();

        assert_eq!(props["name"], "Unknown - Piézomètre ");
        assert_eq!(props["departement"], "Grand Est");
        assert_eq!(props["altitude_sol"], "");
        assert_eq!(props["profondeur"], DEFAULT_PROFONDEUR);
    }

    #[test]
    fn test_piezometre_altitude_number_kept_as_text() {
        let record = piezo(r#"{"code_bss":"X","altitude_station":245,"x":6.0,"y":48.0}"#);
        let feature = piezometre(&record).unwrap();
        assert_eq!(property_str(&feature, "altitude_sol"), Some("245"));
    }

    #[test]
    fn test_piezometre_nappe() {
        let record = piezo(
            r#"{"code_bss":"X","libelle_pe":"Nappe d'Alsace","x":7.5,"y":48.2}"#,
        );
        let feature = piezometre(&record).unwrap();
        assert_eq!(property_str(&feature, "nappe"), Some("Nappe d'Alsace"));
    }

    #[test]
    fn test_map_records_skips_missing_coordinates() {
        let records = vec![
            piezo(r#"{"code_bss":"A","x":6.1,"y":49.1}"#),
            piezo(r#"{"code_bss":"B","x":6.1}"#),
            piezo(r#"{"code_bss":"C","x":"abc","y":"49.0"}"#),
            piezo(r#"{"code_bss":"D","x":6.2,"y":49.2}"#),
        ];

        let mapped = map_records(&records, piezometre);
        assert_eq!(mapped.features.len(), 2);
        assert_eq!(mapped.skipped, 2);
    }

    #[test]
    fn test_station_hydro_mapping() {
        let record: HydroStationRecord = serde_json::from_str(
            r#"{"code_station":"A5431010","libelle_station":"La Meurthe à Nancy",
                "libelle_commune":"Nancy","longitude_station":6.2,"latitude_station":48.7}"#,
        )
        .unwrap();

        let feature = station_hydro(&record).unwrap();
        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props["name"], "La Meurthe à Nancy");
        assert_eq!(props["type"], "station_hydrometrie");
        assert_eq!(props["layer"], "Stations hydrométriques");
        assert_eq!(props["altitude"], 0.0);
        assert_eq!(props["en_service"], true);
    }

    #[test]
    fn test_station_qualite_default_name() {
        let record: QualiteStationRecord = serde_json::from_str(
            r#"{"code_station":"02082000","longitude_station":"4.9","latitude_station":"49.7"}"#,
        )
        .unwrap();

        let feature = station_qualite(&record).unwrap();
        assert_eq!(property_str(&feature, "name"), Some("Station inconnue"));
        assert_eq!(property_str(&feature, "category"), Some("surveillance"));
        assert_eq!(property_str(&feature, "color"), Some("#00FF00"));
    }

    #[test]
    fn test_station_without_coordinates() {
        let record = QualiteStationRecord::default();
        assert!(station_qualite(&record).is_none());
        assert!(station_hydro(&HydroStationRecord::default()).is_none());
        assert!(piezometre(&PiezometreRecord::default()).is_none());
    }
}
