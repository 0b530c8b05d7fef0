//! Conversion des exports Hub'Eau enregistrés sur disque
//!
//! Chaque fichier est optionnel. Ordre des features: stations qualité,
//! stations hydrométriques, piézomètres, grands cours d'eau, plans d'eau.

use std::path::{Path, PathBuf};
use std::time::Instant;

use geojson::{Feature, FeatureCollection};
use hubeau::{read_export, StationRecord};
use tracing::{info, warn};

use crate::datasets;
use crate::feature::collection;
use crate::report::{GenerationReport, PointsOrigin};
use crate::stations::{self, map_records};

/// Fichiers d'entrée de la conversion
#[derive(Debug, Clone, Default)]
pub struct StationFiles {
    pub qualite: Option<PathBuf>,
    pub hydro: Option<PathBuf>,
    pub piezo: Option<PathBuf>,
}

/// Résultat d'une conversion
#[derive(Debug)]
pub struct Conversion {
    pub collection: FeatureCollection,
    pub report: GenerationReport,
}

/// Lit un export et convertit ses stations
///
/// Un fichier absent est ignoré; un fichier illisible est compté en échec.
fn load_layer<T, F>(
    path: Option<&Path>,
    label: &str,
    to_feature: F,
    report: &mut GenerationReport,
) -> Vec<Feature>
where
    T: StationRecord,
    F: Fn(&T) -> Option<Feature>,
{
    let Some(path) = path else {
        return Vec::new();
    };

    if !path.exists() {
        println!("- {} file not found, skipped: {}", label, path.display());
        return Vec::new();
    }

    match read_export::<T>(path) {
        Ok(records) => {
            let mapped = map_records(&records, to_feature);
            println!("✓ {} {} added", mapped.features.len(), label);
            info!(
                path = %path.display(),
                records = records.len(),
                skipped = mapped.skipped,
                "Station file converted"
            );
            report.record_source_success();
            report.record_skipped(mapped.skipped);
            mapped.features
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Station file unreadable");
            report.record_source_failure(&path.display().to_string(), &e.to_string());
            Vec::new()
        }
    }
}

/// Construit la collection à partir des fichiers de stations
pub fn convert(files: &StationFiles) -> Conversion {
    let start = Instant::now();
    let mut report = GenerationReport::new(PointsOrigin::LocalFiles);
    let mut features = Vec::new();

    features.extend(load_layer(
        files.qualite.as_deref(),
        "water quality stations",
        stations::station_qualite,
        &mut report,
    ));
    features.extend(load_layer(
        files.hydro.as_deref(),
        "hydrometric stations",
        stations::station_hydro,
        &mut report,
    ));
    features.extend(load_layer(
        files.piezo.as_deref(),
        "piezometers",
        stations::piezometre,
        &mut report,
    ));

    let cours_eau = datasets::grands_cours_eau();
    println!("✓ {} major rivers added", cours_eau.len());
    features.extend(cours_eau);

    let plans_eau = datasets::emprises_lacs();
    println!("✓ {} lake footprints added", plans_eau.len());
    features.extend(plans_eau);

    report.record_features(&features);
    report.set_duration(start.elapsed());
    report.finalize();

    Conversion {
        collection: collection(features),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{geometry_type, property_str};
    use crate::report::RunStatus;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_convert_without_files() {
        let conversion = convert(&StationFiles::default());
        let features = &conversion.collection.features;

        assert_eq!(features.len(), 7 + 3);
        assert_eq!(conversion.report.status, RunStatus::Success);
        assert_eq!(conversion.report.origin, PointsOrigin::LocalFiles);
        assert_eq!(property_str(&features[0], "layer"), Some("Cours d'eau"));
        assert_eq!(
            geometry_type(&features[9].geometry.as_ref().unwrap().value),
            "Polygon"
        );
    }

    #[test]
    fn test_convert_station_files() {
        let qualite = write_temp(
            "grand_est_eau_convert_qualite.json",
            r#"{"count":2,"data":[
                {"code_station":"02082000","libelle_station":"La Meuse à Sedan","longitude_station":4.94,"latitude_station":49.70},
                {"code_station":"02099999","libelle_station":"Sans position"}
            ]}"#,
        );
        let hydro = write_temp(
            "grand_est_eau_convert_hydro.json",
            r#"{"data":[{"code_station":"A6051020","libelle_station":"La Moselle à Toul",
                "longitude_station":"5.89","latitude_station":"48.68","en_service":false}]}"#,
        );

        let conversion = convert(&StationFiles {
            qualite: Some(qualite.clone()),
            hydro: Some(hydro.clone()),
            piezo: Some(std::env::temp_dir().join("grand_est_eau_convert_absent.json")),
        });
        let features = &conversion.collection.features;

        assert_eq!(features.len(), 1 + 1 + 7 + 3);
        assert_eq!(property_str(&features[0], "type"), Some("station_qualite"));
        assert_eq!(property_str(&features[1], "type"), Some("station_hydrometrie"));
        assert_eq!(features[1].properties.as_ref().unwrap()["en_service"], false);
        assert_eq!(conversion.report.sources_ok, 2);
        assert_eq!(conversion.report.stations_skipped, 1);

        std::fs::remove_file(qualite).ok();
        std::fs::remove_file(hydro).ok();
    }

    #[test]
    fn test_convert_unreadable_file_is_partial() {
        let broken = write_temp("grand_est_eau_convert_broken.json", "{not json");

        let conversion = convert(&StationFiles {
            piezo: Some(broken.clone()),
            ..Default::default()
        });

        assert_eq!(conversion.report.failures.len(), 1);
        assert_eq!(conversion.report.status, RunStatus::PartialSuccess);
        assert_eq!(conversion.collection.features.len(), 10);

        std::fs::remove_file(broken).ok();
    }
}
