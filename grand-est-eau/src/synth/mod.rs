//! Génération de la FeatureCollection du Grand Est
//!
//! Ordre des features: piézomètres (Hub'Eau ou synthétiques), rivières,
//! lacs, infrastructures. Le repli synthétique ne se déclenche que si
//! aucun département n'a fourni de station exploitable.

pub mod synthetic;

use std::time::Instant;

use geojson::{Feature, FeatureCollection};
use hubeau::PiezometreSource;
use rand::Rng;
use tracing::{info, warn};

use crate::datasets;
use crate::feature::collection;
use crate::report::{GenerationReport, PointsOrigin};
use crate::stations::{self, map_records};

pub use synthetic::{synthetic_piezometres, synthetic_piezometres_for};

/// Résultat d'une génération
#[derive(Debug)]
pub struct Generation {
    pub collection: FeatureCollection,
    pub report: GenerationReport,
}

/// Interroge chaque département l'un après l'autre
///
/// Un département en échec est journalisé et ne contribue aucune feature;
/// il n'interrompt jamais la boucle.
pub fn fetch_piezometres(
    source: &dyn PiezometreSource,
    departements: &[String],
    report: &mut GenerationReport,
) -> Vec<Feature> {
    let mut features = Vec::new();

    for dep in departements {
        match source.piezometres(dep) {
            Ok(records) => {
                let mapped = map_records(&records, stations::piezometre);
                info!(
                    departement = %dep,
                    stations = records.len(),
                    features = mapped.features.len(),
                    "Piezometers fetched"
                );
                report.record_source_success();
                report.record_skipped(mapped.skipped);
                features.extend(mapped.features);
            }
            Err(e) => {
                warn!(departement = %dep, error = %e, "Departement fetch failed");
                report.record_source_failure(dep, &e.to_string());
            }
        }
    }

    features
}

/// Construit la collection complète
///
/// `source = None` (mode hors ligne) passe directement au repli synthétique.
pub fn generate<R: Rng + ?Sized>(
    source: Option<&dyn PiezometreSource>,
    departements: &[String],
    rng: &mut R,
) -> Generation {
    let start = Instant::now();
    let mut report = GenerationReport::new(PointsOrigin::Remote);

    let mut features = match source {
        Some(source) => {
            println!("Fetching Hub'Eau piezometers ({} departements)...", departements.len());
            fetch_piezometres(source, departements, &mut report)
        }
        None => Vec::new(),
    };

    if features.is_empty() {
        println!("✗ No Hub'Eau data, generating synthetic piezometers...");
        report.origin = PointsOrigin::Synthetic;
        features = synthetic_piezometres(rng);
        println!("✓ {} synthetic piezometers created", features.len());
    } else {
        println!("✓ {} piezometers fetched", features.len());
    }

    let rivieres = datasets::rivieres();
    println!("✓ {} rivers added", rivieres.len());
    features.extend(rivieres);

    let lacs = datasets::lacs();
    println!("✓ {} lakes added", lacs.len());
    features.extend(lacs);

    let infrastructures = datasets::infrastructures();
    println!("✓ {} infrastructures added", infrastructures.len());
    features.extend(infrastructures);

    report.record_features(&features);
    report.set_duration(start.elapsed());
    report.finalize();

    Generation {
        collection: collection(features),
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::{geometry_type, has_finite_coordinates, property_str, VALID_FROM};
    use crate::report::RunStatus;
    use hubeau::{HubEauError, PiezometreRecord};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Source en mémoire: un département → résultat
    struct FakeSource(Vec<(&'static str, Result<Vec<PiezometreRecord>, u16>)>);

    impl PiezometreSource for FakeSource {
        fn piezometres(&self, departement: &str) -> Result<Vec<PiezometreRecord>, HubEauError> {
            match self.0.iter().find(|(d, _)| *d == departement) {
                Some((_, Ok(records))) => Ok(records.clone()),
                Some((_, Err(status))) => Err(HubEauError::Status {
                    status: *status,
                    url: format!("fake://{}", departement),
                }),
                None => Ok(Vec::new()),
            }
        }
    }

    fn record(code: &str, lon: f64, lat: f64) -> PiezometreRecord {
        serde_json::from_value(serde_json::json!({
            "code_bss": code,
            "nom_commune": "Metz",
            "x": lon,
            "y": lat,
        }))
        .unwrap()
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_failed_departement_does_not_abort_batch() {
        let source = FakeSource(vec![
            ("54", Err(500)),
            ("57", Ok(vec![record("A", 6.18, 49.12), record("B", 6.20, 49.10)])),
        ]);
        let mut rng = StdRng::seed_from_u64(1);

        let generation = generate(Some(&source), &codes(&["54", "57"]), &mut rng);
        let report = &generation.report;

        assert_eq!(report.origin, PointsOrigin::Remote);
        assert_eq!(report.sources_ok, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].source, "54");
        assert_eq!(report.status, RunStatus::PartialSuccess);

        // 2 piézomètres + 10 rivières + 15 lacs + 20 infrastructures
        assert_eq!(generation.collection.features.len(), 2 + 10 + 15 + 20);
    }

    #[test]
    fn test_no_partial_synthetic_backfill() {
        // Un seul département répond: aucun point synthétique ne doit compléter les autres
        let source = FakeSource(vec![
            ("08", Err(503)),
            ("10", Err(503)),
            ("67", Ok(vec![record("C", 7.75, 48.58)])),
        ]);
        let mut rng = StdRng::seed_from_u64(2);

        let generation = generate(Some(&source), &codes(&["08", "10", "67"]), &mut rng);
        let piezos: Vec<_> = generation
            .collection
            .features
            .iter()
            .filter(|f| property_str(f, "layer") == Some("Piézomètres"))
            .collect();

        assert_eq!(piezos.len(), 1);
        assert_eq!(generation.report.origin, PointsOrigin::Remote);
    }

    #[test]
    fn test_fallback_when_all_departements_fail() {
        let source = FakeSource(vec![("08", Err(500)), ("10", Err(404))]);
        let mut rng = StdRng::seed_from_u64(3);

        let generation = generate(Some(&source), &codes(&["08", "10"]), &mut rng);
        let total = generation.collection.features.len();

        assert_eq!(generation.report.origin, PointsOrigin::Synthetic);
        assert!((74 + 45..=185 + 45).contains(&total), "total = {}", total);
        assert_eq!(generation.report.failures.len(), 2);
    }

    #[test]
    fn test_fallback_when_records_have_no_coordinates() {
        let no_coords: PiezometreRecord =
            serde_json::from_str(r#"{"code_bss":"Z","nom_commune":"Sedan"}"#).unwrap();
        let source = FakeSource(vec![("08", Ok(vec![no_coords]))]);
        let mut rng = StdRng::seed_from_u64(4);

        let generation = generate(Some(&source), &codes(&["08"]), &mut rng);
        assert_eq!(generation.report.origin, PointsOrigin::Synthetic);
        assert_eq!(generation.report.stations_skipped, 1);
    }

    #[test]
    fn test_offline_generation_order_and_invariants() {
        let mut rng = StdRng::seed_from_u64(5);
        let generation = generate(None, &[], &mut rng);
        let features = &generation.collection.features;

        let layers: Vec<_> = features
            .iter()
            .map(|f| property_str(f, "layer").unwrap())
            .collect();
        let first_river = layers.iter().position(|l| *l == "Rivières").unwrap();
        let first_lake = layers.iter().position(|l| *l == "Lacs et plans d'eau").unwrap();
        let first_infra = layers.iter().position(|l| *l == "Infrastructures").unwrap();

        assert!(layers[..first_river].iter().all(|l| *l == "Piézomètres"));
        assert_eq!(first_lake - first_river, 10);
        assert_eq!(first_infra - first_lake, 15);
        assert_eq!(features.len() - first_infra, 20);

        for f in features {
            assert!(has_finite_coordinates(f));
            let props = f.properties.as_ref().unwrap();
            for key in ["name", "type", "category", "layer", "color", "validFrom", "validTo"] {
                assert!(props.contains_key(key), "missing {}", key);
            }
            assert_eq!(props["validFrom"], VALID_FROM);
            assert!(props["validTo"].is_null());
        }

        assert_eq!(
            geometry_type(&features[first_river].geometry.as_ref().unwrap().value),
            "LineString"
        );
        assert_eq!(generation.report.status, RunStatus::Success);
    }
}
