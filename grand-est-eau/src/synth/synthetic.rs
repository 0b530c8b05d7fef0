//! Piézomètres synthétiques autour des communes du Grand Est
//!
//! Utilisés uniquement quand Hub'Eau ne renvoie aucune station. Les valeurs
//! sont aléatoires: seules la structure et les bornes sont garanties.

use geojson::Feature;
use rand::Rng;

use crate::datasets::{Commune, COMMUNES};
use crate::feature::{point, FeatureBuilder, PIEZOMETRES};

/// Décalage maximal appliqué aux coordonnées de la commune (degrés)
pub const JITTER_DEG: f64 = 0.05;

/// Nombre de piézomètres générés par commune (bornes incluses)
pub const PER_COMMUNE: std::ops::RangeInclusive<usize> = 2..=5;

/// Génère 2 à 5 piézomètres pour chacune des communes du Grand Est
pub fn synthetic_piezometres<R: Rng + ?Sized>(rng: &mut R) -> Vec<Feature> {
    synthetic_piezometres_for(COMMUNES, rng)
}

/// Génère 2 à 5 piézomètres par commune fournie
pub fn synthetic_piezometres_for<R: Rng + ?Sized>(communes: &[Commune], rng: &mut R) -> Vec<Feature> {
    let mut features = Vec::with_capacity(communes.len() * PER_COMMUNE.end());

    for commune in communes {
        let count = rng.gen_range(PER_COMMUNE);

        for i in 0..count {
            let lon = commune.lon + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            let lat = commune.lat + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
            let code = format!(
                "0{}X{}/F{}",
                rng.gen_range(1000..=9999),
                rng.gen_range(100..=999),
                i + 1
            );
            let name = format!("{} - Piézomètre {}", commune.nom, code);

            features.push(
                FeatureBuilder::new(point(lon, lat), name, "Piézomètre", PIEZOMETRES)
                    .prop("commune", commune.nom)
                    .prop("departement", commune.departement)
                    .prop("code_bss", code)
                    .prop("altitude_sol", rng.gen_range(100..=400).to_string())
                    .prop("date_debut", format!("{}-01-01", rng.gen_range(1960..=2020)))
                    .prop("profondeur", rng.gen_range(5..=50))
                    .build(),
            );
        }
    }

    features
}
