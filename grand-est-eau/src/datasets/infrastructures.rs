//! Infrastructures hydrauliques du Grand Est

use geojson::Feature;

use crate::feature::{point, FeatureBuilder, INFRASTRUCTURES};

/// Barrage, station d'épuration, centrale, écluse ou port
#[derive(Debug, Clone, Copy)]
pub struct Infrastructure {
    pub nom: &'static str,
    pub coords: (f64, f64),
    pub kind: &'static str,
    pub capacite: &'static str,
    pub departement: &'static str,
}

const fn infra(
    nom: &'static str,
    coords: (f64, f64),
    kind: &'static str,
    capacite: &'static str,
    departement: &'static str,
) -> Infrastructure {
    Infrastructure {
        nom,
        coords,
        kind,
        capacite,
        departement,
    }
}

const STEP: &str = "Station épuration";

pub static INFRASTRUCTURES_GRAND_EST: &[Infrastructure] = &[
    infra("Barrage de Kembs", (7.502, 47.691), "Barrage", "52 MW", "Haut-Rhin"),
    infra("Station épuration Strasbourg", (7.795, 48.527), STEP, "450000 EH", "Bas-Rhin"),
    infra("Station épuration Nancy", (6.208, 48.663), STEP, "300000 EH", "Meurthe-et-Moselle"),
    infra("Station épuration Metz", (6.195, 49.095), STEP, "230000 EH", "Moselle"),
    infra("Station épuration Reims", (4.025, 49.231), STEP, "250000 EH", "Marne"),
    infra("Station épuration Mulhouse", (7.312, 47.732), STEP, "180000 EH", "Haut-Rhin"),
    infra("Station épuration Colmar", (7.385, 48.103), STEP, "120000 EH", "Haut-Rhin"),
    infra("Station épuration Troyes", (4.101, 48.279), STEP, "150000 EH", "Aube"),
    infra("Station épuration Châlons", (4.384, 48.943), STEP, "100000 EH", "Marne"),
    infra("Station épuration Épinal", (6.469, 48.186), STEP, "80000 EH", "Vosges"),
    infra("Barrage de Pierre-Percée", (6.933, 48.466), "Barrage", "61.6 hm³", "Meurthe-et-Moselle"),
    infra("Barrage du Der-Chantecoq", (4.770, 48.586), "Barrage", "350 hm³", "Marne"),
    infra("Barrage de Kruth-Wildenstein", (6.966, 47.953), "Barrage", "12 hm³", "Haut-Rhin"),
    infra(
        "Usine hydroélectrique Ottmarsheim",
        (7.506, 47.787),
        "Centrale hydraulique",
        "156 MW",
        "Haut-Rhin",
    ),
    infra(
        "Usine hydroélectrique Fessenheim",
        (7.563, 47.914),
        "Centrale hydraulique",
        "173 MW",
        "Haut-Rhin",
    ),
    infra("Écluse de Gambsheim", (7.916, 48.695), "Écluse", "Grand gabarit", "Bas-Rhin"),
    infra("Écluse de Strasbourg", (7.807, 48.542), "Écluse", "Grand gabarit", "Bas-Rhin"),
    infra("Port de Strasbourg", (7.795, 48.556), "Port fluvial", "8 Mt/an", "Bas-Rhin"),
    infra("Port de Metz", (6.218, 49.103), "Port fluvial", "3 Mt/an", "Moselle"),
    infra("Port de Nancy", (6.165, 48.704), "Port fluvial", "1 Mt/an", "Meurthe-et-Moselle"),
];

/// Features de la couche "Infrastructures"
pub fn infrastructures() -> Vec<Feature> {
    INFRASTRUCTURES_GRAND_EST
        .iter()
        .map(|i| {
            FeatureBuilder::new(point(i.coords.0, i.coords.1), i.nom, i.kind, INFRASTRUCTURES)
                .prop("capacite", i.capacite)
                .prop("departement", i.departement)
                .build()
        })
        .collect()
}
