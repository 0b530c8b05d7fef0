//! Lacs et plans d'eau du Grand Est

use geojson::Feature;

use crate::feature::{point, polygon, FeatureBuilder, LACS, PLANS_EAU};

/// Lac représenté par un point
#[derive(Debug, Clone, Copy)]
pub struct Lac {
    pub nom: &'static str,
    pub coords: (f64, f64),
    pub surface_ha: u32,
    /// Profondeur maximale (m)
    pub profondeur_max: u32,
    pub departement: &'static str,
}

const fn lac(
    nom: &'static str,
    coords: (f64, f64),
    surface_ha: u32,
    profondeur_max: u32,
    departement: &'static str,
) -> Lac {
    Lac {
        nom,
        coords,
        surface_ha,
        profondeur_max,
        departement,
    }
}

pub static LACS_GRAND_EST: &[Lac] = &[
    lac("Lac de Gérardmer", (6.852, 48.073), 115, 38, "Vosges"),
    lac("Lac de Pierre-Percée", (6.933, 48.466), 304, 78, "Meurthe-et-Moselle"),
    lac("Lac du Der-Chantecoq", (4.770, 48.586), 4800, 20, "Marne/Haute-Marne"),
    lac("Lac de Madine", (5.743, 48.918), 1100, 15, "Meuse"),
    lac("Lac Blanc", (7.094, 48.137), 29, 72, "Haut-Rhin"),
    lac("Lac de Kruth-Wildenstein", (6.966, 47.953), 81, 35, "Haut-Rhin"),
    lac("Lac de Longemer", (6.931, 48.075), 76, 34, "Vosges"),
    lac("Lac de Retournemer", (6.903, 48.090), 5, 16, "Vosges"),
    lac("Lac des Corbeaux", (6.892, 48.041), 9, 27, "Vosges"),
    lac("Plan d'eau de Metz", (6.233, 49.113), 62, 4, "Moselle"),
    lac("Étang du Stock", (6.781, 48.754), 700, 8, "Moselle"),
    lac("Lac de Bouzey", (6.362, 48.169), 140, 14, "Vosges"),
    lac("Lac de la Liez", (5.274, 48.016), 290, 16, "Haute-Marne"),
    lac("Lac de la Mouche", (5.185, 47.952), 94, 12, "Haute-Marne"),
    lac("Lac de la Vingeanne", (5.403, 47.915), 196, 21, "Haute-Marne"),
];

/// Features de la couche "Lacs et plans d'eau"
pub fn lacs() -> Vec<Feature> {
    LACS_GRAND_EST
        .iter()
        .map(|l| {
            FeatureBuilder::new(point(l.coords.0, l.coords.1), l.nom, "Lac", LACS)
                .prop("surface_ha", l.surface_ha)
                .prop("profondeur_max", l.profondeur_max)
                .prop("departement", l.departement)
                .build()
        })
        .collect()
}

/// Lac représenté par son emprise
#[derive(Debug, Clone, Copy)]
pub struct EmpriseLac {
    pub nom: &'static str,
    pub surface_ha: u32,
    /// "naturel" ou "artificiel"
    pub origine: &'static str,
    pub ring: &'static [(f64, f64)],
}

pub static EMPRISES_LACS: &[EmpriseLac] = &[
    EmpriseLac {
        nom: "Lac de Gérardmer",
        surface_ha: 115,
        origine: "naturel",
        ring: &[
            (6.8458, 48.0723),
            (6.8789, 48.0723),
            (6.8789, 48.0856),
            (6.8458, 48.0856),
            (6.8458, 48.0723),
        ],
    },
    EmpriseLac {
        nom: "Lac du Der-Chantecoq",
        surface_ha: 4800,
        origine: "artificiel",
        ring: &[
            (4.7234, 48.5423),
            (4.8123, 48.5423),
            (4.8123, 48.6012),
            (4.7234, 48.6012),
            (4.7234, 48.5423),
        ],
    },
    EmpriseLac {
        nom: "Lac de Madine",
        surface_ha: 1100,
        origine: "artificiel",
        ring: &[
            (5.7234, 48.9123),
            (5.7678, 48.9123),
            (5.7678, 48.9345),
            (5.7234, 48.9345),
            (5.7234, 48.9123),
        ],
    },
];

/// Features de la couche "Plans d'eau" (emprises polygonales)
pub fn emprises_lacs() -> Vec<Feature> {
    EMPRISES_LACS
        .iter()
        .map(|l| {
            FeatureBuilder::new(
                polygon(l.ring),
                l.nom,
                format!("lac_{}", l.origine),
                PLANS_EAU,
            )
            .prop("surface_ha", l.surface_ha)
            .build()
        })
        .collect()
}
