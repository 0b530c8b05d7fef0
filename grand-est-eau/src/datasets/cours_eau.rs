//! Cours d'eau du Grand Est (tracés simplifiés)

use geojson::Feature;

use crate::feature::{line_string, FeatureBuilder, GRANDS_COURS_EAU, RIVIERES};

/// Rivière de la couche "Rivières"
#[derive(Debug, Clone, Copy)]
pub struct Riviere {
    pub nom: &'static str,
    pub coords: &'static [(f64, f64)],
    /// Débit moyen (m³/s)
    pub debit: u32,
    pub qualite: &'static str,
    pub bassin: &'static str,
}

pub static RIVIERES_GRAND_EST: &[Riviere] = &[
    Riviere {
        nom: "Rhin - Section Alsace",
        coords: &[(7.588, 48.966), (7.734, 48.585), (7.909, 47.916), (8.232, 47.591)],
        debit: 1080,
        qualite: "Bonne",
        bassin: "Rhin-Meuse",
    },
    Riviere {
        nom: "Moselle",
        coords: &[(6.179, 49.120), (6.365, 48.689), (6.737, 48.114), (7.361, 47.815)],
        debit: 145,
        qualite: "Moyenne",
        bassin: "Rhin-Meuse",
    },
    Riviere {
        nom: "Meuse",
        coords: &[(5.379, 49.540), (5.168, 48.640), (4.863, 47.980)],
        debit: 230,
        qualite: "Bonne",
        bassin: "Rhin-Meuse",
    },
    Riviere {
        nom: "Marne",
        coords: &[(4.363, 48.950), (4.796, 48.640), (5.139, 48.260)],
        debit: 110,
        qualite: "Moyenne",
        bassin: "Seine-Normandie",
    },
    Riviere {
        nom: "Ill",
        coords: &[(7.339, 48.584), (7.448, 48.318), (7.581, 47.590)],
        debit: 58,
        qualite: "Bonne",
        bassin: "Rhin-Meuse",
    },
    Riviere {
        nom: "Sarre",
        coords: &[(7.065, 49.111), (7.032, 48.980), (6.982, 48.795)],
        debit: 78,
        qualite: "Moyenne",
        bassin: "Rhin-Meuse",
    },
    Riviere {
        nom: "Aisne",
        coords: &[(4.521, 49.474), (4.686, 49.256), (4.822, 49.071)],
        debit: 63,
        qualite: "Bonne",
        bassin: "Seine-Normandie",
    },
    Riviere {
        nom: "Aube",
        coords: &[(4.075, 48.297), (4.329, 48.402), (4.593, 48.516)],
        debit: 41,
        qualite: "Bonne",
        bassin: "Seine-Normandie",
    },
    Riviere {
        nom: "Seine (source)",
        coords: &[(4.205, 48.088), (4.341, 48.167), (4.498, 48.275)],
        debit: 25,
        qualite: "Excellente",
        bassin: "Seine-Normandie",
    },
    Riviere {
        nom: "Seille",
        coords: &[(6.532, 48.914), (6.401, 48.792), (6.241, 48.638)],
        debit: 35,
        qualite: "Moyenne",
        bassin: "Rhin-Meuse",
    },
];

/// Features de la couche "Rivières"
pub fn rivieres() -> Vec<Feature> {
    RIVIERES_GRAND_EST
        .iter()
        .map(|r| {
            FeatureBuilder::new(line_string(r.coords), r.nom, "Cours d'eau", RIVIERES)
                .prop("debit_moyen_m3s", r.debit)
                .prop("qualite_eau", r.qualite)
                .prop("bassin", r.bassin)
                .build()
        })
        .collect()
}

/// Grand cours d'eau (fleuve ou rivière) de la couche "Cours d'eau"
#[derive(Debug, Clone, Copy)]
pub struct GrandCoursEau {
    pub nom: &'static str,
    /// "fleuve" ou "riviere"
    pub kind: &'static str,
    pub debit_moyen: u32,
    pub longueur_km: u32,
    pub bassin: &'static str,
    pub coords: &'static [(f64, f64)],
}

pub static GRANDS_COURS_EAU_GRAND_EST: &[GrandCoursEau] = &[
    GrandCoursEau {
        nom: "Rhin",
        kind: "fleuve",
        debit_moyen: 1080,
        longueur_km: 185,
        bassin: "Rhin-Meuse",
        coords: &[(7.5885, 48.9660), (7.7342, 48.5849), (7.9090, 47.9163), (8.2324, 47.5905)],
    },
    GrandCoursEau {
        nom: "Moselle",
        kind: "riviere",
        debit_moyen: 145,
        longueur_km: 314,
        bassin: "Rhin-Meuse",
        coords: &[(6.1786, 49.1196), (6.3647, 48.6891), (6.7369, 48.1138), (7.3608, 47.8148)],
    },
    GrandCoursEau {
        nom: "Meuse",
        kind: "fleuve",
        debit_moyen: 230,
        longueur_km: 272,
        bassin: "Rhin-Meuse",
        coords: &[(5.1657, 49.5695), (5.3689, 49.2924), (5.5264, 48.7901), (5.8923, 48.2345)],
    },
    GrandCoursEau {
        nom: "Marne",
        kind: "riviere",
        debit_moyen: 110,
        longueur_km: 180,
        bassin: "Seine-Normandie",
        coords: &[(4.3634, 49.2739), (4.7256, 48.9567), (5.1367, 48.6389)],
    },
    GrandCoursEau {
        nom: "Ill",
        kind: "riviere",
        debit_moyen: 58,
        longueur_km: 223,
        bassin: "Rhin-Meuse",
        coords: &[(7.2384, 47.4523), (7.4485, 48.2698), (7.7528, 48.5825)],
    },
    GrandCoursEau {
        nom: "Meurthe",
        kind: "riviere",
        debit_moyen: 40,
        longueur_km: 161,
        bassin: "Rhin-Meuse",
        coords: &[(6.1849, 48.6921), (6.4567, 48.5234), (6.7234, 48.4123)],
    },
    GrandCoursEau {
        nom: "Sarre",
        kind: "riviere",
        debit_moyen: 75,
        longueur_km: 126,
        bassin: "Rhin-Meuse",
        coords: &[(7.0234, 49.1123), (6.8456, 48.9234), (6.6789, 48.7345)],
    },
];

/// Features de la couche "Cours d'eau" (conversion des exports)
pub fn grands_cours_eau() -> Vec<Feature> {
    GRANDS_COURS_EAU_GRAND_EST
        .iter()
        .map(|c| {
            FeatureBuilder::new(line_string(c.coords), c.nom, c.kind, GRANDS_COURS_EAU)
                .prop("debit_moyen_m3s", c.debit_moyen)
                .prop("longueur_km", c.longueur_km)
                .prop("bassin", c.bassin)
                .build()
        })
        .collect()
}
