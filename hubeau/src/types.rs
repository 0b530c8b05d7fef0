//! Types de données pour le crate hubeau
//!
//! Les enregistrements sont consommés en lecture seule: aucun champ n'est
//! obligatoire, Hub'Eau omettant ou mettant à `null` ce qu'il ne connaît pas.

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Page de réponse Hub'Eau (`{"count": .., "data": [..]}`), aussi utilisée
/// pour les exports enregistrés sur disque
#[derive(Debug, Deserialize)]
pub struct StationsPage<T> {
    /// Nombre total de résultats côté serveur (absent des exports manuels)
    #[serde(default)]
    pub count: Option<u64>,

    /// Enregistrements de la page
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Valeur numérique tolérante: nombre JSON ou nombre écrit en texte
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Valeur flottante finie, ou `None` si vide / illisible / NaN / infinie
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(n) => *n,
            Numeric::Text(s) => s.trim().replace(',', ".").parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Représentation texte telle que reçue (un nombre entier s'écrit sans décimale)
    pub fn to_text(&self) -> String {
        match self {
            Numeric::Number(n) => n.to_string(),
            Numeric::Text(s) => s.trim().to_string(),
        }
    }
}

/// Géométrie GeoJSON embarquée dans certains enregistrements
#[derive(Debug, Clone, Deserialize)]
pub struct PointGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Enregistrement qui peut être positionné sur la carte
pub trait StationRecord: DeserializeOwned {
    /// Paire (longitude, latitude) finie, si l'enregistrement en porte une
    fn coordinates(&self) -> Option<(f64, f64)>;

    /// Identifiant lisible pour les logs
    fn label(&self) -> String;
}

/// Combine deux champs optionnels en paire de coordonnées finies
fn pair(x: &Option<Numeric>, y: &Option<Numeric>) -> Option<(f64, f64)> {
    match (x.as_ref()?.as_f64(), y.as_ref()?.as_f64()) {
        (Some(lon), Some(lat)) => Some((lon, lat)),
        _ => None,
    }
}

/// Station piézométrique (API `niveaux_nappes/stations`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PiezometreRecord {
    /// Code BSS (ex: "01234X0123/F1")
    pub code_bss: Option<String>,
    pub nom_commune: Option<String>,
    pub nom_departement: Option<String>,
    pub altitude_station: Option<Numeric>,
    pub date_debut_mesure: Option<String>,
    pub profondeur_investigation: Option<Numeric>,
    /// Libellé de la masse d'eau (nappe)
    pub libelle_pe: Option<String>,

    // Coordonnées WGS84: `x`/`y` (API actuelle), `geometry_x`/`geometry_y`
    // (anciens exports) ou `geometry.coordinates`
    pub x: Option<Numeric>,
    pub y: Option<Numeric>,
    pub geometry_x: Option<Numeric>,
    pub geometry_y: Option<Numeric>,
    pub geometry: Option<PointGeometry>,
}

impl StationRecord for PiezometreRecord {
    fn coordinates(&self) -> Option<(f64, f64)> {
        pair(&self.x, &self.y)
            .or_else(|| pair(&self.geometry_x, &self.geometry_y))
            .or_else(|| {
                let coords = &self.geometry.as_ref()?.coordinates;
                match coords.as_slice() {
                    [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lon, *lat)),
                    _ => None,
                }
            })
    }

    fn label(&self) -> String {
        self.code_bss.clone().unwrap_or_else(|| "?".to_string())
    }
}

/// Station hydrométrique (API `hydrometrie/referentiel/stations`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HydroStationRecord {
    pub code_station: Option<String>,
    pub libelle_station: Option<String>,
    pub libelle_commune: Option<String>,
    pub libelle_departement: Option<String>,
    pub libelle_cours_eau: Option<String>,
    pub libelle_bassin: Option<String>,
    pub altitude_ref_alti_station: Option<Numeric>,
    pub en_service: Option<bool>,
    pub longitude_station: Option<Numeric>,
    pub latitude_station: Option<Numeric>,
}

impl StationRecord for HydroStationRecord {
    fn coordinates(&self) -> Option<(f64, f64)> {
        pair(&self.longitude_station, &self.latitude_station)
    }

    fn label(&self) -> String {
        self.code_station.clone().unwrap_or_else(|| "?".to_string())
    }
}

/// Station de qualité des cours d'eau (API `qualite_rivieres/station_pc`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QualiteStationRecord {
    pub code_station: Option<String>,
    pub libelle_station: Option<String>,
    pub libelle_commune: Option<String>,
    pub code_commune: Option<String>,
    pub libelle_departement: Option<String>,
    pub libelle_cours_eau: Option<String>,
    pub libelle_bassin: Option<String>,
    pub longitude_station: Option<Numeric>,
    pub latitude_station: Option<Numeric>,
    pub longitude: Option<Numeric>,
    pub latitude: Option<Numeric>,
}

impl StationRecord for QualiteStationRecord {
    fn coordinates(&self) -> Option<(f64, f64)> {
        pair(&self.longitude_station, &self.latitude_station)
            .or_else(|| pair(&self.longitude, &self.latitude))
    }

    fn label(&self) -> String {
        self.code_station.clone().unwrap_or_else(|| "?".to_string())
    }
}
