//! # hubeau
//!
//! Accès aux référentiels de stations de Hub'Eau (eaufrance.fr).
//!
//! ## Features
//!
//! - Client HTTP bloquant avec timeout par requête
//! - Stations piézométriques, hydrométriques et de qualité des cours d'eau
//! - Valeurs numériques tolérantes (nombre ou texte)
//! - Lecture des exports `{"data": [...]}` enregistrés sur disque
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hubeau::{ClientConfig, HubEauClient, PiezometreSource, StationRecord};
//!
//! let client = HubEauClient::new(ClientConfig::default())?;
//! for station in client.piezometres("67")? {
//!     println!("{} {:?}", station.label(), station.coordinates());
//! }
//! ```

pub mod client;
pub mod departements;
pub mod error;
pub mod types;

pub use client::{ClientConfig, HubEauClient, PiezometreSource};
pub use error::HubEauError;
pub use types::{
    HydroStationRecord, Numeric, PiezometreRecord, QualiteStationRecord, StationRecord,
    StationsPage,
};

use std::path::Path;

/// Lit un export Hub'Eau enregistré sur disque (`{"data": [...]}`)
///
/// # Errors
///
/// Retourne `HubEauError::Io` si le fichier est illisible et
/// `HubEauError::Parse` si le contenu n'a pas la forme attendue.
pub fn read_export<T: StationRecord>(path: &Path) -> Result<Vec<T>, HubEauError> {
    let content = std::fs::read_to_string(path)?;
    let page: StationsPage<T> = serde_json::from_str(&content)
        .map_err(|e| HubEauError::parse(path.display().to_string(), e.to_string()))?;
    Ok(page.data)
}
