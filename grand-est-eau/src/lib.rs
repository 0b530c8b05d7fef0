//! # grand-est-eau
//!
//! Préparation des données hydrologiques du Grand Est pour le POC SIG.
//!
//! ## Features
//!
//! - Piézomètres Hub'Eau par département, avec repli synthétique
//! - Rivières, lacs et infrastructures saisis à la main
//! - Conversion des exports de stations enregistrés sur disque
//! - Réparation du mojibake (UTF-8 relu en Windows-1252)
//! - Écriture atomique et copie vérifiée vers le runtime du backend
//!
//! ## Usage CLI
//!
//! ```bash
//! # Hub'Eau + jeux statiques
//! grand-est-eau generate --output ./Scripts/grand_est_eau_complet.geojson
//! grand-est-eau generate --departements 57,67 --report report.json
//! grand-est-eau generate --offline
//!
//! # Exports de stations déjà téléchargés
//! grand-est-eau convert --qualite stations.json --hydro hydro.json --piezo piezo.json
//!
//! # Correction d'encodage
//! grand-est-eau fix-encoding --input ./Scripts/grand_est_eau_complet_fixed.geojson
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod datasets;
pub mod export;
pub mod feature;
pub mod repair;
pub mod report;
pub mod stations;
pub mod synth;

pub use config::Settings;
pub use repair::RepairError;
pub use report::{GenerationReport, RepairReport, RunStatus};
