//! Configuration du système
//!
//! Valeurs par défaut, puis variables d'environnement (`.env` accepté),
//! puis options de la ligne de commande.

use std::path::PathBuf;
use std::time::Duration;

use hubeau::ClientConfig;

/// Fichier GeoJSON produit, relatif au répertoire du backend
pub const DEFAULT_OUTPUT: &str = "Scripts/grand_est_eau_complet.geojson";

/// Copie lue par le backend à l'exécution
pub const DEFAULT_RUNTIME: &str = "bin/Debug/net9.0/Scripts/grand_est_eau_complet.geojson";

/// Entrée de la réparation d'encodage
pub const DEFAULT_REPAIR_INPUT: &str = "Scripts/grand_est_eau_complet_fixed.geojson";

/// Configuration d'une exécution
#[derive(Debug, Clone)]
pub struct Settings {
    pub hubeau: ClientConfig,
    pub output: PathBuf,
    pub runtime: PathBuf,
    pub repair_input: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hubeau: ClientConfig::default(),
            output: DEFAULT_OUTPUT.into(),
            runtime: DEFAULT_RUNTIME.into(),
            repair_input: DEFAULT_REPAIR_INPUT.into(),
        }
    }
}

/// Options de la ligne de commande, prioritaires sur l'environnement
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub page_size: Option<u32>,
    pub output: Option<PathBuf>,
    pub runtime: Option<PathBuf>,
    pub repair_input: Option<PathBuf>,
}

impl Settings {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Charge la configuration depuis une source de variables quelconque
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            hubeau: ClientConfig {
                base_url: lookup("HUBEAU_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.hubeau.base_url),
                timeout: lookup("HUBEAU_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.hubeau.timeout),
                page_size: lookup("HUBEAU_PAGE_SIZE")
                    .and_then(|s| s.parse().ok())
                    .filter(|n| *n > 0)
                    .unwrap_or(defaults.hubeau.page_size),
            },
            output: lookup("GRAND_EST_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            runtime: lookup("GRAND_EST_RUNTIME")
                .map(PathBuf::from)
                .unwrap_or(defaults.runtime),
            repair_input: lookup("GRAND_EST_REPAIR_INPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.repair_input),
        }
    }

    /// Applique les options de la ligne de commande
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(base_url) = overrides.base_url {
            self.hubeau.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.hubeau.timeout = Duration::from_secs(secs);
        }
        if let Some(size) = overrides.page_size.filter(|n| *n > 0) {
            self.hubeau.page_size = size;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(runtime) = overrides.runtime {
            self.runtime = runtime;
        }
        if let Some(input) = overrides.repair_input {
            self.repair_input = input;
        }
    }
}
