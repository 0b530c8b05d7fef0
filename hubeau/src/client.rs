//! Client HTTP bloquant pour l'API Hub'Eau
//!
//! Un appel par département, borné par un timeout. Aucun retry: l'appelant
//! décide quoi faire d'un département en échec.

use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{PiezometreRecord, StationsPage};
use crate::HubEauError;

/// URL de base publique de Hub'Eau
pub const DEFAULT_BASE_URL: &str = "https://hubeau.eaufrance.fr";

/// Stations piézométriques (niveaux des nappes)
pub const NIVEAUX_NAPPES_STATIONS: &str = "/api/v1/niveaux_nappes/stations";

/// Timeout par requête
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Nombre de stations demandées par département
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Configuration du client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Source de stations piézométriques, interrogée département par département
pub trait PiezometreSource {
    fn piezometres(&self, departement: &str) -> Result<Vec<PiezometreRecord>, HubEauError>;
}

/// Client Hub'Eau
pub struct HubEauClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl HubEauClient {
    /// Construit le client HTTP avec le timeout configuré
    pub fn new(config: ClientConfig) -> Result<Self, HubEauError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("grand-est-eau/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL d'une requête stations filtrée par département
    pub fn stations_url(&self, path: &str, departement: &str) -> String {
        format!(
            "{}{}?code_departement={}&size={}",
            self.config.base_url.trim_end_matches('/'),
            path,
            departement,
            self.config.page_size
        )
    }

    /// Récupère la première page de stations d'un département
    pub fn fetch_stations<T: DeserializeOwned>(
        &self,
        path: &str,
        departement: &str,
    ) -> Result<Vec<T>, HubEauError> {
        let url = self.stations_url(path, departement);
        debug!(url = %url, "GET");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        // Tout 2xx est accepté, 206 compris (Hub'Eau l'envoie dès que count > size).
        // Les autres statuts (3xx non suivis, 4xx, 5xx) sont des échecs.
        if !status.is_success() {
            return Err(HubEauError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text()?;
        let page: StationsPage<T> =
            serde_json::from_str(&body).map_err(|e| HubEauError::parse(&url, e.to_string()))?;

        debug!(
            departement = departement,
            received = page.data.len(),
            total = ?page.count,
            "Stations page received"
        );

        Ok(page.data)
    }
}

impl PiezometreSource for HubEauClient {
    fn piezometres(&self, departement: &str) -> Result<Vec<PiezometreRecord>, HubEauError> {
        self.fetch_stations(NIVEAUX_NAPPES_STATIONS, departement)
    }
}
