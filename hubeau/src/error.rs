//! Types d'erreurs pour le crate hubeau

use thiserror::Error;

/// Erreurs pouvant survenir lors d'un appel Hub'Eau ou de la lecture d'un export
#[derive(Debug, Error)]
pub enum HubEauError {
    /// Erreur réseau (connexion refusée, timeout, TLS...)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Réponse HTTP non 2xx
    #[error("HTTP error: {status} for {url}")]
    Status { status: u16, url: String },

    /// Corps de réponse ou fichier illisible en JSON
    #[error("Parse error in {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// Erreur d'I/O lors de la lecture d'un export local
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Code département non reconnu
    #[error("Invalid departement code: {0}")]
    InvalidDepartement(String),
}

impl HubEauError {
    /// Crée une erreur de parsing avec contexte
    pub fn parse(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Indique si l'erreur vient du transport (réseau / statut HTTP)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}
