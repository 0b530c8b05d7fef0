//! Réparation de l'encodage d'un fichier GeoJSON
//!
//! 1. Décodage UTF-8 en ignorant les octets invalides
//! 2. Table de correction sur le texte brut
//! 3. Validation JSON (aucune écriture en cas d'échec)
//! 4. Table de correction sur chaque propriété texte des features
//! 5. Écriture de la sortie et de la copie runtime

pub mod audit;
pub mod table;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::export;
use crate::report::{RepairReport, ResidualMojibake};

pub use audit::looks_double_encoded;
pub use table::{apply, contains_mojibake, MOJIBAKE_RULES};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Erreurs de réparation
#[derive(Error, Debug)]
pub enum RepairError {
    #[error("Invalid JSON after substitution at line {line}, column {column}: {source}")]
    InvalidJson {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Décode des octets en UTF-8, en ignorant les séquences invalides
///
/// Retourne le texte et le nombre d'octets ignorés. Un BOM initial est retiré.
pub fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    // Chemin rapide: entrée déjà valide
    if let Ok(text) = simdutf8::basic::from_utf8(bytes) {
        return (text.to_string(), 0);
    }

    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    let mut rest = bytes;

    loop {
        match simdutf8::compat::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                break;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                if let Ok(valid) = simdutf8::compat::from_utf8(&rest[..valid_up_to]) {
                    text.push_str(valid);
                }
                // Séquence tronquée en fin de fichier: tout le reste est ignoré
                let invalid = e.error_len().unwrap_or(rest.len() - valid_up_to);
                dropped += invalid;
                rest = &rest[valid_up_to + invalid..];
            }
        }
    }

    (text, dropped)
}

/// Applique la table sur chaque propriété texte de chaque feature
///
/// Retourne le nombre de remplacements effectués.
pub fn repair_properties(document: &mut Value) -> usize {
    let Some(features) = document.get_mut("features").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut replacements = 0;
    for feature in features {
        let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) else {
            continue;
        };
        for value in props.values_mut() {
            if let Value::String(text) = value {
                let (fixed, count) = apply(text);
                if count > 0 {
                    *text = fixed;
                    replacements += count;
                }
            }
        }
    }

    replacements
}

/// Liste les propriétés texte encore suspectes après réparation
pub fn find_residual(document: &Value) -> Vec<ResidualMojibake> {
    let Some(features) = document.get("features").and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut residual = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        let Some(props) = feature.get("properties").and_then(Value::as_object) else {
            continue;
        };
        for (key, value) in props {
            if let Some(text) = value.as_str().filter(|s| looks_double_encoded(s)) {
                residual.push(ResidualMojibake {
                    feature_index: index,
                    key: key.clone(),
                    value: text.to_string(),
                });
            }
        }
    }

    residual
}

/// Répare un contenu GeoJSON brut, sans toucher au disque
pub fn repair_bytes(bytes: &[u8]) -> Result<(Value, RepairReport), RepairError> {
    let (text, bytes_dropped) = decode_lossy(bytes);
    let (text, raw_replacements) = apply(&text);

    let mut document: Value =
        serde_json::from_str(&text).map_err(|source| RepairError::InvalidJson {
            line: source.line(),
            column: source.column(),
            source,
        })?;

    let property_replacements = repair_properties(&mut document);
    let residual = find_residual(&document);
    let features = document
        .get("features")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    let report = RepairReport {
        bytes_dropped,
        raw_replacements,
        property_replacements,
        features,
        residual,
        ..Default::default()
    };

    Ok((document, report))
}

/// Répare `input` puis écrit `output` et sa copie `runtime`
///
/// Rien n'est écrit si le contenu corrigé n'est pas du JSON valide.
pub fn fix_file(input: &Path, output: &Path, runtime: &Path) -> Result<RepairReport> {
    let start = Instant::now();

    let bytes =
        std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    debug!(path = %input.display(), bytes = bytes.len(), "Input loaded");

    let (document, mut report) = repair_bytes(&bytes)?;

    if report.bytes_dropped > 0 {
        warn!(bytes = report.bytes_dropped, "Undecodable bytes ignored");
    }
    for suspect in &report.residual {
        warn!(
            feature = suspect.feature_index,
            key = %suspect.key,
            value = %suspect.value,
            "Property still looks double-encoded"
        );
    }

    export::write_geojson(&document, output)?;
    let checksum = export::publish(output, runtime)?;

    report.set_duration(start.elapsed());
    info!(
        features = report.features,
        raw = report.raw_replacements,
        properties = report.property_replacements,
        checksum = %checksum,
        "Encoding repaired"
    );

    Ok(report)
}
