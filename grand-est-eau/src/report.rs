//! Rapports d'exécution avec graceful degradation
//!
//! Ce module collecte les résultats d'une génération (départements en
//! échec, stations ignorées, features par couche) et d'une réparation
//! d'encodage, pour affichage console ou sauvegarde JSON.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use geojson::Feature;
use serde::Serialize;

use crate::feature::property_str;

/// Statut global de l'exécution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    /// Aucune source en échec
    Success,
    /// Des sources en échec, mais des features produites
    PartialSuccess,
    /// Aucune feature produite
    Failed,
}

/// Provenance des features ponctuelles (piézomètres, stations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointsOrigin {
    /// API Hub'Eau
    Remote,
    /// Repli synthétique autour des communes
    Synthetic,
    /// Exports Hub'Eau enregistrés sur disque
    LocalFiles,
}

/// Source (département ou fichier) en échec
#[derive(Debug, Clone, Serialize)]
pub struct SourceFailure {
    pub source: String,
    pub message: String,
}

/// Rapport de génération d'une FeatureCollection
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub duration_secs: f64,
    pub status: RunStatus,
    pub origin: PointsOrigin,

    /// Sources interrogées avec succès
    pub sources_ok: usize,
    /// Stations reçues mais ignorées (coordonnées absentes)
    pub stations_skipped: usize,
    /// Nombre total de features écrites
    pub total_features: usize,

    /// Nombre de features par couche
    pub by_layer: HashMap<String, usize>,

    pub failures: Vec<SourceFailure>,
}

impl GenerationReport {
    pub fn new(origin: PointsOrigin) -> Self {
        Self {
            duration_secs: 0.0,
            status: RunStatus::Success,
            origin,
            sources_ok: 0,
            stations_skipped: 0,
            total_features: 0,
            by_layer: HashMap::new(),
            failures: Vec::new(),
        }
    }

    /// Enregistre une source lue avec succès
    pub fn record_source_success(&mut self) {
        self.sources_ok += 1;
    }

    /// Enregistre une source en échec
    pub fn record_source_failure(&mut self, source: &str, message: &str) {
        self.failures.push(SourceFailure {
            source: source.to_string(),
            message: message.to_string(),
        });
    }

    pub fn record_skipped(&mut self, count: usize) {
        self.stations_skipped += count;
    }

    /// Compte les features par couche
    pub fn record_features(&mut self, features: &[Feature]) {
        for feature in features {
            let layer = property_str(feature, "layer").unwrap_or("?");
            *self.by_layer.entry(layer.to_string()).or_default() += 1;
        }
        self.total_features += features.len();
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Détermine le statut final
    pub fn finalize(&mut self) {
        self.status = if self.total_features == 0 {
            RunStatus::Failed
        } else if self.failures.is_empty() {
            RunStatus::Success
        } else {
            RunStatus::PartialSuccess
        };
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("GENERATION REPORT");
        println!("{}", "=".repeat(60));

        println!("\nStatus: {:?}", self.status);
        println!("Origin: {:?}", self.origin);
        println!("Duration: {:.2}s", self.duration_secs);

        println!("\n--- SUMMARY ---");
        println!(
            "Sources: {} ok, {} failed",
            self.sources_ok,
            self.failures.len()
        );
        println!(
            "Features: {} written, {} stations skipped",
            self.total_features, self.stations_skipped
        );

        if !self.by_layer.is_empty() {
            println!("\n--- BY LAYER ---");
            let mut layers: Vec<_> = self.by_layer.iter().collect();
            layers.sort_by_key(|(k, _)| k.as_str());
            for (layer, count) in layers {
                println!("  {}: {}", layer, count);
            }
        }

        if !self.failures.is_empty() {
            println!("\n--- FAILURES ({}) ---", self.failures.len());
            for f in self.failures.iter().take(20) {
                println!("  [{}] {}", f.source, f.message);
            }
            if self.failures.len() > 20 {
                println!("  ... and {} more", self.failures.len() - 20);
            }
        }

        println!("\n{}", "=".repeat(60));
    }

    /// Sauvegarde le rapport en JSON
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    /// Affichage compact pour le résumé
    pub fn summary(&self) -> String {
        format!(
            "{:?}: {} features, {} sources ok, {} failed",
            self.origin,
            self.total_features,
            self.sources_ok,
            self.failures.len()
        )
    }
}

/// Propriété encore suspecte après réparation
#[derive(Debug, Clone, Serialize)]
pub struct ResidualMojibake {
    pub feature_index: usize,
    pub key: String,
    pub value: String,
}

/// Rapport de réparation d'encodage
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepairReport {
    pub duration_secs: f64,
    /// Octets non décodables ignorés à la lecture
    pub bytes_dropped: usize,
    /// Remplacements appliqués sur le texte brut
    pub raw_replacements: usize,
    /// Remplacements appliqués dans les propriétés
    pub property_replacements: usize,
    pub features: usize,
    pub residual: Vec<ResidualMojibake>,
}

impl RepairReport {
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n--- ENCODING REPAIR ---");
        println!("Features: {}", self.features);
        println!("Undecodable bytes dropped: {}", self.bytes_dropped);
        println!(
            "Replacements: {} in raw text, {} in properties",
            self.raw_replacements, self.property_replacements
        );

        if !self.residual.is_empty() {
            println!("\n--- STILL SUSPICIOUS ({}) ---", self.residual.len());
            for r in self.residual.iter().take(10) {
                println!("  #{} {}: {}", r.feature_index, r.key, r.value);
            }
            if self.residual.len() > 10 {
                println!("  ... and {} more", self.residual.len() - 10);
            }
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} features, {} replacements, {} suspicious values left",
            self.features,
            self.raw_replacements + self.property_replacements,
            self.residual.len()
        )
    }
}
