//! Définition et implémentation des commandes CLI
//!
//! - `generate`: Hub'Eau (ou repli synthétique) + jeux statiques → GeoJSON
//! - `convert`: exports Hub'Eau enregistrés sur disque → GeoJSON
//! - `fix-encoding`: correction du mojibake d'un GeoJSON existant

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use hubeau::departements::{grand_est_codes, normalize_code};
use hubeau::{HubEauClient, PiezometreSource};
use tracing::{info, warn};

use crate::config::{Overrides, Settings};
use crate::convert::{convert, StationFiles};
use crate::export::{publish, write_geojson};
use crate::repair::fix_file;
use crate::report::{GenerationReport, RepairReport, RunStatus};
use crate::synth::generate;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the Grand Est water GeoJSON from Hub'Eau piezometers and static datasets
    Generate {
        /// Output GeoJSON file (default: env GRAND_EST_OUTPUT / Scripts/grand_est_eau_complet.geojson)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Runtime copy read by the backend (default: env GRAND_EST_RUNTIME)
        #[arg(long)]
        runtime: Option<PathBuf>,

        /// Comma-separated departement codes (default: the 10 Grand Est departements)
        #[arg(long)]
        departements: Option<String>,

        /// Hub'Eau base URL (default: env HUBEAU_BASE_URL / https://hubeau.eaufrance.fr)
        #[arg(long)]
        base_url: Option<String>,

        /// Per-request timeout in seconds (default: env HUBEAU_TIMEOUT_SECS / 10)
        #[arg(long)]
        timeout: Option<u64>,

        /// Stations requested per departement (default: env HUBEAU_PAGE_SIZE / 50)
        #[arg(long)]
        page_size: Option<u32>,

        /// Skip Hub'Eau and generate synthetic piezometers
        #[arg(long)]
        offline: bool,

        /// Save the run report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Build a GeoJSON from Hub'Eau station files saved on disk ({"data": [...]})
    Convert {
        /// Water quality stations file
        #[arg(long, default_value = "stations_grand_est.json")]
        qualite: PathBuf,

        /// Hydrometric stations file
        #[arg(long, default_value = "stations_hydro_grand_est.json")]
        hydro: PathBuf,

        /// Piezometers file
        #[arg(long, default_value = "piezometres_grand_est.json")]
        piezo: PathBuf,

        /// Output GeoJSON file (default: env GRAND_EST_OUTPUT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Runtime copy read by the backend (default: env GRAND_EST_RUNTIME)
        #[arg(long)]
        runtime: Option<PathBuf>,

        /// Save the run report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Repair UTF-8 mojibake in an existing GeoJSON file
    FixEncoding {
        /// Input GeoJSON (default: env GRAND_EST_REPAIR_INPUT / Scripts/grand_est_eau_complet_fixed.geojson)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output GeoJSON file (default: env GRAND_EST_OUTPUT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Runtime copy read by the backend (default: env GRAND_EST_RUNTIME)
        #[arg(long)]
        runtime: Option<PathBuf>,
    },
}

/// Options de `generate`
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub departements: Option<String>,
    pub offline: bool,
    pub report: Option<PathBuf>,
}

/// Exécute la commande generate
pub fn cmd_generate(settings: &Settings, options: &GenerateOptions) -> Result<GenerationReport> {
    let departements = match options.departements.as_deref() {
        Some(list) => parse_departements(list)?,
        None => grand_est_codes(),
    };

    info!(
        departements = %departements.join(","),
        base_url = %settings.hubeau.base_url,
        offline = options.offline,
        "Generate"
    );

    let client = if options.offline {
        None
    } else {
        Some(
            HubEauClient::new(settings.hubeau.clone())
                .context("Failed to build Hub'Eau client")?,
        )
    };
    let source = client.as_ref().map(|c| c as &dyn PiezometreSource);

    let generation = generate(source, &departements, &mut rand::thread_rng());

    write_output(&generation.collection, &settings.output, &settings.runtime)?;
    finish_report(&generation.report, options.report.as_deref())?;

    Ok(generation.report)
}

/// Exécute la commande convert
pub fn cmd_convert(
    settings: &Settings,
    files: &StationFiles,
    report_path: Option<&Path>,
) -> Result<GenerationReport> {
    info!(
        qualite = ?files.qualite,
        hydro = ?files.hydro,
        piezo = ?files.piezo,
        "Convert"
    );

    println!("Processing Hub'Eau station files...");
    let conversion = convert(files);

    write_output(&conversion.collection, &settings.output, &settings.runtime)?;
    finish_report(&conversion.report, report_path)?;

    Ok(conversion.report)
}

/// Exécute la commande fix-encoding
pub fn cmd_fix_encoding(settings: &Settings) -> Result<RepairReport> {
    info!(
        input = %settings.repair_input.display(),
        output = %settings.output.display(),
        "Fix encoding"
    );

    println!("Fixing UTF-8 encoding issues...");
    let report = fix_file(&settings.repair_input, &settings.output, &settings.runtime)?;

    println!("✓ Fixed encoding and saved to: {}", settings.output.display());
    println!("✓ Copied to runtime directory: {}", settings.runtime.display());
    report.display();

    if !report.residual.is_empty() {
        warn!(count = report.residual.len(), "Suspicious values left after repair");
    }

    Ok(report)
}

/// Construit les overrides de la ligne de commande
pub fn overrides_for(command: &Commands) -> Overrides {
    match command {
        Commands::Generate {
            output,
            runtime,
            base_url,
            timeout,
            page_size,
            ..
        } => Overrides {
            base_url: base_url.clone(),
            timeout_secs: *timeout,
            page_size: *page_size,
            output: output.clone(),
            runtime: runtime.clone(),
            ..Default::default()
        },
        Commands::Convert {
            output, runtime, ..
        } => Overrides {
            output: output.clone(),
            runtime: runtime.clone(),
            ..Default::default()
        },
        Commands::FixEncoding {
            input,
            output,
            runtime,
        } => Overrides {
            output: output.clone(),
            runtime: runtime.clone(),
            repair_input: input.clone(),
            ..Default::default()
        },
    }
}

/// Parse une liste de départements séparés par des virgules
fn parse_departements(list: &str) -> Result<Vec<String>> {
    let mut codes = Vec::new();

    for raw in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let code = normalize_code(raw)?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        bail!("No departement code in '{}'", list);
    }

    Ok(codes)
}

/// Écrit la collection puis la copie runtime
fn write_output(collection: &geojson::FeatureCollection, output: &Path, runtime: &Path) -> Result<()> {
    write_geojson(collection, output)?;
    println!("File saved to: {}", output.display());

    publish(output, runtime)?;
    println!("Also saved to runtime directory: {}", runtime.display());

    Ok(())
}

/// Affiche et sauvegarde le rapport
fn finish_report(report: &GenerationReport, path: Option<&Path>) -> Result<()> {
    report.display();

    if let Some(path) = path {
        report.save_to_file(path)?;
        info!(path = %path.display(), "Report saved");
    }

    if report.status == RunStatus::Failed {
        bail!("No feature produced");
    }

    info!(summary = %report.summary(), "Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_departements() {
        assert_eq!(parse_departements("57,67").unwrap(), ["57", "67"]);
        assert_eq!(parse_departements(" 8 , 2a ,57,57").unwrap(), ["08", "2A", "57"]);
    }

    #[test]
    fn test_parse_departements_invalid() {
        assert!(parse_departements("57,999").is_err());
        assert!(parse_departements(" , ").is_err());
    }

    #[test]
    fn test_overrides_for_fix_encoding() {
        let command = Commands::FixEncoding {
            input: Some("in.geojson".into()),
            output: None,
            runtime: Some("rt.geojson".into()),
        };
        let overrides = overrides_for(&command);
        assert_eq!(overrides.repair_input, Some(PathBuf::from("in.geojson")));
        assert_eq!(overrides.runtime, Some(PathBuf::from("rt.geojson")));
        assert!(overrides.output.is_none());
    }

    #[test]
    fn test_cmd_generate_offline() {
        let dir = std::env::temp_dir().join("grand_est_eau_cmd_generate");
        std::fs::remove_dir_all(&dir).ok();

        let settings = Settings {
            output: dir.join("out.geojson"),
            runtime: dir.join("runtime").join("out.geojson"),
            ..Default::default()
        };
        let report = cmd_generate(
            &settings,
            &GenerateOptions {
                offline: true,
                report: Some(dir.join("report.json")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(report.status, RunStatus::Success);
        assert!(dir.join("report.json").exists());
        assert_eq!(
            std::fs::read(&settings.output).unwrap(),
            std::fs::read(&settings.runtime).unwrap()
        );

        std::fs::remove_dir_all(dir).ok();
    }
}
