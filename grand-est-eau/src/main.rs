//! Point d'entrée CLI pour grand-est-eau

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use grand_est_eau::cli::{self, Commands, GenerateOptions};
use grand_est_eau::convert::StationFiles;
use grand_est_eau::Settings;

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant ou parent
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

/// Préparer les données hydrologiques du Grand Est en GeoJSON
#[derive(Parser)]
#[command(name = "grand-est-eau")]
#[command(author, version)]
#[command(about = "Préparer le GeoJSON hydrologique du Grand Est (piézomètres, cours d'eau, lacs, infrastructures)")]
#[command(long_about = "Génère le GeoJSON depuis Hub'Eau (avec repli synthétique), convertit des exports de stations enregistrés, ou répare le mojibake d'un fichier existant.\n\nChaque commande écrit la sortie puis sa copie dans le répertoire runtime du backend.")]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Charger .env avant tout
    load_env();

    let cli = Cli::parse();

    // Configurer le logging
    init_logging(cli.verbose, cli.quiet);

    let mut settings = Settings::from_env();
    settings.apply_overrides(cli::overrides_for(&cli.command));

    let result = run(cli.command, &settings);
    if let Err(e) = &result {
        error!(error = %format!("{:#}", e), "Command failed");
    }
    result
}

fn run(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Generate {
            departements,
            offline,
            report,
            ..
        } => {
            info!(output = %settings.output.display(), "Generate Grand Est GeoJSON");
            cli::cmd_generate(
                settings,
                &GenerateOptions {
                    departements,
                    offline,
                    report,
                },
            )?;
        }
        Commands::Convert {
            qualite,
            hydro,
            piezo,
            report,
            ..
        } => {
            info!(output = %settings.output.display(), "Convert station files");
            let files = StationFiles {
                qualite: Some(qualite),
                hydro: Some(hydro),
                piezo: Some(piezo),
            };
            cli::cmd_convert(settings, &files, report.as_deref())?;
        }
        Commands::FixEncoding { .. } => {
            info!(input = %settings.repair_input.display(), "Repair encoding");
            cli::cmd_fix_encoding(settings)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
