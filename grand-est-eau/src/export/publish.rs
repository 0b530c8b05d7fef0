//! Copie de la sortie dans le répertoire runtime du backend

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use super::geojson::{ensure_parent, temp_sibling};

/// Calcule le checksum blake3 d'un fichier
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 65536]; // 64KB buffer

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

/// Copie `output` vers `runtime` à l'identique
///
/// Retourne le checksum commun des deux fichiers.
pub fn publish(output: &Path, runtime: &Path) -> Result<String> {
    ensure_parent(runtime)?;

    let tmp_path = temp_sibling(runtime);
    if let Err(e) = copy_then_rename(output, &tmp_path, runtime) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e);
    }

    let expected = compute_file_checksum(output)?;
    let actual = compute_file_checksum(runtime)?;
    if expected != actual {
        bail!(
            "Runtime copy differs from output: {} ({}) vs {} ({})",
            runtime.display(),
            actual,
            output.display(),
            expected
        );
    }

    info!(runtime = %runtime.display(), checksum = %expected, "Runtime copy published");
    Ok(expected)
}

fn copy_then_rename(output: &Path, tmp_path: &Path, runtime: &Path) -> Result<()> {
    std::fs::copy(output, tmp_path).with_context(|| {
        format!("Failed to copy {} to {}", output.display(), tmp_path.display())
    })?;
    std::fs::rename(tmp_path, runtime)
        .with_context(|| format!("Failed to move {} to {}", tmp_path.display(), runtime.display()))?;
    Ok(())
}
