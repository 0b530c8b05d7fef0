//! Export GeoJSON (UTF-8, indentation 2 espaces, accents conservés)

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

/// Sérialise en JSON indenté de 2 espaces, non-ASCII conservé tel quel
pub fn to_pretty_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(value).context("Failed to serialize GeoJSON")
}

/// Fichier temporaire voisin de la destination
pub(crate) fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Crée le répertoire parent si besoin
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Écrit `value` dans `output_path`
///
/// Le contenu est d'abord écrit dans un fichier temporaire voisin puis
/// renommé: une destination existante n'est jamais laissée tronquée.
pub fn write_geojson<T: Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<()> {
    let bytes = to_pretty_bytes(value)?;
    ensure_parent(output_path)?;

    let tmp_path = temp_sibling(output_path);
    if let Err(e) = write_then_rename(&bytes, &tmp_path, output_path) {
        std::fs::remove_file(&tmp_path).ok();
        return Err(e);
    }

    debug!(path = %output_path.display(), bytes = bytes.len(), "GeoJSON written");
    Ok(())
}

fn write_then_rename(bytes: &[u8], tmp_path: &Path, output_path: &Path) -> Result<()> {
    let file = File::create(tmp_path)
        .with_context(|| format!("Failed to create file: {}", tmp_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    drop(writer);

    std::fs::rename(tmp_path, output_path).with_context(|| {
        format!(
            "Failed to move {} to {}",
            tmp_path.display(),
            output_path.display()
        )
    })
}
