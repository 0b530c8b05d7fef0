//! Écriture des fichiers GeoJSON et publication vers le runtime

pub mod geojson;
pub mod publish;

pub use self::geojson::{to_pretty_bytes, write_geojson};
pub use publish::{compute_file_checksum, publish};
