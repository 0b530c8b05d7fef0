//! Jeux de données statiques (rivières, lacs, infrastructures, communes)

pub mod communes;
pub mod cours_eau;
pub mod infrastructures;
pub mod lacs;

pub use communes::{Commune, COMMUNES};
pub use cours_eau::{grands_cours_eau, rivieres};
pub use infrastructures::infrastructures;
pub use lacs::{emprises_lacs, lacs};
