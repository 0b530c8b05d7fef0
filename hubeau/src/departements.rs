//! Départements du Grand Est et validation des codes département

use crate::HubEauError;

/// Un département interrogé dans Hub'Eau
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departement {
    /// Code INSEE (2 caractères en métropole)
    pub code: &'static str,
    pub nom: &'static str,
}

/// Les dix départements de la région Grand Est, dans l'ordre des codes
pub static GRAND_EST: &[Departement] = &[
    Departement { code: "08", nom: "Ardennes" },
    Departement { code: "10", nom: "Aube" },
    Departement { code: "51", nom: "Marne" },
    Departement { code: "52", nom: "Haute-Marne" },
    Departement { code: "54", nom: "Meurthe-et-Moselle" },
    Departement { code: "55", nom: "Meuse" },
    Departement { code: "57", nom: "Moselle" },
    Departement { code: "67", nom: "Bas-Rhin" },
    Departement { code: "68", nom: "Haut-Rhin" },
    Departement { code: "88", nom: "Vosges" },
];

/// Codes des départements du Grand Est
pub fn grand_est_codes() -> Vec<String> {
    GRAND_EST.iter().map(|d| d.code.to_string()).collect()
}

/// Recherche un département du Grand Est par code
pub fn find(code: &str) -> Option<&'static Departement> {
    GRAND_EST.iter().find(|d| d.code == code)
}

/// Valide et normalise un code département
///
/// Accepte 01-95 (hors 20), 2A/2B pour la Corse et 971-976 pour l'outre-mer.
/// Un code à un chiffre est complété ("8" → "08").
pub fn normalize_code(raw: &str) -> Result<String, HubEauError> {
    let code = raw.trim().to_uppercase();
    let invalid = || HubEauError::InvalidDepartement(raw.to_string());

    match code.len() {
        1 if code.chars().all(|c| c.is_ascii_digit()) && code != "0" => Ok(format!("0{}", code)),
        2 if code == "2A" || code == "2B" => Ok(code),
        2 if code.chars().all(|c| c.is_ascii_digit()) => {
            let n: u8 = code.parse().map_err(|_| invalid())?;
            if (1..=95).contains(&n) && n != 20 {
                Ok(code)
            } else {
                Err(invalid())
            }
        }
        3 if code.chars().all(|c| c.is_ascii_digit()) => {
            let n: u16 = code.parse().map_err(|_| invalid())?;
            if (971..=976).contains(&n) {
                Ok(code)
            } else {
                Err(invalid())
            }
        }
        _ => Err(invalid()),
    }
}
