//! Communes du Grand Est servant d'ancrage aux piézomètres synthétiques

/// Commune: nom, position approximative (WGS84) et département
#[derive(Debug, Clone, Copy)]
pub struct Commune {
    pub nom: &'static str,
    pub lon: f64,
    pub lat: f64,
    pub departement: &'static str,
}

const fn commune(nom: &'static str, lon: f64, lat: f64, departement: &'static str) -> Commune {
    Commune {
        nom,
        lon,
        lat,
        departement,
    }
}

pub static COMMUNES: &[Commune] = &[
    commune("Strasbourg", 7.75, 48.58, "Bas-Rhin"),
    commune("Mulhouse", 7.34, 47.75, "Haut-Rhin"),
    commune("Colmar", 7.36, 48.08, "Haut-Rhin"),
    commune("Metz", 6.18, 49.12, "Moselle"),
    commune("Nancy", 6.18, 48.69, "Meurthe-et-Moselle"),
    commune("Reims", 4.03, 49.26, "Marne"),
    commune("Charleville-Mézières", 4.72, 49.77, "Ardennes"),
    commune("Troyes", 4.08, 48.30, "Aube"),
    commune("Chaumont", 5.14, 48.11, "Haute-Marne"),
    commune("Bar-le-Duc", 5.16, 48.77, "Meuse"),
    commune("Épinal", 6.45, 48.17, "Vosges"),
    commune("Saint-Dizier", 4.95, 48.64, "Haute-Marne"),
    commune("Verdun", 5.38, 49.16, "Meuse"),
    commune("Haguenau", 7.79, 48.82, "Bas-Rhin"),
    commune("Schiltigheim", 7.75, 48.61, "Bas-Rhin"),
    commune("Illkirch-Graffenstaden", 7.71, 48.53, "Bas-Rhin"),
    commune("Saint-Louis", 7.56, 47.59, "Haut-Rhin"),
    commune("Sélestat", 7.45, 48.26, "Bas-Rhin"),
    commune("Bischheim", 7.75, 48.62, "Bas-Rhin"),
    commune("Thionville", 6.17, 49.36, "Moselle"),
    commune("Montigny-lès-Metz", 6.15, 49.10, "Moselle"),
    commune("Sarreguemines", 7.07, 49.11, "Moselle"),
    commune("Forbach", 6.90, 49.19, "Moselle"),
    commune("Saint-Avold", 6.70, 49.10, "Moselle"),
    commune("Vandœuvre-lès-Nancy", 6.17, 48.66, "Meurthe-et-Moselle"),
    commune("Lunéville", 6.50, 48.59, "Meurthe-et-Moselle"),
    commune("Pont-à-Mousson", 6.05, 48.90, "Meurthe-et-Moselle"),
    commune("Longwy", 5.76, 49.52, "Meurthe-et-Moselle"),
    commune("Châlons-en-Champagne", 4.36, 48.96, "Marne"),
    commune("Vitry-le-François", 4.58, 48.72, "Marne"),
    commune("Épernay", 3.96, 49.04, "Marne"),
    commune("Sedan", 4.94, 49.70, "Ardennes"),
    commune("Romilly-sur-Seine", 3.73, 48.52, "Aube"),
    commune("La Chapelle-Saint-Luc", 4.04, 48.31, "Aube"),
    commune("Saint-Dié-des-Vosges", 6.95, 48.29, "Vosges"),
    commune("Gérardmer", 6.88, 48.07, "Vosges"),
    commune("Remiremont", 6.59, 48.02, "Vosges"),
];
