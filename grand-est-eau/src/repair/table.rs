//! Table de correction du mojibake (UTF-8 relu en Windows-1252)
//!
//! Les règles sont appliquées une seule fois chacune, dans l'ordre: d'abord
//! les mots entiers connus, puis les caractères isolés.

use memchr::memmem;

/// Règle de substitution (séquence corrompue, texte correct)
pub type Rule = (&'static str, &'static str);

/// Règles ordonnées: mots entiers puis caractères
pub const MOJIBAKE_RULES: &[Rule] = &[
    // Mots entiers
    ("PiÃ©zomÃ¨tre", "Piézomètre"),
    ("RiviÃ¨res", "Rivières"),
    ("GÃ©rardmer", "Gérardmer"),
    ("Pierre-PercÃ©e", "Pierre-Percée"),
    ("Ã©puration", "épuration"),
    // Minuscules
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã\u{a0}", "à"),
    ("Ã ", "à"),
    ("Ã¢", "â"),
    ("Ã¤", "ä"),
    ("Ã´", "ô"),
    ("Ã¶", "ö"),
    ("Ãµ", "õ"),
    ("Ã»", "û"),
    ("Ã¹", "ù"),
    ("Ã¼", "ü"),
    ("Ã§", "ç"),
    ("Ã®", "î"),
    ("Ã¯", "ï"),
    ("Ã±", "ñ"),
    ("Ã¦", "æ"),
    ("Å“", "œ"),
    // Majuscules
    ("Ã‰", "É"),
    ("Ãˆ", "È"),
    ("ÃŠ", "Ê"),
    ("Ã€", "À"),
    ("Ã‚", "Â"),
    ("Ã”", "Ô"),
    ("Ã›", "Û"),
    ("Ã‡", "Ç"),
    ("ÃŽ", "Î"),
    ("Ã\u{8f}", "Ï"),
];

/// Applique toutes les règles sur `text`
///
/// Retourne le texte corrigé et le nombre total de remplacements.
pub fn apply(text: &str) -> (String, usize) {
    let mut current = text.to_string();
    let mut replacements = 0;

    for (corrupted, fixed) in MOJIBAKE_RULES {
        let count = memmem::find_iter(current.as_bytes(), corrupted.as_bytes()).count();
        if count > 0 {
            current = current.replace(corrupted, fixed);
            replacements += count;
        }
    }

    (current, replacements)
}

/// Vrai si `text` contient au moins une séquence de la table
pub fn contains_mojibake(text: &str) -> bool {
    MOJIBAKE_RULES
        .iter()
        .any(|(corrupted, _)| memmem::find(text.as_bytes(), corrupted.as_bytes()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reproduit la corruption: octets UTF-8 relus en Windows-1252
    fn corrupt(text: &str) -> String {
        let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(text.as_bytes());
        decoded.into_owned()
    }

    #[test]
    fn test_simple_rule() {
        assert_eq!(apply("Ã©"), ("é".to_string(), 1));
    }

    #[test]
    fn test_whole_words() {
        let (fixed, count) = apply("PiÃ©zomÃ¨tre");
        assert_eq!(fixed, "Piézomètre");
        assert_eq!(count, 1);

        assert_eq!(apply("Lac de GÃ©rardmer").0, "Lac de Gérardmer");
        assert_eq!(apply("Station d'Ã©puration").0, "Station d'épuration");
        assert_eq!(apply("RiviÃ¨res").0, "Rivières");
    }

    #[test]
    fn test_every_target_character_is_repaired() {
        let targets = [
            "é", "è", "ê", "ë", "à", "â", "ä", "ô", "ö", "õ", "û", "ù", "ü", "ç", "î", "ï", "ñ",
            "æ", "œ", "É", "È", "Ê", "À", "Â", "Ô", "Û", "Ç", "Î", "Ï",
        ];
        for target in targets {
            let broken = corrupt(target);
            assert_ne!(broken, target);
            assert_eq!(apply(&broken).0, target, "{:?}", broken);
        }
    }

    #[test]
    fn test_realistic_sentence() {
        let original = "Barrage de Pierre-Percée, Château-Salins, Forêt d'Orient, Lac du Der-Chantecoq";
        let (fixed, count) = apply(&corrupt(original));
        assert_eq!(fixed, original);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_space_variant_of_a_grave() {
        // L'espace insécable devenu espace simple est consommé par la règle
        assert_eq!(apply("Ã  la source").0, "à la source");
        assert_eq!(apply("Ã\u{a0} la source").0, "à la source");
    }

    #[test]
    fn test_idempotent_on_correct_text() {
        let correct = "Piézomètre, Rivières, Gérardmer, Œuvre, île, çà et là, Ô, Ï";
        let (fixed, count) = apply(correct);
        assert_eq!(fixed, correct);
        assert_eq!(count, 0);

        let once = apply(&corrupt("Épinal, Sarrebourg, Sélestat")).0;
        assert_eq!(apply(&once).0, once);
    }

    #[test]
    fn test_contains_mojibake() {
        assert!(contains_mojibake("SÃ©lestat"));
        assert!(!contains_mojibake("Sélestat"));
        assert!(!contains_mojibake("Metz"));
    }

    #[test]
    fn test_whole_words_come_first() {
        let first_char_rule = MOJIBAKE_RULES
            .iter()
            .position(|(corrupted, _)| corrupted.chars().count() == 2)
            .unwrap();
        assert!(MOJIBAKE_RULES[..first_char_rule]
            .iter()
            .all(|(corrupted, _)| corrupted.chars().count() > 2));
        assert!(MOJIBAKE_RULES[first_char_rule..]
            .iter()
            .all(|(corrupted, _)| corrupted.chars().count() == 2));
    }
}
