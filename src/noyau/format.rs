// src/noyau/format.rs
//
// Affichage d’une valeur de l’accumulateur.
// - Toujours la plus courte écriture décimale qui relit la même valeur
// - Entiers avec ".0" (3.0)
// - NaN / inf / -inf écrits tels quels (aucune validation)

/// Texte affiché pour une valeur.
pub fn format_valeur(x: f64) -> String {
    // `{:?}` sur f64 : écriture la plus courte + ".0" pour les entiers.
    format!("{x:?}")
}
