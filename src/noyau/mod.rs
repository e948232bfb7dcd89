//! Noyau de la calculatrice (accumulateur, sans interface)
//!
//! Organisation interne :
//! - operation.rs : table fixe symbole -> sorte d’opération
//! - cerveau.rs   : accumulateur + opération en attente + journal
//! - programme.rs : journal rejouable (photo) + forme texte JSON
//! - format.rs    : texte affiché pour une valeur

pub mod cerveau;
pub mod format;
pub mod operation;
pub mod programme;

#[cfg(test)]
mod tests_cerveau;


// API publique minimale
pub use cerveau::Cerveau;
pub use format::format_valeur;
pub use programme::Programme;
