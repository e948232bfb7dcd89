// src/noyau/operation.rs
//
// Table des opérations (symbole -> sorte d’opération)
// ---------------------------------------------------
// Règles:
// - Table FIXE, 'static, lecture seule (aucune mutation possible)
// - Les symboles sont ceux des boutons (π, √, ×, ÷, − U+2212, ...)
// - Symbole absent => None (le cerveau l’enregistre quand même, sans l’exécuter)

use std::f64::consts::{E, PI};

/// Sorte d’opération associée à un symbole.
#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
    /// x -> x*x (bouton "^")
    Carre,
    Egal,
    Effacer,
}

fn oppose(x: f64) -> f64 {
    -x
}

fn multiplier(a: f64, b: f64) -> f64 {
    a * b
}

fn diviser(a: f64, b: f64) -> f64 {
    a / b
}

fn additionner(a: f64, b: f64) -> f64 {
    a + b
}

fn soustraire(a: f64, b: f64) -> f64 {
    a - b
}

/// Table complète, dans l’ordre d’affichage du pavé scientifique.
pub const TABLE: &[(&str, Operation)] = &[
    ("π", Operation::Constante(PI)),
    ("e", Operation::Constante(E)),
    ("+/-", Operation::Unaire(oppose)),
    ("√", Operation::Unaire(f64::sqrt)),
    ("sin", Operation::Unaire(f64::sin)),
    ("cos", Operation::Unaire(f64::cos)),
    ("tan", Operation::Unaire(f64::tan)),
    ("^", Operation::Carre),
    ("log", Operation::Unaire(f64::log10)),
    ("×", Operation::Binaire(multiplier)),
    ("÷", Operation::Binaire(diviser)),
    ("+", Operation::Binaire(additionner)),
    ("−", Operation::Binaire(soustraire)),
    ("C", Operation::Effacer),
    ("=", Operation::Egal),
];

/// Cherche un symbole dans la table.
pub fn chercher(symbole: &str) -> Option<Operation> {
    TABLE
        .iter()
        .find(|(s, _)| *s == symbole)
        .map(|(_, op)| *op)
}
