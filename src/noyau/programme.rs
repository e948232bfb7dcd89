//! Noyau — programme (journal rejouable des opérandes et symboles)
//!
//! Le programme est la seule "photo" de l’état du cerveau : le rejouer depuis un
//! cerveau remis à zéro reconstruit exactement l’accumulateur et l’opération en attente.
//!
//! Forme texte (JSON) : une liste plate, nombres et symboles mélangés,
//! ex. `[3.0,"+",4.0,"="]`.

use log::debug;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Une entrée du journal : opérande OU symbole d’opération.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entree {
    Nombre(f64),
    Symbole(String),
}

/// Programme sauvegardé (opaque pour l’appelant : on le garde, on le rend).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Programme(Vec<Entree>);

#[derive(Debug, Error)]
pub enum ErreurProgramme {
    #[error("programme illisible: {0}")]
    Json(#[from] serde_json::Error),

    #[error("programme illisible: une liste était attendue")]
    PasUneListe,
}

impl Programme {
    pub(crate) fn depuis_entrees(entrees: Vec<Entree>) -> Self {
        Self(entrees)
    }

    pub fn entrees(&self) -> &[Entree] {
        &self.0
    }

    pub fn est_vide(&self) -> bool {
        self.0.is_empty()
    }

    /// Forme texte compacte.
    ///
    /// NOTE: serde_json écrit NaN/∞ comme `null` ; ces opérandes sont perdus au rechargement.
    pub fn vers_json(&self) -> Result<String, ErreurProgramme> {
        Ok(serde_json::to_string(self)?)
    }

    /// Relit la forme texte.
    ///
    /// - JSON invalide ou racine qui n’est pas une liste => erreur
    /// - dans la liste : nombre => opérande, chaîne => symbole, le reste est ignoré
    pub fn depuis_json(texte: &str) -> Result<Self, ErreurProgramme> {
        let valeur: Value = serde_json::from_str(texte)?;
        let Value::Array(elements) = valeur else {
            return Err(ErreurProgramme::PasUneListe);
        };

        let mut entrees = Vec::with_capacity(elements.len());
        for element in elements {
            match element {
                Value::Number(n) => match n.as_f64() {
                    Some(x) => entrees.push(Entree::Nombre(x)),
                    None => debug!("programme: nombre non représentable ignoré ({n})"),
                },
                Value::String(s) => entrees.push(Entree::Symbole(s)),
                autre => debug!("programme: entrée ignorée ({autre})"),
            }
        }

        Ok(Self(entrees))
    }
}
