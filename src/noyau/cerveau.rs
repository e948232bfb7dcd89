//! Noyau — cerveau de la calculatrice (accumulateur + opération en attente + journal)
//!
//! Style "calculatrice de poche" : pas de priorité d’opérateurs, chaque opération
//! s’applique tout de suite, de gauche à droite.
//!
//! Contrats :
//! - aucune opération n’échoue ni ne panique (NaN/∞ se propagent tels quels)
//! - au plus UNE opération binaire en attente
//! - tout ce qui entre est journalisé AVANT exécution (y compris les symboles inconnus)

use log::{debug, trace};

use super::operation::{chercher, Operation};
use super::programme::{Entree, Programme};

/// Opération binaire dont on attend le second opérande.
#[derive(Clone, Copy, Debug)]
struct OperationEnAttente {
    fonction: fn(f64, f64) -> f64,
    premier_operande: f64,
}

#[derive(Clone, Debug, Default)]
pub struct Cerveau {
    accumulateur: f64,
    en_attente: Option<OperationEnAttente>,
    journal: Vec<Entree>,
}

impl Cerveau {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definir_operande(&mut self, operande: f64) {
        trace!("operande {operande}");
        self.accumulateur = operande;
        self.journal.push(Entree::Nombre(operande));
    }

    pub fn effectuer_operation(&mut self, symbole: &str) {
        self.journal.push(Entree::Symbole(symbole.to_string()));

        let Some(operation) = chercher(symbole) else {
            debug!("symbole inconnu {symbole:?} : journalisé, ignoré");
            return;
        };
        trace!("operation {symbole:?} -> {operation:?}");

        match operation {
            Operation::Constante(valeur) => self.accumulateur = valeur,
            Operation::Unaire(f) => self.accumulateur = f(self.accumulateur),
            Operation::Carre => self.accumulateur *= self.accumulateur,
            Operation::Binaire(f) => {
                self.executer_en_attente();
                self.en_attente = Some(OperationEnAttente {
                    fonction: f,
                    premier_operande: self.accumulateur,
                });
            }
            Operation::Egal => self.executer_en_attente(),
            // Le "C" vient d’être journalisé : effacer() le retire avec le reste.
            Operation::Effacer => self.effacer(),
        }
    }

    fn executer_en_attente(&mut self) {
        if let Some(op) = self.en_attente.take() {
            self.accumulateur = (op.fonction)(op.premier_operande, self.accumulateur);
        }
    }

    /// Remise à zéro directe (sans passer par la table).
    pub fn effacer(&mut self) {
        self.accumulateur = 0.0;
        self.en_attente = None;
        self.journal.clear();
    }

    pub fn resultat(&self) -> f64 {
        self.accumulateur
    }

    pub fn a_operation_en_attente(&self) -> bool {
        self.en_attente.is_some()
    }

    /// Photo du journal (copie).
    pub fn programme(&self) -> Programme {
        Programme::depuis_entrees(self.journal.clone())
    }

    /// Remet à zéro puis rejoue le programme entrée par entrée.
    pub fn set_programme(&mut self, programme: &Programme) {
        self.effacer();
        for entree in programme.entrees() {
            match entree {
                Entree::Nombre(x) => self.definir_operande(*x),
                Entree::Symbole(s) => self.effectuer_operation(s),
            }
        }
    }
}
