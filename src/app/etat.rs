//! src/app/etat.rs
//!
//! État UI (sans vue) : afficheur + saisie en cours + cerveau + programme sauvegardé.
//!
//! Rôle : transformer les appuis de touches en appels au cerveau, puis
//! re-dessiner le résultat dans l’afficheur.
//!
//! Contrats :
//! - Les chiffres ne touchent QUE l’afficheur.
//! - Une opération pousse d’abord le nombre en cours de saisie (s’il y en a un),
//!   puis envoie le symbole, puis affiche le résultat.
//! - Aucune arithmétique ici : tout passe par le cerveau.

use eframe::egui;
use log::{info, warn};

use crate::noyau::{format_valeur, Cerveau, Programme};

/// Texte de l’afficheur au démarrage et après AC.
const AFFICHEUR_INITIAL: &str = "0";

/// Touche reconnue au clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(&'static str),
    Operation(&'static str),
}

/// Clavier physique -> touche de la calculatrice.
///
/// Les opérateurs ASCII sont traduits vers les symboles des boutons (`*` -> `×`, `-` -> `−`...).
pub fn touche_clavier(c: char) -> Option<Touche> {
    const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

    match c {
        '0'..='9' => Some(Touche::Chiffre(CHIFFRES[(c as u8 - b'0') as usize])),
        '.' | ',' => Some(Touche::Chiffre(".")),
        '+' => Some(Touche::Operation("+")),
        '-' => Some(Touche::Operation("−")),
        '*' | 'x' => Some(Touche::Operation("×")),
        '/' => Some(Touche::Operation("÷")),
        '=' => Some(Touche::Operation("=")),
        '^' => Some(Touche::Operation("^")),
        _ => None,
    }
}

/// Événements egui d’une frame -> touches : caractères tapés + Enter (=) + Escape (C).
pub fn touches_des_evenements(events: &[egui::Event]) -> Vec<Touche> {
    let mut touches = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(texte) => touches.extend(texte.chars().filter_map(touche_clavier)),
            egui::Event::Key {
                key: egui::Key::Enter,
                pressed: true,
                ..
            } => touches.push(Touche::Operation("=")),
            egui::Event::Key {
                key: egui::Key::Escape,
                pressed: true,
                ..
            } => touches.push(Touche::Operation("C")),
            _ => {}
        }
    }
    touches
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- afficheur ---
    pub afficheur: String,
    pub saisie_en_cours: bool,

    // --- noyau ---
    pub cerveau: Cerveau,

    // --- sauvegarde (en mémoire seulement) ---
    pub programme_sauve: Option<Programme>,
    pub programme_texte: String, // forme JSON, éditable dans la vue
    pub erreur: String,          // message si le texte du programme est illisible
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            afficheur: AFFICHEUR_INITIAL.to_string(),
            saisie_en_cours: false,
            cerveau: Cerveau::new(),
            programme_sauve: None,
            programme_texte: String::new(),
            erreur: String::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou point décimal.
    pub fn appui_chiffre(&mut self, chiffre: &str) {
        if self.saisie_en_cours {
            // un seul point par nombre
            if chiffre == "." && self.afficheur.contains('.') {
                return;
            }
            self.afficheur.push_str(chiffre);
        } else if chiffre == "." {
            self.afficheur = "0.".to_string();
        } else {
            self.afficheur = chiffre.to_string();
        }
        self.saisie_en_cours = true;
    }

    /// Opération : pousse la saisie en cours, envoie le symbole, affiche le résultat.
    pub fn appui_operation(&mut self, symbole: &str) {
        if self.saisie_en_cours {
            let valeur = self.valeur_affichee();
            self.cerveau.definir_operande(valeur);
            self.saisie_en_cours = false;
        }
        self.cerveau.effectuer_operation(symbole);
        self.afficher_resultat();
    }

    pub fn appui_touche(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.appui_chiffre(c),
            Touche::Operation(s) => self.appui_operation(s),
        }
    }

    /// Valeur lue dans l’afficheur (texte illisible => 0).
    pub fn valeur_affichee(&self) -> f64 {
        match self.afficheur.parse::<f64>() {
            Ok(v) => v,
            Err(e) => {
                warn!("afficheur illisible {:?} ({e}), lu comme 0", self.afficheur);
                0.0
            }
        }
    }

    fn afficher_resultat(&mut self) {
        self.afficheur = format_valeur(self.cerveau.resultat());
    }

    /* ------------------------ Sauvegarde / restauration ------------------------ */

    pub fn sauver(&mut self) {
        let programme = self.cerveau.programme();
        match programme.vers_json() {
            Ok(texte) => {
                self.programme_texte = texte;
                self.erreur.clear();
            }
            Err(e) => self.erreur = e.to_string(),
        }
        info!("programme sauvegardé ({} entrées)", programme.entrees().len());
        self.programme_sauve = Some(programme);
    }

    /// Sans sauvegarde : rien ne change.
    pub fn restaurer(&mut self) {
        let Some(programme) = &self.programme_sauve else {
            return;
        };
        self.cerveau.set_programme(programme);
        info!("programme restauré ({} entrées)", programme.entrees().len());
        self.saisie_en_cours = false;
        self.afficher_resultat();
    }

    /// Relit `programme_texte` (JSON), le garde comme sauvegarde, puis le restaure.
    pub fn charger_texte(&mut self) {
        match Programme::depuis_json(&self.programme_texte) {
            Ok(programme) => {
                self.erreur.clear();
                self.programme_sauve = Some(programme);
                self.restaurer();
            }
            Err(e) => {
                warn!("{e}");
                self.erreur = e.to_string();
            }
        }
    }

    /* ------------------------ Remise à zéro ------------------------ */

    /// AC : cerveau + afficheur (la sauvegarde est conservée).
    pub fn reset_total(&mut self) {
        self.cerveau.effacer();
        self.afficheur = AFFICHEUR_INITIAL.to_string();
        self.saisie_en_cours = false;
        self.erreur.clear();
    }
}
