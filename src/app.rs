// src/app.rs
//
// Calculatrice — module App (racine)
// ---------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::{touches_des_evenements, Touche};

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier physique, seulement si aucun champ texte n’a le focus
        // (sinon la saisie du programme JSON partirait aussi dans la calculatrice).
        if !ctx.wants_keyboard_input() {
            for touche in touches_du_clavier(ctx) {
                self.appui_touche(touche);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Touches de cette frame (voir `etat::touches_des_evenements`).
fn touches_du_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| touches_des_evenements(&i.events))
}
