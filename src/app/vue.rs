// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, pavé 4 colonnes
// - Afficheur en monospace, marqueur quand une opération binaire attend
// - Panneau "Programme" : forme JSON de la sauvegarde, éditable + rechargeable
//
// La vue ne fait AUCUN calcul : chaque bouton appelle une méthode de etat.rs.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Programme;

const TAILLE_TOUCHE: [f32; 2] = [56.0, 40.0];
const TAILLE_AFFICHEUR: f32 = 32.0;

/// Pavé principal (4 colonnes). Les chiffres et "." vont à l’afficheur, le reste au cerveau.
const PAVE: [[&str; 4]; 4] = [
    ["7", "8", "9", "÷"],
    ["4", "5", "6", "×"],
    ["1", "2", "3", "−"],
    ["0", ".", "=", "+"],
];

/// Pavé scientifique (symboles de la table du noyau).
const PAVE_SCIENTIFIQUE: [[&str; 5]; 2] = [
    ["π", "e", "+/-", "√", "^"],
    ["sin", "cos", "tan", "log", "C"],
];

fn est_chiffre(touche: &str) -> bool {
    touche == "." || touche.chars().all(|c| c.is_ascii_digit())
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);

                self.ui_pave_scientifique(ui);
                ui.add_space(4.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_sauvegarde(ui);
            });
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        let attente = self.cerveau.a_operation_en_attente();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.afficheur)
                            .monospace()
                            .size(TAILLE_AFFICHEUR),
                    );
                    if attente {
                        ui.weak("…");
                    }
                });
            });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE_SCIENTIFIQUE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_principal")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(4.0);
        let ac = ui
            .add_sized(TAILLE_TOUCHE, egui::Button::new("AC"))
            .on_hover_text("Remise à zéro totale (la sauvegarde est gardée)");
        if ac.clicked() {
            self.reset_total();
        }
    }

    fn ui_sauvegarde(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_sized(TAILLE_TOUCHE, egui::Button::new("Save"))
                .on_hover_text("Garde le programme courant")
                .clicked()
            {
                self.sauver();
            }

            let restore = ui.add_enabled(
                self.programme_sauve.is_some(),
                egui::Button::new("Restore").min_size(TAILLE_TOUCHE.into()),
            );
            if restore
                .on_hover_text("Rejoue le programme sauvegardé")
                .clicked()
            {
                self.restaurer();
            }
        });

        egui::CollapsingHeader::new("Programme")
            .default_open(false)
            .show(ui, |ui| {
                if self.programme_sauve.as_ref().is_some_and(Programme::est_vide) {
                    ui.weak("(programme sauvegardé vide)");
                }

                ui.add(
                    egui::TextEdit::multiline(&mut self.programme_texte)
                        .desired_width(ui.available_width())
                        .desired_rows(3)
                        .hint_text(r#"Ex: [3.0, "+", 4.0, "="]"#)
                        .code_editor(),
                );

                if ui.button("Charger").clicked() {
                    self.charger_texte();
                }

                if !self.erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: &str) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(touche));
        if !resp.clicked() {
            return;
        }

        if est_chiffre(touche) {
            self.appui_chiffre(touche);
        } else {
            self.appui_operation(touche);
        }
    }
}
