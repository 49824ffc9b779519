// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - Même AppPi (etat.rs) pour natif + wasm
// - Enter calcule (quand un champ a le focus)
// - Résultat en monospace, erreur en couleur d’erreur

use eframe::egui;

use calculatrice_pi::noyau::parametres::{ITERATIONS_MAX, PRECISION_MAX};
use calculatrice_pi::noyau::Division;

use super::etat::AppPi;

impl AppPi {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice π : série de Bellard");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let mut enter = false;

        egui::Grid::new("parametres_pi")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Itérations :");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.iterations)
                        .desired_width(120.0)
                        .hint_text(format!("0..={ITERATIONS_MAX}"))
                        .id_source("iterations_edit")
                        .code_editor(),
                );
                if self.focus_entree {
                    resp.request_focus();
                    self.focus_entree = false;
                }
                enter |= resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                ui.label("Précision (bits) :");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.precision)
                        .desired_width(120.0)
                        .hint_text(format!("0..={PRECISION_MAX}"))
                        .id_source("precision_edit")
                        .code_editor(),
                );
                enter |= resp.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                ui.end_row();

                ui.label("Division :");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut self.division, Division::Native, "native (f64)")
                        .on_hover_text("Quotient f64 puis élargi à la précision choisie");
                    ui.radio_value(&mut self.division, Division::Exacte, "exacte")
                        .on_hover_text("Quotient arrondi une seule fois à la précision choisie");
                });
                ui.end_row();
            });

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let go = ui.add_sized([80.0, 30.0], egui::Button::new("Calculer"));
            if go.clicked() || enter {
                self.calculer();
            }

            ui.separator();

            if ui
                .add_sized([56.0, 30.0], egui::Button::new("CLR"))
                .on_hover_text("Efface résultat + erreur")
                .clicked()
            {
                self.clear_resultats();
            }
            if ui
                .add_sized([56.0, 30.0], egui::Button::new("AC"))
                .on_hover_text("Remise à zéro totale")
                .clicked()
            {
                self.reset_total();
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("π ≈");

        match &self.resultat {
            Some(r) => {
                Self::champ_monospace(ui, "pi_out", &r.valeur, 3);
                ui.add_space(4.0);
                ui.small(format!(
                    "{} itérations, {} bits, {} chiffres après la virgule, division {}",
                    r.iterations,
                    r.precision,
                    r.precision,
                    match r.division {
                        Division::Native => "native",
                        Division::Exacte => "exacte",
                    }
                ));
            }
            None => {
                ui.monospace("…");
            }
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // lecture seule, cadre + label monospace (retour à la ligne pour les grandes précisions)
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.add(egui::Label::new(egui::RichText::new(contenu).monospace()).wrap());
                });
            });
    }
}
