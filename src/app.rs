// src/app.rs
//
// Calculatrice π - module App (racine)
// ------------------------------------
// - sous-modules : etat.rs (état, sans vue) + vue.rs (egui)
// - impl eframe::App (natif + web)

pub mod etat;
pub mod vue;

pub use etat::AppPi;

use eframe::egui;

impl eframe::App for AppPi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = remise à zéro des champs (comme "AC")
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.reset_total();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
