// src/app.rs
//
// Calculatrice Aurora — module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB), persistence comprise
//
// Important:
// - La gestion Enter est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    /// Restaure réglages + mémoire + historique depuis la sauvegarde eframe (si présente).
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        tracing::info!(
            degres = app.degres,
            historique = app.historique.len(),
            "état restauré"
        );
        app
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer l’entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        ctx.set_visuals(if self.theme_sombre {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}
