// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Aperçu du résultat à chaque modification de l’entrée
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use calculatrice_aurora::noyau::{eval_expression, format_resultat, DemarcheNoyau, EvalError};

/// Touches de fonctions : (libellé, texte inséré).
const FONCTIONS: [(&str, &str); 8] = [
    ("sin", "sin("),
    ("cos", "cos("),
    ("tan", "tan("),
    ("log", "log("),
    ("ln", "ln("),
    ("√", "sqrt("),
    ("|x|", "abs("),
    ("n!", "fact("),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_barre(ui);
                ui.add_space(6.0);

                self.ui_entree(ui);
                self.rafraichir_apercu();
                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice Aurora");

            ui.separator();

            let angle = if self.degres { "DEG" } else { "RAD" };
            if ui
                .add_sized([56.0, 28.0], egui::Button::new(angle))
                .on_hover_text("Degrés / radians pour sin, cos, tan")
                .clicked()
            {
                self.basculer_angle();
                self.focus_entree = true;
            }

            let theme = if self.theme_sombre { "🌙" } else { "☀" };
            if ui
                .add_sized([40.0, 28.0], egui::Button::new(theme))
                .on_hover_text("Thème sombre / clair")
                .clicked()
            {
                self.basculer_theme();
                self.focus_entree = true;
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3+4*sin(90), fact(5), 2^-1")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.egal();
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).size(30.0).monospace());
                });
            });

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Fonctions + constantes
        ui.horizontal_wrapped(|ui| {
            for (label, texte) in FONCTIONS {
                self.bouton_insert(ui, label, texte);
            }
            self.bouton_insert(ui, "π", &std::f64::consts::PI.to_string());
            self.bouton_insert(ui, "e", &std::f64::consts::E.to_string());
            self.bouton_action(ui, "rand", "Nombre aléatoire dans [0, 1)", Action::Aleatoire);
        });

        ui.add_space(6.0);

        // Mémoire
        ui.horizontal(|ui| {
            self.bouton_action(ui, "MC", "Mémoire à zéro", Action::MemoireClear);
            self.bouton_action(ui, "MR", "Rappel mémoire", Action::MemoireRappel);
            self.bouton_action(ui, "M+", "Ajoute l’affichage à la mémoire", Action::MemoirePlus);
            self.bouton_action(ui, "M-", "Retire l’affichage de la mémoire", Action::MemoireMoins);
        });

        ui.add_space(6.0);

        // Pavé numérique
        egui::Grid::new("pave_numerique_aurora")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface l’entrée", Action::ClearEntree);
                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                self.bouton_action(ui, "%", "Dernier nombre / 100", Action::Pourcent);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "÷", "÷");
                self.bouton_insert(ui, "^", "^");
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "×", "×");
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "-", "-");
                ui.label("");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                ui.label("");
                self.bouton_insert(ui, "+", "+");
                self.bouton_action(ui, "=", "Évalue", Action::Egal);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel: Option<usize> = None;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .default_open(true)
            .show(ui, |ui| {
                for (i, h) in self.historique.iter().enumerate() {
                    let texte = format!("{} = {}", h.expression, h.resultat);
                    if ui.add(egui::Button::new(texte).frame(false)).clicked() {
                        rappel = Some(i);
                    }
                }

                if !self.historique.is_empty() && ui.button("Vider l’historique").clicked() {
                    self.clear_historique();
                    tracing::debug!("historique vidé");
                }
            });

        if let Some(i) = rappel {
            self.rappeler_historique(i);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::Backspace => self.backspace_entree(),
                Action::Pourcent => self.appliquer_pourcent(),
                Action::Egal => self.egal(),
                Action::Aleatoire => self.inserer_aleatoire(),
                Action::MemoireClear => self.memoire_clear(),
                Action::MemoireRappel => self.memoire_rappel(),
                Action::MemoirePlus => self.memoire_plus(),
                Action::MemoireMoins => self.memoire_moins(),
            }
            if matches!(
                action,
                Action::MemoireClear | Action::MemoirePlus | Action::MemoireMoins
            ) {
                tracing::debug!(memoire = self.memoire, "mémoire");
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert);
        }
    }

    /// Réévalue l’aperçu si l’entrée ou le mode d’angle a changé.
    fn rafraichir_apercu(&mut self) {
        let cle = (self.entree.clone(), self.degres);
        if self.apercu_pour.as_ref() == Some(&cle) {
            return;
        }
        self.apercu_pour = Some(cle);

        match self.evaluer() {
            // NaN : l’écran affiche 0
            Ok((v, d)) if v.is_nan() => self.set_affichage("0", d),
            Ok((v, d)) => self.set_affichage(format_resultat(v), d),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// "=" : évalue via le noyau, puis historique + résultat dans l’entrée.
    fn egal(&mut self) {
        match self.evaluer() {
            Ok((v, d)) => {
                let affiche = format_resultat(v);
                tracing::debug!(expression = %self.entree, resultat = %affiche, "=");
                self.set_affichage(affiche.clone(), d);
                self.valider_resultat(&affiche);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }

    fn evaluer(&self) -> Result<(f64, Demarche), EvalError> {
        let (v, d_noyau): (f64, DemarcheNoyau) = eval_expression(&self.entree, self.mode_angle())?;
        let d_ui = Demarche {
            jetons: d_noyau.jetons,
            rpn: d_noyau.rpn,
        };
        Ok((v, d_ui))
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    Backspace,
    Pourcent,
    Egal,
    Aleatoire,
    MemoireClear,
    MemoireRappel,
    MemoirePlus,
    MemoireMoins,
}
