// src/app/vue.rs
//
// Vue (UI egui) — natif
// ---------------------
// Objectifs :
// - Clavier : Enter évalue, Backspace efface (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Panneau conversions de bases (bin/dec/hex) indépendant de l'évaluateur
//
// Aucune sémantique ici : la vue appelle le noyau et dépose le résultat
// (ou le message d'erreur) dans l'état.

use eframe::egui;

use super::etat::{AppCalc, Demarche, ModeConversion};
use crate::noyau;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_conversions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, -2^2, sqrt(sin(0)^2+cos(0)^2), log2(8)")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / fonctions / DEL / C / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + décimales
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.decimales as u32;
            let resp = ui.add(egui::DragValue::new(&mut d).speed(1).range(0..=17));
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        // Touches rapides + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(");
            self.bouton_insert(ui, ")", ")");

            self.bouton_insert(ui, "+", "+");
            self.bouton_insert(ui, "-", "-");
            self.bouton_insert(ui, "*", "*");
            self.bouton_insert(ui, "/", "/");
            self.bouton_insert(ui, "%", "%");
            self.bouton_insert(ui, "^", "^");
            self.bouton_insert(ui, "!", "!");
            self.bouton_insert(ui, "~", "~");

            ui.separator();

            self.bouton_insert(ui, "pi", "pi");
            self.bouton_insert(ui, "sqrt", "sqrt(");
            self.bouton_insert(ui, "sin", "sin(");
            self.bouton_insert(ui, "cos", "cos(");
            self.bouton_insert(ui, "tan", "tan(");
            self.bouton_insert(ui, "asin", "asin(");
            self.bouton_insert(ui, "acos", "acos(");
            self.bouton_insert(ui, "atan", "atan(");
            self.bouton_insert(ui, "exp", "exp(");
            self.bouton_insert(ui, "log", "log(");
            self.bouton_insert(ui, "log2", "log2(");

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "/", "/");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d'un coup les motifs utiles
    /// ("sqrt(", "log2(", "pi", etc.).
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        // Retire tokens connus (les plus longs d'abord)
        for pat in [
            "asin(", "acos(", "atan(", "sqrt(", "log2(", "sin(", "cos(", "tan(", "exp(", "log(",
            "pi",
        ] {
            if self.entree.ends_with(pat) {
                for _ in 0..pat.chars().count() {
                    self.entree.pop();
                }
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                return;
            }
        }

        // Sinon : un caractère
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_conversions(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Conversions de bases")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("conv_mode")
                        .selected_text(self.conv_mode.libelle())
                        .show_ui(ui, |ui| {
                            for mode in ModeConversion::TOUS {
                                ui.selectable_value(&mut self.conv_mode, mode, mode.libelle());
                            }
                        });

                    ui.add(
                        egui::TextEdit::singleline(&mut self.conv_entree)
                            .desired_width(160.0)
                            .hint_text("valeur")
                            .id_source("conv_entree_edit"),
                    );

                    if ui.button("Convertir").clicked() {
                        self.convertir();
                    }
                });

                if !self.conv_erreur.is_empty() {
                    ui.colored_label(ui.visuals().error_fg_color, &self.conv_erreur);
                } else if !self.conv_sortie.is_empty() {
                    Self::champ_monospace(ui, "conv_out", &self.conv_sortie, 1);
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Tampon", "demarche_tampon", &self.demarche.tampon);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            // Les espaces sont insignifiants pour le noyau : insertion brute.
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /// Évalue l'expression via le noyau, puis dépose résultat/démarche dans
    /// l'état UI. Les erreurs typées s'affichent via leur message Display.
    fn eval_via_noyau(&mut self) {
        match noyau::evaluer_detaille(&self.entree) {
            Ok((valeur, d_noyau)) => {
                let resultat = format!("{valeur:.prec$}", prec = self.decimales);
                let d_ui = Demarche {
                    tampon: d_noyau.tampon,
                    jetons: d_noyau.jetons,
                    note: d_noyau.note,
                };
                self.set_resultat(resultat, d_ui);
            }
            Err(e) => {
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Applique la conversion de bases sélectionnée.
    fn convertir(&mut self) {
        use crate::noyau::bases;

        let resultat = match self.conv_mode {
            ModeConversion::BinVersDec => bases::bin_vers_dec(&self.conv_entree),
            ModeConversion::BinVersHex => bases::bin_vers_hex(&self.conv_entree),
            ModeConversion::DecVersBin => bases::dec_vers_bin(&self.conv_entree),
            ModeConversion::DecVersHex => bases::dec_vers_hex(&self.conv_entree),
            ModeConversion::HexVersBin => bases::hex_vers_bin(&self.conv_entree),
            ModeConversion::HexVersDec => bases::hex_vers_dec(&self.conv_entree),
        };

        match resultat {
            Ok(sortie) => {
                self.conv_erreur.clear();
                self.conv_sortie = sortie;
            }
            Err(e) => {
                self.conv_sortie.clear();
                self.conv_erreur = e.to_string();
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
