// src/main.rs
//
// Calculatrice scientifique — point d'entrée natif
// ------------------------------------------------
// But:
// - eframe::run_native + NativeOptions
// - le noyau (src/noyau) reste une bibliothèque pure : aucune E/S,
//   aucun état global ; seul ce frontal fait de l'affichage.

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice scientifique";

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 740.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
