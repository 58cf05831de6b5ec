//! Main application structure

use eframe::egui::{self, Color32, RichText};
use leafdx_app::config::Config;
use leafdx_app::startup::load_model;
use leafdx_vision::OnnxModel;

use crate::diagnose_panel::DiagnosePanel;

/// Outcome of the one-time model load
pub enum ModelState {
    Ready(OnnxModel),
    /// Startup failed; prediction stays disabled for the life of the process
    Failed(String),
}

/// Main application state
pub struct LeafdxApp {
    /// Application configuration
    config: Config,
    /// Model loaded at startup
    model: ModelState,
    /// Upload + result panel
    diagnose_panel: DiagnosePanel,
}

impl LeafdxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load_or_default();

        let model = match load_model(&config) {
            Ok(model) => ModelState::Ready(model),
            Err(e) => ModelState::Failed(e.to_string()),
        };

        Self {
            config,
            model,
            diagnose_panel: DiagnosePanel::new(),
        }
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ui.heading("About This Project");
        ui.add_space(8.0);
        ui.label(
            "This application uses a convolutional neural network to detect common \
             diseases in potato crops from leaf images.",
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        ui.label(RichText::new("Model:").strong());
        match &self.model {
            ModelState::Ready(model) => {
                ui.label(
                    RichText::new(model.path().display().to_string())
                        .monospace()
                        .small(),
                );
                ui.label(format!("Input layout: {}", model.layout()));
                ui.add_space(8.0);
                ui.label(
                    RichText::new("The model is loaded and the app is ready!")
                        .color(Color32::from_rgb(76, 175, 80)),
                );
            }
            ModelState::Failed(_) => {
                ui.label(
                    RichText::new(self.config.model_path.display().to_string())
                        .monospace()
                        .small(),
                );
                ui.add_space(8.0);
                ui.label(RichText::new("Model not loaded").color(Color32::from_rgb(244, 67, 54)));
            }
        }
    }
}

impl eframe::App for LeafdxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("about_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        let Self {
            config,
            model,
            diagnose_panel,
        } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Potato Crop Disease Detector").size(26.0));
                ui.label("Upload an image of a potato leaf to detect if it's healthy or has a disease.");
            });
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(12.0);

            match model {
                ModelState::Ready(model) => diagnose_panel.ui(ui, &*model, config),
                ModelState::Failed(message) => {
                    ui.label(
                        RichText::new(format!(
                            "Error: the model file '{}' could not be loaded.",
                            config.model_path.display()
                        ))
                        .strong()
                        .color(Color32::from_rgb(244, 67, 54)),
                    );
                    ui.add_space(4.0);
                    ui.label(format!("Details: {}", message));
                }
            }
        });
    }
}
