//! Upload and result panel

use eframe::egui::{self, Color32, ColorImage, RichText, TextureHandle, Ui, Vec2};
use image::DynamicImage;
use leafdx_app::app::DiagnosisService;
use leafdx_app::config::Config;
use leafdx_app::scanner::{load_image, IMAGE_EXTENSIONS};
use leafdx_domain::{DiagnosisReport, Verdict};
use leafdx_vision::Model;
use std::path::PathBuf;

const HEALTHY_COLOR: Color32 = Color32::from_rgb(76, 175, 80);
const DISEASE_COLOR: Color32 = Color32::from_rgb(244, 67, 54);

pub struct DiagnosePanel {
    /// Path of the uploaded image
    selected_image: Option<PathBuf>,
    /// Decoded upload, consumed by the classifier
    image: Option<DynamicImage>,
    /// Preview texture of the upload
    preview_texture: Option<TextureHandle>,
    /// Last diagnosis for the current upload
    report: Option<DiagnosisReport>,
    error: Option<String>,
}

impl DiagnosePanel {
    pub fn new() -> Self {
        Self {
            selected_image: None,
            image: None,
            preview_texture: None,
            report: None,
            error: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, model: &dyn Model, config: &Config) {
        ui.columns(2, |columns| {
            self.render_upload(&mut columns[0]);
            self.render_results(&mut columns[1], model, config);
        });
    }

    fn render_upload(&mut self, ui: &mut Ui) {
        if ui.button("Choose a leaf image...").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Leaf image", IMAGE_EXTENSIONS)
                .pick_file()
            {
                self.select_image(ui.ctx(), path);
            }
        }

        ui.add_space(8.0);

        if let Some(ref texture) = self.preview_texture {
            let size = Self::calc_preview_size(texture, ui.available_width(), 360.0);
            ui.add(egui::Image::new(texture).fit_to_exact_size(size));
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Image successfully uploaded. Click 'Predict Disease' to analyze.")
                        .italics()
                        .color(Color32::GRAY),
                );
            });
        }

        if let Some(ref path) = self.selected_image {
            if let Some(file_name) = path.file_name() {
                ui.label(format!("File: {}", file_name.to_string_lossy()));
            }
        }
    }

    fn select_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        self.report = None;
        self.error = None;
        self.preview_texture = None;
        self.image = None;

        match load_image(&path) {
            Ok(image) => {
                let rgba = image.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                self.preview_texture = Some(ctx.load_texture(
                    format!("upload_{}", path.display()),
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
                self.image = Some(image);
            }
            Err(e) => self.error = Some(e.to_string()),
        }

        self.selected_image = Some(path);
    }

    /// Scale to fit within max dimensions while preserving aspect ratio
    fn calc_preview_size(texture: &TextureHandle, max_width: f32, max_height: f32) -> Vec2 {
        let original_size = texture.size_vec2();
        let scale = (max_width / original_size.x).min(max_height / original_size.y);
        original_size * scale
    }

    fn render_results(&mut self, ui: &mut Ui, model: &dyn Model, config: &Config) {
        ui.heading("Prediction Results");
        ui.label("The analysis of the leaf image will be displayed here.");
        ui.add_space(10.0);

        let Some(image) = self.image.as_ref() else {
            if let Some(ref error) = self.error {
                ui.colored_label(DISEASE_COLOR, error);
            } else {
                ui.label(
                    RichText::new("Please upload an image to get started.")
                        .color(Color32::LIGHT_BLUE),
                );
            }
            return;
        };

        let button = egui::Button::new(RichText::new("Predict Disease").size(16.0));
        if ui.add(button).clicked() {
            match DiagnosisService::new(model, config).diagnose_image(image) {
                Ok(report) => {
                    self.report = Some(report);
                    self.error = None;
                }
                Err(e) => {
                    self.report = None;
                    self.error = Some(e.to_string());
                }
            }
        }

        ui.add_space(10.0);

        if let Some(ref error) = self.error {
            ui.colored_label(DISEASE_COLOR, error);
        }

        if let Some(ref report) = self.report {
            Self::render_report(ui, report);
        }
    }

    fn render_report(ui: &mut Ui, report: &DiagnosisReport) {
        let Some(entry) = report.diagnosis.filter(|_| report.is_classified()) else {
            ui.colored_label(DISEASE_COLOR, DiagnosisReport::UNCLASSIFIED_MESSAGE);
            return;
        };

        let accent = if report.verdict == Verdict::Healthy {
            HEALTHY_COLOR
        } else {
            DISEASE_COLOR
        };

        egui::Frame::new()
            .fill(Color32::from_rgb(249, 249, 249))
            .stroke(egui::Stroke::new(2.0, accent))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(
                    RichText::new(format!("Prediction: {}", entry.title))
                        .size(22.0)
                        .strong()
                        .color(accent),
                );
                ui.label(
                    RichText::new(format!(
                        "Confidence: {:.2}%",
                        report.prediction.confidence * 100.0
                    ))
                    .size(18.0)
                    .color(Color32::from_rgb(51, 51, 51)),
                );
            });

        ui.add_space(10.0);
        ui.label(RichText::new("More Information").strong().size(16.0));
        ui.label(format!("Description: {}", entry.description));

        ui.add_space(8.0);
        ui.label(RichText::new("Recommended Actions").strong().size(16.0));
        for remedy in entry.remedies {
            ui.label(format!("• {}", remedy));
        }
    }
}
