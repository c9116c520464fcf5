use crate::app::App;
use crate::config::Config;
use crate::render::{BeerPanel, BreweryPanel};

use eframe::CreationContext;
use egui::{CollapsingHeader, TextEdit, Ui};
use std::sync::Arc;
use tokio::runtime::Runtime;

const TITLE: &str = "Beer test";
const FIELD_WIDTH: f32 = 160.0;

pub fn init_with_canvas(config: &Config) -> Result<(), String> {
    // Requests run here while the window owns the main thread
    let rt = Runtime::new().map_err(|e| e.to_string())?;
    let app = App::from_config(config, rt.handle().clone())?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };

    eframe::run_native(TITLE, native_options, Box::new(|cc| {
        Ok(Box::new(Canvas::new(cc, app, rt)))
    })).map_err(|e| e.to_string())
}

pub struct Canvas {
    app: App,
    // Kept alive for the lifetime of the window
    _runtime: Runtime,
}

impl Canvas {
    pub fn new(cc: &CreationContext<'_>, mut app: App, runtime: Runtime)
               -> Self {
        // Redraw as soon as a response comes back
        let ctx = cc.egui_ctx.clone();
        app.set_notifier(Arc::new(move || ctx.request_repaint()));

        Self {
            app: app,
            _runtime: runtime,
        }
    }

    fn query_form(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let input = self.app.input_mut();

            ui.add(TextEdit::singleline(&mut input.latitude)
                   .hint_text("Latitude")
                   .desired_width(FIELD_WIDTH));
            ui.add(TextEdit::singleline(&mut input.longitude)
                   .hint_text("Longitude")
                   .desired_width(FIELD_WIDTH));
            ui.add(TextEdit::singleline(&mut input.run_count)
                   .hint_text("number of runs")
                   .desired_width(FIELD_WIDTH));

            if ui.button("Find route").clicked() {
                self.app.find_path();
            }
        });
    }

    fn brewery_panel(ui: &mut Ui, panel: &BreweryPanel) {
        CollapsingHeader::new("Visited breweries")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(panel.header.as_str());
                ui.separator();
                for line in &panel.lines {
                    ui.label(line.as_str());
                }
                ui.separator();
                ui.label(panel.footer.as_str());
            });
    }

    fn beer_panel(ui: &mut Ui, panel: &BeerPanel) {
        CollapsingHeader::new("Beer types collected")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(panel.header.as_str());
                ui.separator();
                for line in &panel.lines {
                    ui.label(line.as_str());
                }
            });
    }
}

impl eframe::App for Canvas {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.update();
        let panels = self.app.panels();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(TITLE);
            });
            ui.add_space(16.0);

            self.query_form(ui);
            ui.add_space(16.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                Canvas::brewery_panel(ui, &panels.breweries);
                Canvas::beer_panel(ui, &panels.beer);
            });
        });
    }
}
