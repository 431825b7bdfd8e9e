use egui_macroquad::egui;
use macroquad::prelude::*;
use neuroflap::simulation::mutation::Perturbation;
use neuroflap::simulation::params::Params;

/// Start screen. Returns `true` once the user starts a run.
pub fn draw_genesis_screen(params: &mut Params) -> bool {
    clear_background(LIGHTGRAY);

    let mut start_simulation = is_key_pressed(KeyCode::Enter);

    egui_macroquad::ui(|egui_ctx| {
        egui::CentralPanel::default().show(egui_ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Neuroevolution - Configuration");
                ui.add_space(10.0);

                ui.collapsing("Population", |ui| {
                    ui.add(egui::Slider::new(&mut params.population, 1..=1000).text("Birds"));
                    ui.add(
                        egui::Slider::new(&mut params.hidden_size, 1..=16).text("Hidden neurons"),
                    );
                });

                ui.collapsing("Pipes", |ui| {
                    let max_space = params.field_height - params.min_pipe_height * 2.0;
                    ui.add(
                        egui::Slider::new(&mut params.pipe_space, 20.0..=max_space)
                            .text("Gap size"),
                    );
                    ui.add(
                        egui::Slider::new(&mut params.spawn_interval, 60..=600)
                            .text("Ticks between pipes"),
                    );
                });

                ui.collapsing("Mutation", |ui| {
                    ui.add(
                        egui::Slider::new(&mut params.mutation.probability, 0.0..=1.0)
                            .text("Per-weight probability"),
                    );
                    match &mut params.mutation.perturbation {
                        Perturbation::UniformOffset { low, high } => {
                            ui.label("Add an offset drawn from [low, high)");
                            ui.add(egui::Slider::new(low, -2.0..=2.0).text("Low"));
                            ui.add(egui::Slider::new(high, -2.0..=2.0).text("High"));
                        }
                        Perturbation::Resample { low, high } => {
                            ui.label("Replace with a value drawn from [low, high)");
                            ui.add(egui::Slider::new(low, -2.0..=2.0).text("Low"));
                            ui.add(egui::Slider::new(high, -2.0..=2.0).text("High"));
                        }
                    }
                });

                ui.checkbox(&mut params.fast, "Fast mode");

                ui.add_space(10.0);
                if let Err(e) = params.validate() {
                    ui.colored_label(egui::Color32::from_rgb(220, 60, 60), e.to_string());
                } else if ui.button("Start evolution (Enter)").clicked() {
                    start_simulation = true;
                }
            });
        });
    });

    egui_macroquad::draw();

    start_simulation && params.validate().is_ok()
}
