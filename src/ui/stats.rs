use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use neuroflap::simulation::event_log::EventKind;
use neuroflap::simulation::world::World;

use super::ui::UIState;

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &mut UIState, world: &World) {
    egui::SidePanel::right("stats_panel")
        .exact_width(state.stats_panel_width)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Evolution Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });
            ui.checkbox(&mut state.fast, "Fast mode");
            ui.checkbox(&mut state.show_events, "Show events");

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label(format!("Generation: {}", world.generation()));
            ui.label(format!(
                "Alive: {} / {}",
                world.live_birds().len(),
                world.params.population
            ));
            ui.label(format!("Ticks this generation: {}", world.tick_count()));
            ui.label(format!(
                "Best survival: {:.1} s / {} ticks",
                world.best_survival().num_milliseconds() as f32 / 1000.0,
                world.best_age()
            ));
            ui.label(format!(
                "Mean best age (last 10): {:.1}",
                world.stats.recent_mean_best_age(10)
            ));
            if let Some(last) = world.stats.last() {
                ui.label(format!(
                    "Last generation: best {} / mean {:.1} ticks",
                    last.best_age, last.mean_age
                ));
                ui.label(format!("Brain diversity: {:.3}", last.diversity));
            }
            if let Some(record) = world.event_log.latest(EventKind::Record) {
                ui.label(format!("Last record: generation {}", record.generation));
            }

            ui.separator();
            ui.label("Survival per generation");
            draw_age_plot(ui, world);

            ui.separator();
            ui.collapsing("Oldest bird's brain", |ui| {
                match world.live_birds().iter().max_by_key(|bird| bird.age) {
                    Some(bird) => super::nn::draw_neural_network(ui, bird),
                    None => {
                        ui.label("No bird alive");
                    }
                }
            });
        });
}

fn draw_age_plot(ui: &mut egui::Ui, world: &World) {
    if world.stats.history.is_empty() {
        ui.label("Waiting for the first generation to finish...");
        return;
    }

    let best: PlotPoints = world.stats.best_age_series().into();
    let mean: PlotPoints = world.stats.mean_age_series().into();

    Plot::new("age_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nGeneration: {:.0}\nTicks: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(best)
                    .color(egui::Color32::from_rgb(255, 160, 60))
                    .name("Best age"),
            );
            plot_ui.line(
                Line::new(mean)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Mean age"),
            );
        });
}
