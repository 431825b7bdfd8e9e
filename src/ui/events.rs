use egui_macroquad::egui;
use neuroflap::simulation::event_log::EventKind;
use neuroflap::simulation::world::World;

const PANEL_SIZE: egui::Vec2 = egui::vec2(320.0, 220.0);

fn kind_color(kind: EventKind) -> egui::Color32 {
    match kind {
        EventKind::Extinction => egui::Color32::from_rgb(150, 150, 150),
        EventKind::Record => egui::Color32::from_rgb(100, 255, 100),
        EventKind::Fallback => egui::Color32::from_rgb(255, 200, 100),
    }
}

/// Bottom-left overlay with the latest generation turnovers.
pub(super) fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let bottom = egui_ctx.screen_rect().bottom();

    egui::Window::new("Generations")
        .fixed_pos(egui::pos2(10.0, bottom - PANEL_SIZE.y - 10.0))
        .fixed_size(PANEL_SIZE)
        .collapsible(true)
        .show(egui_ctx, |ui| {
            let events = world.event_log.events();
            if events.is_empty() {
                ui.weak("Waiting for the first extinction");
                return;
            }

            egui::Grid::new("event_grid").striped(true).show(ui, |ui| {
                for event in events {
                    let color = kind_color(event.kind);
                    ui.monospace(format!("#{}", event.generation));
                    ui.colored_label(color, event.kind.label());
                    ui.label(&event.description);
                    ui.end_row();
                }
            });
        });
}
