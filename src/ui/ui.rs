use egui_macroquad::egui;
use neuroflap::simulation::world::World;

pub struct UIState {
    pub stats_panel_width: f32,
    pub paused: bool,
    pub fast: bool,
    pub reset_requested: bool,
    pub show_events: bool,
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new(fast: bool) -> Self {
        Self {
            stats_panel_width: 300.0,
            paused: false,
            fast,
            reset_requested: false,
            show_events: true,
            status_message: None,
        }
    }
}

pub fn draw_ui(state: &mut UIState, world: &World) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, world);

        if state.show_events {
            super::events::draw_events_panel(egui_ctx, world);
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
