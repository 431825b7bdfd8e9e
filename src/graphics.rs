use macroquad::prelude::*;
use neuroflap::simulation::params::Params;
use neuroflap::simulation::world::World;

/// Screen-space area the play field is drawn into.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// The window minus the right-hand stats panel.
    pub fn current(panel_width: f32) -> Self {
        Self {
            width: (screen_width() - panel_width).max(1.0),
            height: screen_height(),
        }
    }

    fn scale(&self, params: &Params) -> f32 {
        (self.width / params.field_width).min(self.height / params.field_height)
    }
}

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params, viewport: &Viewport) -> Self::Output;
}

impl ToScreen for (f32, f32) {
    type Output = (f32, f32);
    fn to_screen(&self, params: &Params, viewport: &Viewport) -> (f32, f32) {
        let scale = viewport.scale(params);
        (self.0 * scale, self.1 * scale)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params, viewport: &Viewport) -> f32 {
        self * viewport.scale(params)
    }
}

pub fn draw_field(world: &World, viewport: &Viewport) {
    let params = &world.params;
    let (w, h) = (params.field_width, params.field_height).to_screen(params, viewport);
    draw_rectangle(0.0, 0.0, w, h, Color::from_rgba(235, 245, 250, 255));
    draw_rectangle_lines(0.0, 0.0, w, h, 1.0, Color::from_rgba(195, 195, 195, 255));
}

pub fn draw_pipes(world: &World, viewport: &Viewport) {
    let params = &world.params;
    for pipe in world.pipes() {
        let (x, y) = (pipe.x, pipe.y).to_screen(params, viewport);
        let (w, h) = (pipe.width, pipe.height).to_screen(params, viewport);
        draw_rectangle(x, y, w, h, Color::from_rgba(0, 121, 107, 255));
    }
}

pub fn draw_birds(world: &World, viewport: &Viewport) {
    let params = &world.params;
    let radius = params.bird_radius.to_screen(params, viewport);
    for bird in world.live_birds() {
        let (x, y) = (bird.x, bird.y).to_screen(params, viewport);
        draw_circle(x, y, radius, Color::from_rgba(216, 67, 21, 160));
    }
}

pub fn draw_status(world: &World) {
    let lines = [
        format!("Generation: {}", world.generation()),
        format!("Bird count: {}", world.live_birds().len()),
        format!(
            "Best score: {:.1} s",
            world.best_survival().num_milliseconds() as f32 / 1000.0
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 18.0 + i as f32 * 16.0, 18.0, BLACK);
    }
}
