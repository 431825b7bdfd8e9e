// UI module - egui overlay drawn on top of the macroquad field

mod events;
mod genesis;
mod nn;
mod stats;
mod ui;

pub use genesis::draw_genesis_screen;
pub use ui::{UIState, draw_ui, process_egui};
