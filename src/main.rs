use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use macroquad::prelude::*;
use neuroflap::simulation::driver::TickDriver;
use neuroflap::simulation::params::Params;
use neuroflap::simulation::world::World;

mod graphics;
mod ui;

#[derive(Parser)]
#[command(name = "neuroflap")]
#[command(version)]
#[command(about = "Watch a population of birds learn to fly through pipes")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start in fast mode
    #[arg(long)]
    fast: bool,

    /// Birds per generation
    #[arg(short, long)]
    population: Option<usize>,
}

fn load_params(cli: &Cli) -> anyhow::Result<Params> {
    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)?,
        None => Params::default(),
    };
    params.apply_overrides(cli.population, cli.fast)?;
    Ok(params)
}

#[macroquad::main("Neuroflap")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut params = match load_params(&cli) {
        Ok(params) => params,
        Err(e) => {
            log::error!("{e:#}");
            std::process::exit(1);
        }
    };

    loop {
        if ui::draw_genesis_screen(&mut params) {
            break;
        }
        next_frame().await;
    }

    log::info!(
        "starting evolution: {} birds, gap {}, mutation p={}",
        params.population,
        params.pipe_space,
        params.mutation.probability
    );

    let mut ui_state = ui::UIState::new(params.fast);
    let mut driver = TickDriver::new(params.active_tick_rate());
    let mut world = World::new(params.clone());
    driver.start();

    loop {
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            world = World::new(params.clone());
            ui_state.status_message = Some("Evolution restarted".to_string());
            log::info!("evolution reset");
        }

        if ui_state.fast != world.params.fast {
            world.params.fast = ui_state.fast;
            driver.set_rate(world.params.active_tick_rate());
        }

        if ui_state.paused && driver.is_running() {
            driver.stop();
        } else if !ui_state.paused && !driver.is_running() {
            driver.start();
        }

        let elapsed = Duration::from_secs_f32(get_frame_time());
        let finished = driver.run(&mut world, elapsed);
        if let Some(last) = finished.last() {
            ui_state.status_message = Some(format!(
                "Generation {} lasted {} ticks",
                last.generation, last.best_age
            ));
        }

        clear_background(WHITE);
        let viewport = graphics::Viewport::current(ui_state.stats_panel_width);
        graphics::draw_field(&world, &viewport);
        graphics::draw_pipes(&world, &viewport);
        graphics::draw_birds(&world, &viewport);
        graphics::draw_status(&world);

        ui::draw_ui(&mut ui_state, &world);
        ui::process_egui();

        next_frame().await;
    }
}
