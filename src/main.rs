use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use fern::Dispatch;
use field_city_flow::{
    Key, MacroquadCanvas, SimConfig, World, handle_key, log_to_terminal, render,
};
use log::{LevelFilter, info};
use macroquad::prelude::{KeyCode, get_keys_pressed, is_key_pressed, next_frame};
use macroquad::window::Conf;
use rand::SeedableRng;
use rand::rngs::SmallRng;

#[derive(Parser, Debug)]
#[command(name = "field-city-flow")]
#[command(about = "Animated field and city flow visualization", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for entity and building randomness (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Initial flow speed, in 0.2 steps
    #[arg(long, default_value_t = 4)]
    speed_steps: u32,

    /// Run this many frames without opening a window, then exit
    #[arg(long)]
    headless: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// File the log is written to, alongside stdout
    #[arg(long, default_value = "flow-sim.log")]
    log_file: PathBuf,
}

fn setup_logger(level: LevelFilter, log_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::fs::File::create(log_file)?)
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn to_key(code: KeyCode) -> Key {
    match code {
        KeyCode::C => Key::Char('c'),
        KeyCode::U => Key::Char('u'),
        KeyCode::B => Key::Char('b'),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        _ => Key::Other,
    }
}

fn run_headless(mut world: World, frames: u64) {
    let interval = world.get_config().spawn_interval;
    for _ in 0..frames {
        world.advance(1);
        if world.get_frame() % interval == 0 {
            log_to_terminal(&world);
        }
    }
    info!(
        "headless run finished after {} frames with {} entities",
        world.get_frame(),
        world.get_entities().len()
    );
}

async fn run_window(mut world: World, mut flicker_rng: SmallRng) {
    let mut canvas = MacroquadCanvas::new();
    let interval = world.get_config().spawn_interval;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("shutdown");
            break;
        }
        for code in get_keys_pressed() {
            handle_key(world.get_flow_mut(), to_key(code));
        }

        world.advance(1);
        render(&world, &mut canvas, &mut flicker_rng);

        if world.get_frame() % interval == 0 {
            log_to_terminal(&world);
        }

        next_frame().await;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logger(cli.log_level, &cli.log_file)?;

    let config = SimConfig {
        speed_steps: cli.speed_steps,
        ..SimConfig::default()
    };
    config.validate()?;

    let world = World::new(config.clone(), seeded_rng(cli.seed));
    info!(
        "field-city-flow started: {}x{}, {} entities, seed {:?}",
        config.width,
        config.height,
        world.get_entities().len(),
        cli.seed
    );

    match cli.headless {
        Some(frames) => run_headless(world, frames),
        None => {
            let conf = Conf {
                window_title: "Field & City Flow".to_string(),
                window_width: config.width as i32,
                window_height: config.height as i32,
                window_resizable: false,
                ..Default::default()
            };
            let flicker_rng = seeded_rng(cli.seed.map(|seed| seed.wrapping_add(1)));
            macroquad::Window::from_config(conf, run_window(world, flicker_rng));
        }
    }

    Ok(())
}
