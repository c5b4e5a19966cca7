//! Snailpath headless runner.
//!
//! Loads follower defaults from an INI file and a scene from JSON, then runs
//! the simulation for a fixed number of ticks and logs what a renderer would
//! draw: positions, headings, sprite frames and, in debug mode, the closed
//! path of every follower.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --scene assets/garden.json --ticks 300
//! ```

use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use snailpath::components::follower::WaypointFollower;
use snailpath::components::mapposition::MapPosition;
use snailpath::components::rotation::Rotation;
use snailpath::components::sprite::Sprite;
use snailpath::resources::followerconfig::FollowerConfig;
use snailpath::resources::scene::SceneData;
use snailpath::simulation::Simulation;

/// Snailpath: crawl sprites around closed waypoint loops.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI file with movement, animation and simulation defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON scene describing paths and followers. A built-in demo is used when omitted.
    #[arg(long, value_name = "PATH")]
    scene: Option<PathBuf>,

    /// Number of ticks to simulate (overrides the config file).
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds per tick (overrides the config file).
    #[arg(long)]
    dt: Option<f32>,

    /// Force debug path output on.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = FollowerConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(ticks) = cli.ticks {
        config.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        config.tick_delta = dt;
    }
    if cli.debug {
        config.debug_path = true;
    }

    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let scene = match &cli.scene {
        Some(path) => match SceneData::load_from_file(path) {
            Ok(scene) => scene,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No scene given, running the built-in demo");
            SceneData::demo()
        }
    };

    let ticks = config.ticks;
    let dt = config.tick_delta;
    let mut sim = Simulation::new(config);
    let followers = sim.spawn_scene(&scene);

    info!("Running {} ticks of {:.4}s", ticks, dt);
    for tick in 0..ticks {
        sim.tick(dt);

        if tick == 0 && sim.debug_enabled() {
            for (name, entity) in &followers {
                if let Some(segments) = sim.debug_lines().segments_for(*entity) {
                    for s in segments {
                        info!(
                            "[debug] {} path ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2})",
                            name, s.start.x, s.start.y, s.start.z, s.end.x, s.end.y, s.end.z
                        );
                    }
                }
            }
        }

        for (name, entity) in &followers {
            let world = sim.world();
            let (Some(pos), Some(rot), Some(follower)) = (
                world.get::<MapPosition>(*entity),
                world.get::<Rotation>(*entity),
                world.get::<WaypointFollower>(*entity),
            ) else {
                continue;
            };
            if !follower.is_active() {
                continue;
            }
            let frame = world
                .get::<Sprite>(*entity)
                .map(|s| s.frame_key.as_str())
                .unwrap_or("");
            log::debug!(
                "tick {:>5} {}: pos=({:.3}, {:.3}) heading={:.1} target={} frame={}",
                tick,
                name,
                pos.pos.x,
                pos.pos.y,
                rot.degrees(),
                follower.current_index(),
                frame
            );
        }
    }

    for (name, entity) in &followers {
        let world = sim.world();
        match (
            world.get::<MapPosition>(*entity),
            world.get::<WaypointFollower>(*entity),
        ) {
            (Some(pos), Some(follower)) if follower.is_active() => info!(
                "{} ended at ({:.3}, {:.3}) heading for waypoint {}",
                name,
                pos.pos.x,
                pos.pos.y,
                follower.current_index()
            ),
            (_, Some(follower)) => info!(
                "{} is inactive: {}",
                name,
                follower
                    .error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "not started".to_string())
            ),
            _ => {}
        }
    }
}
