use std::{env, path::PathBuf, process};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

mod config;
use config::{GameConfig, DEFAULT_CONFIG_PATH};

mod error;
use error::GameError;

mod state_manager;
use state_manager::{GameResources, State, StateAction, StateManager};

mod states;
use states::FlightState;

mod targets;
use targets::Targets;

mod log_canvas;
use log_canvas::LogCanvas;

#[cfg_attr(feature = "window", allow(dead_code))]
mod headless;

#[cfg(feature = "window")]
mod window;

// Only every n-th frame is written to the debug log.
const LOGGED_FRAME_INTERVAL: u64 = 30;

fn main() {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	if let Err(e) = run() {
		error!("{}", e);

		if let Some(source) = std::error::Error::source(&e) {
			error!("  caused by: {}", source);
		}

		process::exit(1);
	}
}

fn run() -> Result<(), GameError> {
	let config_path = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
	let config = GameConfig::load(&config_path)?;

	let rng = match config.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng()
	};

	let mut resources = GameResources { config, rng };
	let flight = Box::new(FlightState::new(&resources.config));
	let mut state_manager = StateManager::new(&mut resources, flight);
	let mut canvas = LogCanvas::new(LOGGED_FRAME_INTERVAL);

	#[cfg(feature = "window")]
	{
		window::run(&mut state_manager, &mut resources, &mut canvas)?;
		info!("Window closed");
	}

	#[cfg(not(feature = "window"))]
	{
		let ticks = headless::run(&mut state_manager, &mut resources, &headless::demo_script(), &mut canvas);
		info!("Scripted session finished after {} ticks", ticks);
	}

	Ok(())
}
