use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
	#[error("could not read config file {}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error
	},

	#[error("malformed config file {}", .path.display())]
	Config {
		path: PathBuf,
		#[source]
		source: serde_json::Error
	},

	#[error("invalid config file {}: {reason}", .path.display())]
	InvalidConfig {
		path: PathBuf,
		reason: String
	},

	#[cfg_attr(not(feature = "window"), allow(dead_code))]
	#[error("window error: {0}")]
	Window(String)
}
