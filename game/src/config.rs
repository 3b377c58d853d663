use std::{fs, path::Path};
use engine::math::{Box2, Vector2};
use log::{info, warn};
use serde::Deserialize;
use crate::GameError;

pub const DEFAULT_CONFIG_PATH: &str = "game/res/config.json";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GameConfig {
	pub field_width: f64,
	pub field_height: f64,
	pub start_x: f64,
	pub start_y: f64,

	/// Radians per tick while a rotate key is held.
	pub rotation_step: f64,
	/// Units per tick while a move key is held.
	pub move_speed: f64,
	pub slider_rotation_step: f64,
	pub slider_scale_step: f64,
	pub min_scale: f64,
	pub max_scale: f64,

	pub target_count: usize,
	pub target_margin: f64,
	pub target_radius: f64,
	pub hit_radius: f64,
	pub points_per_target: u32,

	pub translate_step: f64,
	pub rotate_step_degrees: f64,
	pub scale_factor: f64,

	pub tick_interval_ms: u64,
	pub headless_ticks: u64,
	pub seed: Option<u64>
}

impl GameConfig {
	/// A missing file is not an error, the defaults are used instead.
	pub fn load(path: &Path) -> Result<Self, GameError> {
		if !path.exists() {
			warn!("Config file {} not found, using defaults", path.display());
			return Ok(Self::default());
		}

		let contents = fs::read_to_string(path)
			.map_err(|source| GameError::Io { path: path.to_owned(), source })?;

		let config = Self::parse(&contents)
			.map_err(|source| GameError::Config { path: path.to_owned(), source })?;

		config.validate()
			.map_err(|reason| GameError::InvalidConfig { path: path.to_owned(), reason })?;

		info!("Loaded config from {}", path.display());
		Ok(config)
	}

	pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(contents)
	}

	/// Rejects values that parse but that the game cannot run with.
	pub fn validate(&self) -> Result<(), String> {
		if !(self.field_width > 0.0 && self.field_height > 0.0) {
			return Err(format!("field must have a positive size, got {}x{}", self.field_width, self.field_height));
		}

		if !(self.target_margin >= 0.0) {
			return Err(format!("target_margin must not be negative, got {}", self.target_margin));
		}

		if !(self.target_margin * 2.0 < self.field_width.min(self.field_height)) {
			return Err(format!("target_margin {} leaves no room for targets in a {}x{} field", self.target_margin, self.field_width, self.field_height));
		}

		if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
			return Err(format!("scale range must satisfy 0 < min_scale <= max_scale, got {}..{}", self.min_scale, self.max_scale));
		}

		if !(self.scale_factor > 0.0) {
			return Err(format!("scale_factor must be positive, got {}", self.scale_factor));
		}

		Ok(())
	}

	pub fn field(&self) -> Box2 {
		Box2::from_size(self.field_width, self.field_height)
	}

	pub fn start_position(&self) -> Vector2 {
		Vector2::from(self.start_x, self.start_y)
	}

	pub fn center(&self) -> Vector2 {
		Vector2::from(self.field_width / 2.0, self.field_height / 2.0)
	}

	/// Region targets spawn in, the field shrunk by the margin on every side.
	pub fn target_area(&self) -> Box2 {
		let margin = Vector2::from_scalar(self.target_margin);
		let field = self.field();

		Box2::new(field.min + margin, field.max - margin)
	}
}

impl Default for GameConfig {
	fn default() -> Self {
		Self {
			field_width: 800.0,
			field_height: 600.0,
			start_x: 400.0,
			start_y: 300.0,
			rotation_step: 0.1,
			move_speed: 5.0,
			slider_rotation_step: 0.1,
			slider_scale_step: 0.1,
			min_scale: 0.5,
			max_scale: 2.0,
			target_count: 3,
			target_margin: 50.0,
			target_radius: 15.0,
			hit_radius: 30.0,
			points_per_target: 10,
			translate_step: 50.0,
			rotate_step_degrees: 30.0,
			scale_factor: 1.1,
			tick_interval_ms: 16,
			headless_ticks: 600,
			seed: None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn bundled_config_matches_defaults() {
		let config = GameConfig::parse(include_str!("../res/config.json")).unwrap();
		assert_eq!(config, GameConfig::default());
	}

	#[test]
	fn partial_config_fills_defaults() {
		let config = GameConfig::parse(r#"{ "move_speed": 2.5, "seed": 7 }"#).unwrap();

		assert_eq!(config.move_speed, 2.5);
		assert_eq!(config.seed, Some(7));
		assert_eq!(config.field_width, 800.0);
		assert_eq!(config.target_count, 3);
	}

	#[test]
	fn malformed_config() {
		assert!(GameConfig::parse(r#"{ "move_speed": "fast" }"#).is_err());
		assert!(GameConfig::parse("{").is_err());
	}

	#[test]
	fn missing_file_uses_defaults() {
		let config = GameConfig::load(&PathBuf::from("does/not/exist.json")).unwrap();
		assert_eq!(config, GameConfig::default());
	}

	#[test]
	fn malformed_file_is_an_error() {
		let path = std::env::temp_dir().join(format!("matrix_game_config_{}.json", std::process::id()));
		fs::write(&path, "not json").unwrap();

		let result = GameConfig::load(&path);
		fs::remove_file(&path).unwrap();

		match result {
			Err(GameError::Config { path: p, .. }) => assert_eq!(p, path),
			other => panic!("expected a config error, got {:?}", other)
		}
	}

	fn rejected(json: &str) -> String {
		let config = GameConfig::parse(json).unwrap();
		config.validate().unwrap_err()
	}

	#[test]
	fn defaults_are_valid() {
		assert_eq!(GameConfig::default().validate(), Ok(()));
	}

	#[test]
	fn margin_must_leave_a_target_area() {
		assert!(rejected(r#"{ "target_margin": 400.0 }"#).contains("target_margin"));
		assert!(rejected(r#"{ "target_margin": 300.0 }"#).contains("target_margin"));
		assert!(rejected(r#"{ "target_margin": -1.0 }"#).contains("target_margin"));
		assert!(GameConfig::parse(r#"{ "target_margin": 299.0 }"#).unwrap().validate().is_ok());
	}

	#[test]
	fn scale_range_must_be_ordered() {
		assert!(rejected(r#"{ "min_scale": 3.0, "max_scale": 2.0 }"#).contains("min_scale"));
		assert!(rejected(r#"{ "min_scale": 0.0 }"#).contains("min_scale"));
		assert!(rejected(r#"{ "scale_factor": 0.0 }"#).contains("scale_factor"));
	}

	#[test]
	fn field_must_have_a_size() {
		assert!(rejected(r#"{ "field_width": 0.0 }"#).contains("field"));
		assert!(rejected(r#"{ "field_height": -600.0 }"#).contains("field"));
	}

	#[test]
	fn invalid_file_is_an_error() {
		let path = std::env::temp_dir().join(format!("matrix_game_invalid_{}.json", std::process::id()));
		fs::write(&path, r#"{ "target_margin": 400.0 }"#).unwrap();

		let result = GameConfig::load(&path);
		fs::remove_file(&path).unwrap();

		match result {
			Err(GameError::InvalidConfig { path: p, reason }) => {
				assert_eq!(p, path);
				assert!(reason.contains("target_margin"));
			},
			other => panic!("expected an invalid config error, got {:?}", other)
		}
	}

	#[test]
	fn regions() {
		let config = GameConfig::default();

		assert_eq!(config.field(), Box2::new(Vector2::from(0.0, 0.0), Vector2::from(800.0, 600.0)));
		assert_eq!(config.target_area(), Box2::new(Vector2::from(50.0, 50.0), Vector2::from(750.0, 550.0)));
		assert_eq!(config.start_position(), Vector2::from(400.0, 300.0));
		assert_eq!(config.center(), Vector2::from(400.0, 300.0));
	}
}
