use std::convert::TryFrom;
use std::f64::consts::PI;
use engine::{
	Canvas,
	Input,
	Key,
	Object2D,
	Transform2D,
	canvas::draw_matrix,
	geometry2d,
	math::{Box2, Vector2}
};
use log::{debug, info};
use crate::{GameConfig, GameResources, State, StateAction, Targets, states::CompositionState};

const GLOW_RADIUS: f64 = 15.0;
const TARGET_CORE_RADIUS: f64 = 5.0;

/// Live-pose mode: the ship is rebuilt every tick from its pose.
pub struct FlightState {
	ship: Object2D,
	start: Transform2D,
	targets: Targets,
	score: u32,
	playing: bool,
	field: Box2,
	target_radius: f64
}

impl FlightState {
	pub fn new(config: &GameConfig) -> Self {
		let start = Transform2D::from(config.start_position(), 0.0, Vector2::from_scalar(1.0));

		Self {
			ship: Object2D::from(geometry2d::ship(), start),
			start,
			targets: Targets::new(),
			score: 0,
			playing: false,
			field: config.field(),
			target_radius: config.target_radius
		}
	}

	pub fn transform(&self) -> &Transform2D {
		&self.ship.transform
	}

	pub fn score(&self) -> u32 {
		self.score
	}

	pub fn is_playing(&self) -> bool {
		self.playing
	}

	pub fn reset(&mut self) {
		self.ship.transform = self.start;
		self.ship.update();
		self.targets.clear();
		self.score = 0;
		self.playing = false;
		info!("Flight reset");
	}

	// Stand-ins for the rotation and scale sliders; they work whether or not the game is running.
	fn apply_sliders(&mut self, input: &Input, config: &GameConfig) {
		let transform = &mut self.ship.transform;

		if input.key_pressed(Key::Q) {
			transform.rotation = (transform.rotation - config.slider_rotation_step).clamp(-PI, PI);
		}

		if input.key_pressed(Key::E) {
			transform.rotation = (transform.rotation + config.slider_rotation_step).clamp(-PI, PI);
		}

		if input.key_pressed(Key::Z) {
			let scale = (transform.scale.x - config.slider_scale_step).clamp(config.min_scale, config.max_scale);
			transform.set_uniform_scale(scale);
		}

		if input.key_pressed(Key::X) {
			let scale = (transform.scale.x + config.slider_scale_step).clamp(config.min_scale, config.max_scale);
			transform.set_uniform_scale(scale);
		}
	}

	fn steer(&mut self, input: &Input, config: &GameConfig) {
		let transform = &mut self.ship.transform;

		if input.key_down(Key::Left) {
			transform.rotate(-config.rotation_step);
		}

		if input.key_down(Key::Right) {
			transform.rotate(config.rotation_step);
		}

		if input.key_down(Key::Up) {
			transform.advance(config.move_speed, &self.field);
		}

		if input.key_down(Key::Down) {
			transform.advance(-config.move_speed, &self.field);
		}
	}
}

impl State for FlightState {
	fn name(&self) -> &'static str {
		"flight"
	}

	fn enter(&mut self, _resources: &mut GameResources) {
		self.ship.update();
	}

	fn leave(&mut self, _resources: &mut GameResources) {}

	fn update(&mut self, input: &Input, resources: &mut GameResources) -> StateAction {
		if input.key_pressed(Key::Tab) {
			return StateAction::Push(Box::new(CompositionState::new(&resources.config)));
		}

		if input.key_pressed(Key::R) {
			self.reset();
		}
		else if input.key_pressed(Key::Space) {
			self.playing = !self.playing;
			info!("{}", if self.playing { "Playing" } else { "Paused" });
		}

		let config = &resources.config;
		self.apply_sliders(input, config);

		if self.playing {
			self.steer(input, config);

			if self.targets.is_empty() {
				self.targets.spawn(config.target_count, &config.target_area(), &mut resources.rng);
				debug!("Spawned targets at {:?}", self.targets.positions());
			}

			let collected = self.targets.collect(&self.ship.transform.position, config.hit_radius);
			if collected > 0 {
				let points = u32::try_from(collected).unwrap_or(u32::MAX).saturating_mul(config.points_per_target);
				self.score = self.score.saturating_add(points);
				info!("Collected {} target(s), score {}", collected, self.score);
			}
		}

		self.ship.update();
		StateAction::None
	}

	fn render(&self, canvas: &mut dyn Canvas) {
		canvas.clear();
		canvas.polygon(self.ship.vertices());
		canvas.circle(&self.ship.local_to_world(&geometry2d::ENGINE_ANCHOR), GLOW_RADIUS);

		for target in self.targets.positions() {
			canvas.circle(target, self.target_radius);
			canvas.circle(target, TARGET_CORE_RADIUS);
		}

		draw_matrix(canvas, &Vector2::from(10.0, 30.0), "Transformation Matrix:", self.ship.matrix());
		canvas.text(&Vector2::from(self.field.max.x - 150.0, 30.0), &format!("Score: {}", self.score));

		let t = &self.ship.transform;
		let status = format!("Rotation {:.2} rad  Scale {:.1}x  X: {:.0} Y: {:.0}", t.rotation, t.scale.x, t.position.x, t.position.y);
		canvas.text(&Vector2::from(10.0, self.field.max.y - 20.0), &status);
	}
}
