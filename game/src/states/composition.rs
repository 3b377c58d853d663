use engine::{
	Canvas,
	Input,
	Key,
	Shape,
	TransformOp,
	canvas::draw_matrix,
	geometry2d,
	math::{Matrix3, Vector2}
};
use log::info;
use crate::{GameConfig, GameResources, State, StateAction};

const OP_KEYS: [Key; 9] = [Key::Left, Key::Right, Key::Up, Key::Down, Key::Q, Key::E, Key::Z, Key::X, Key::T];

/// Incremental mode: every key press composes one more elementary transform
/// onto the triangle.
pub struct CompositionState {
	shape: Shape,
	translate_step: f64,
	rotate_step_degrees: f64,
	scale_factor: f64,
	help_position: Vector2
}

impl CompositionState {
	pub fn new(config: &GameConfig) -> Self {
		let center = config.center();
		let original = Matrix3::translation(center.x, center.y).transform_points(&geometry2d::triangle());

		Self {
			shape: Shape::new(original),
			translate_step: config.translate_step,
			rotate_step_degrees: config.rotate_step_degrees,
			scale_factor: config.scale_factor,
			help_position: Vector2::from(10.0, config.field_height - 20.0)
		}
	}

	pub fn shape(&self) -> &Shape {
		&self.shape
	}

	pub fn op_for_key(&self, key: Key) -> Option<TransformOp> {
		let step = self.translate_step;

		match key {
			Key::Left => Some(TransformOp::Translate { dx: -step, dy: 0.0 }),
			Key::Right => Some(TransformOp::Translate { dx: step, dy: 0.0 }),
			Key::Up => Some(TransformOp::Translate { dx: 0.0, dy: -step }),
			Key::Down => Some(TransformOp::Translate { dx: 0.0, dy: step }),
			Key::Q => Some(TransformOp::Rotate { degrees: -self.rotate_step_degrees }),
			Key::E => Some(TransformOp::Rotate { degrees: self.rotate_step_degrees }),
			Key::Z => Some(TransformOp::Scale { sx: 1.0 / self.scale_factor, sy: 1.0 / self.scale_factor }),
			Key::X => Some(TransformOp::Scale { sx: self.scale_factor, sy: self.scale_factor }),
			Key::T => Some(TransformOp::Reset),
			_ => None
		}
	}
}

impl State for CompositionState {
	fn name(&self) -> &'static str {
		"composition"
	}

	fn enter(&mut self, _resources: &mut GameResources) {
		self.shape.reset();
	}

	fn leave(&mut self, _resources: &mut GameResources) {}

	fn update(&mut self, input: &Input, _resources: &mut GameResources) -> StateAction {
		if input.key_pressed(Key::Tab) {
			return StateAction::Pop;
		}

		for key in OP_KEYS.iter().filter(|&&key| input.key_pressed(key)) {
			if let Some(op) = self.op_for_key(*key) {
				self.shape.apply(&op);
				info!("Applied {}, accumulated matrix:\n{}", op, self.shape.matrix());
			}
		}

		StateAction::None
	}

	fn render(&self, canvas: &mut dyn Canvas) {
		canvas.clear();
		canvas.polygon(self.shape.current());
		draw_matrix(canvas, &Vector2::from(10.0, 30.0), "Accumulated Matrix:", self.shape.matrix());
		canvas.text(&self.help_position, "Arrows translate, Q/E rotate, Z/X scale, T reset, Tab back");
	}
}
