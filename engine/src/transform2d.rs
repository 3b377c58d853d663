use crate::math::{Vector2, Matrix3, Box2};

/// Position, orientation and scale of a 2D object. This is the source of truth
/// for the live mode; the matrix is derived from it on demand and never fed back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform2D {
	pub position: Vector2,
	pub rotation: f64,
	pub scale: Vector2
}

impl Transform2D {
	pub fn new() -> Self {
		Self {
			position: Vector2::new(),
			rotation: 0.0,
			scale: Vector2::from_scalar(1.0)
		}
	}

	pub fn from(position: Vector2, rotation: f64, scale: Vector2) -> Self {
		Self { position, rotation, scale }
	}

	pub fn set_uniform_scale(&mut self, scale: f64) {
		self.scale = Vector2::from_scalar(scale);
	}

	pub fn matrix(&self) -> Matrix3 {
		Matrix3::compose(&self.position, self.rotation, &self.scale)
	}

	/// Unit vector the object faces. Rotation 0 points up the screen (negative y).
	pub fn heading(&self) -> Vector2 {
		let (sin, cos) = self.rotation.sin_cos();
		Vector2::from(sin, -cos)
	}

	pub fn rotate(&mut self, delta: f64) {
		self.rotation += delta;
	}

	/// Moves along the heading by `speed` (backwards when negative), then wraps
	/// the position into `bounds`.
	pub fn advance(&mut self, speed: f64, bounds: &Box2) {
		let moved = self.position + self.heading() * speed;
		self.position = bounds.wrap(&moved);
	}
}

impl Default for Transform2D {
	fn default() -> Self {
		Self::new()
	}
}
