use super::Vector2;

#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Box2 {
	pub min: Vector2,
	pub max: Vector2
}

impl Box2 {
	pub fn new(min: Vector2, max: Vector2) -> Self {
		Self { min, max }
	}

	pub fn from_size(width: f64, height: f64) -> Self {
		Self {
			min: Vector2::new(),
			max: Vector2::from(width, height)
		}
	}

	pub fn contains(&self, point: &Vector2) -> bool {
		point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
	}

	/// Toroidal wrap. A coordinate that leaves through one edge is snapped to
	/// the opposite edge rather than carried over by the overshoot.
	pub fn wrap(&self, point: &Vector2) -> Vector2 {
		Vector2 {
			x: wrap_coordinate(point.x, self.min.x, self.max.x),
			y: wrap_coordinate(point.y, self.min.y, self.max.y)
		}
	}
}

// The low edge is checked first; at most one branch fires per step.
fn wrap_coordinate(v: f64, min: f64, max: f64) -> f64 {
	if v < min {
		max
	}
	else if v >= max {
		min
	}
	else {
		v
	}
}
