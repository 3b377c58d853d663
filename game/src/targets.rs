use engine::math::{Box2, Vector2};
use rand::Rng;

#[derive(Default, Debug)]
pub struct Targets {
	positions: Vec<Vector2>
}

impl Targets {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn positions(&self) -> &[Vector2] {
		&self.positions
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn clear(&mut self) {
		self.positions.clear();
	}

	pub fn add(&mut self, position: Vector2) {
		self.positions.push(position);
	}

	pub fn spawn<R: Rng>(&mut self, count: usize, area: &Box2, rng: &mut R) {
		for _ in 0..count {
			let x = rng.random_range(area.min.x..area.max.x);
			let y = rng.random_range(area.min.y..area.max.y);
			self.add(Vector2::from(x, y));
		}
	}

	/// Removes every target strictly closer than `radius` to `position` and
	/// returns how many were removed.
	pub fn collect(&mut self, position: &Vector2, radius: f64) -> usize {
		let before = self.positions.len();
		self.positions.retain(|target| target.distance_to(position) >= radius);
		before - self.positions.len()
	}
}
