//! Outline templates, centred near the origin. Vertex order is the polygon winding.

use crate::math::Vector2;

/// Template-space point the ship's exhaust is drawn at.
pub const ENGINE_ANCHOR: Vector2 = Vector2 { x: 0.0, y: 10.0 };

pub fn ship() -> Vec<Vector2> {
	vec![
		Vector2::from(0.0, -20.0),
		Vector2::from(-10.0, 10.0),
		Vector2::from(-5.0, 5.0),
		Vector2::from(5.0, 5.0),
		Vector2::from(10.0, 10.0)
	]
}

pub fn triangle() -> Vec<Vector2> {
	vec![
		Vector2::from(0.0, -40.0),
		Vector2::from(-35.0, 30.0),
		Vector2::from(35.0, 30.0)
	]
}
