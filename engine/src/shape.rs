use std::fmt;
use crate::math::{Vector2, Matrix3, matrix3::IDENTITY};

/// A discrete edit applied to a [`Shape`]. Rotation is given in degrees here
/// and converted to radians when the matrix is built.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransformOp {
	Translate { dx: f64, dy: f64 },
	Rotate { degrees: f64 },
	Scale { sx: f64, sy: f64 },
	Reset
}

impl TransformOp {
	pub fn matrix(&self) -> Option<Matrix3> {
		match *self {
			TransformOp::Translate { dx, dy } => Some(Matrix3::translation(dx, dy)),
			TransformOp::Rotate { degrees } => Some(Matrix3::rotation_degrees(degrees)),
			TransformOp::Scale { sx, sy } => Some(Matrix3::scaling(sx, sy)),
			TransformOp::Reset => None
		}
	}
}

impl fmt::Display for TransformOp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TransformOp::Translate { dx, dy } => write!(f, "translate by ({}, {})", dx, dy),
			TransformOp::Rotate { degrees } => write!(f, "rotate by {} degrees", degrees),
			TransformOp::Scale { sx, sy } if sx == sy => write!(f, "scale by x{}", sx),
			TransformOp::Scale { sx, sy } => write!(f, "scale by ({}, {})", sx, sy),
			TransformOp::Reset => write!(f, "reset")
		}
	}
}

/// An outline plus the product of every transform applied to it since the
/// last reset.
///
/// The current vertices are always recomputed from the original outline, so
/// rounding error does not compound over many edits.
pub struct Shape {
	original: Vec<Vector2>,
	matrix: Matrix3,
	current: Vec<Vector2>
}

impl Shape {
	pub fn new(original: Vec<Vector2>) -> Self {
		Self {
			current: original.clone(),
			original,
			matrix: IDENTITY
		}
	}

	/// Pre-multiplies: the new transform acts in world space on top of the
	/// accumulated one, so rotations and scales pivot on the world origin.
	pub fn apply_transform(&mut self, m: &Matrix3) {
		self.matrix.premultiply(m);
		self.current = self.matrix.transform_points(&self.original);
	}

	pub fn apply(&mut self, op: &TransformOp) {
		match op.matrix() {
			Some(m) => self.apply_transform(&m),
			None => self.reset()
		}
	}

	pub fn reset(&mut self) {
		self.matrix = IDENTITY;
		self.current = self.original.clone();
	}

	pub fn original(&self) -> &[Vector2] {
		&self.original
	}

	pub fn matrix(&self) -> &Matrix3 {
		&self.matrix
	}

	pub fn current(&self) -> &[Vector2] {
		&self.current
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{geometry2d, math::{assert_approx_eq, ApproxEq}};

	const TOL: f64 = 1e-9;

	fn origin() -> Shape {
		Shape::new(vec![Vector2::new()])
	}

	#[test]
	fn new() {
		let shape = Shape::new(geometry2d::triangle());
		assert_eq!(shape.matrix(), &IDENTITY);
		assert_eq!(shape.current(), geometry2d::triangle().as_slice());
		assert_eq!(shape.original(), geometry2d::triangle().as_slice());
	}

	#[test]
	fn translate() {
		let mut shape = origin();
		shape.apply(&TransformOp::Translate { dx: 50.0, dy: 0.0 });
		assert_eq!(shape.current()[0], Vector2::from(50.0, 0.0));
	}

	#[test]
	fn rotation_after_translation_pivots_on_world_origin() {
		let mut shape = origin();
		shape.apply(&TransformOp::Translate { dx: 50.0, dy: 0.0 });
		shape.apply(&TransformOp::Rotate { degrees: 90.0 });

		assert_approx_eq(&shape.current()[0], &Vector2::from(0.0, 50.0), TOL);
		assert_approx_eq(shape.matrix(), &(Matrix3::rotation_degrees(90.0) * Matrix3::translation(50.0, 0.0)), TOL);
	}

	#[test]
	fn application_order_is_observable() {
		let mut rotate_first = origin();
		rotate_first.apply(&TransformOp::Rotate { degrees: 90.0 });
		rotate_first.apply(&TransformOp::Translate { dx: 10.0, dy: 0.0 });

		let mut translate_first = origin();
		translate_first.apply(&TransformOp::Translate { dx: 10.0, dy: 0.0 });
		translate_first.apply(&TransformOp::Rotate { degrees: 90.0 });

		assert_approx_eq(&rotate_first.current()[0], &Vector2::from(10.0, 0.0), TOL);
		assert_approx_eq(&translate_first.current()[0], &Vector2::from(0.0, 10.0), TOL);
		assert!(!rotate_first.current()[0].approx_eq(&translate_first.current()[0], TOL));
	}

	#[test]
	fn scale_pivots_on_world_origin() {
		let mut shape = Shape::new(vec![Vector2::from(1.0, 2.0)]);
		shape.apply(&TransformOp::Translate { dx: 10.0, dy: 0.0 });
		shape.apply(&TransformOp::Scale { sx: 2.0, sy: 3.0 });

		assert_eq!(shape.current()[0], Vector2::from(22.0, 6.0));
	}

	#[test]
	fn current_follows_accumulated_matrix() {
		let mut shape = Shape::new(geometry2d::triangle());
		let ops = [
			TransformOp::Translate { dx: 50.0, dy: -20.0 },
			TransformOp::Rotate { degrees: 30.0 },
			TransformOp::Scale { sx: 1.1, sy: 1.1 },
			TransformOp::Rotate { degrees: -75.0 }
		];

		for op in &ops {
			shape.apply(op);
			let expected = shape.matrix().transform_points(shape.original());
			assert_eq!(shape.current(), expected.as_slice());
		}
	}

	#[test]
	fn full_turn_returns_to_original() {
		let mut shape = Shape::new(geometry2d::triangle());

		for _ in 0..12 {
			shape.apply(&TransformOp::Rotate { degrees: 30.0 });
		}

		for (current, original) in shape.current().iter().zip(shape.original()) {
			assert_approx_eq(current, original, 1e-9);
		}
	}

	#[test]
	fn reset_restores_original_exactly() {
		let mut shape = Shape::new(geometry2d::triangle());
		shape.apply(&TransformOp::Translate { dx: 50.0, dy: 0.0 });
		shape.apply(&TransformOp::Rotate { degrees: 30.0 });
		shape.apply(&TransformOp::Scale { sx: 1.1, sy: 1.1 });

		shape.reset();
		assert_eq!(shape.matrix(), &IDENTITY);
		assert_eq!(shape.current(), geometry2d::triangle().as_slice());

		shape.reset();
		assert_eq!(shape.current(), geometry2d::triangle().as_slice());
	}

	#[test]
	fn reset_op() {
		let mut shape = origin();
		shape.apply(&TransformOp::Translate { dx: 5.0, dy: 5.0 });
		shape.apply(&TransformOp::Reset);

		assert_eq!(shape.matrix(), &IDENTITY);
		assert_eq!(shape.current(), &[Vector2::new()]);
	}

	#[test]
	fn op_matrix() {
		assert_eq!(TransformOp::Translate { dx: 1.0, dy: 2.0 }.matrix(), Some(Matrix3::translation(1.0, 2.0)));
		assert_eq!(TransformOp::Rotate { degrees: 45.0 }.matrix(), Some(Matrix3::rotation(45f64.to_radians())));
		assert_eq!(TransformOp::Scale { sx: 1.1, sy: 1.1 }.matrix(), Some(Matrix3::scaling(1.1, 1.1)));
		assert_eq!(TransformOp::Reset.matrix(), None);
	}

	#[test]
	fn op_display() {
		assert_eq!(TransformOp::Translate { dx: 50.0, dy: 0.0 }.to_string(), "translate by (50, 0)");
		assert_eq!(TransformOp::Rotate { degrees: -30.0 }.to_string(), "rotate by -30 degrees");
		assert_eq!(TransformOp::Scale { sx: 1.1, sy: 1.1 }.to_string(), "scale by x1.1");
		assert_eq!(TransformOp::Scale { sx: 2.0, sy: 0.5 }.to_string(), "scale by (2, 0.5)");
		assert_eq!(TransformOp::Reset.to_string(), "reset");
	}
}
