use std::fmt;
use super::{Vector2, ApproxEq};
use auto_ops::impl_op_ex;

pub const IDENTITY: Matrix3 = Matrix3 {
	elements: [
		[1.0, 0.0, 0.0],
		[0.0, 1.0, 0.0],
		[0.0, 0.0, 1.0]
	]
};

/// Row-major 3x3 matrix representing a 2D affine map in homogeneous form.
///
/// Every constructor here produces a matrix whose third row is exactly
/// `(0, 0, 1)`. Points are treated as column vectors `(x, y, 1)`, so `a * b`
/// applied to a point applies `b` first and then `a`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
	pub elements: [[f64; 3]; 3]
}

impl Matrix3 {
	pub fn new(elements: [[f64; 3]; 3]) -> Self {
		Self { elements }
	}

	pub fn translation(tx: f64, ty: f64) -> Self {
		Self::new([
			[1.0, 0.0, tx],
			[0.0, 1.0, ty],
			[0.0, 0.0, 1.0]
		])
	}

	/// Counter-clockwise in a y-up frame, which is clockwise on screen where y grows downwards.
	pub fn rotation(angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();

		Self::new([
			[cos, -sin, 0.0],
			[sin,  cos, 0.0],
			[0.0,  0.0, 1.0]
		])
	}

	pub fn rotation_degrees(degrees: f64) -> Self {
		Self::rotation(degrees.to_radians())
	}

	pub fn scaling(sx: f64, sy: f64) -> Self {
		Self::new([
			[ sx, 0.0, 0.0],
			[0.0,  sy, 0.0],
			[0.0, 0.0, 1.0]
		])
	}

	/// Closed form of `translation * rotation * scaling`: scale first, then
	/// rotate, then translate.
	pub fn compose(position: &Vector2, rotation: f64, scale: &Vector2) -> Self {
		let (sin, cos) = rotation.sin_cos();

		Self::new([
			[scale.x * cos, -scale.y * sin, position.x],
			[scale.x * sin,  scale.y * cos, position.y],
			[0.0, 0.0, 1.0]
		])
	}

	/// `self = m * self`. The new transform acts in the world frame, after
	/// everything already accumulated in `self`.
	pub fn premultiply(&mut self, m: &Matrix3) {
		*self = m * *self;
		debug_assert_affine(self);
	}

	pub fn transform_point(&self, point: &Vector2) -> Vector2 {
		debug_assert_affine(self);
		let e = &self.elements;

		Vector2 {
			x: e[0][0] * point.x + e[0][1] * point.y + e[0][2],
			y: e[1][0] * point.x + e[1][1] * point.y + e[1][2]
		}
	}

	pub fn transform_points(&self, points: &[Vector2]) -> Vec<Vector2> {
		points.iter().map(|p| self.transform_point(p)).collect()
	}

	pub fn is_affine(&self) -> bool {
		self.elements[2] == [0.0, 0.0, 1.0]
	}

	/// One bracketed line per row, each value right-aligned to 7 columns with 2 decimals.
	pub fn rows(&self) -> [String; 3] {
		let row = |r: &[f64; 3]| {
			let cells: Vec<String> = r.iter()
				.map(|v| if *v == 0.0 { 0.0 } else { *v }) // no "-0.00"
				.map(|v| format!("{:>7.2}", v))
				.collect();

			format!("[{}]", cells.join(" "))
		};

		let e = &self.elements;
		[row(&e[0]), row(&e[1]), row(&e[2])]
	}
}

impl Default for Matrix3 {
	fn default() -> Self {
		IDENTITY
	}
}

impl fmt::Display for Matrix3 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [r0, r1, r2] = self.rows();
		write!(f, "{}\n{}\n{}", r0, r1, r2)
	}
}

/// Panics in debug builds if the third row is not exactly `(0, 0, 1)`.
/// Release builds skip the check and discard the homogeneous component.
#[inline]
pub fn debug_assert_affine(m: &Matrix3) {
	debug_assert!(m.is_affine(), "non-affine matrix, third row is {:?}", m.elements[2]);
}

impl_op_ex!(* |a: &Matrix3, b: &Matrix3| -> Matrix3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(* |a: &Matrix3, b: &Vector2| -> Vector2 {
	a.transform_point(b)
});

impl_op_ex!(*= |a: &mut Matrix3, b: &Matrix3| {
	#[allow(clippy::suspicious_op_assign_impl)]
	{
		let ae = &mut a.elements;
		let be = &b.elements;

		let (a00, a01, a02) = (ae[0][0], ae[0][1], ae[0][2]);
		let (a10, a11, a12) = (ae[1][0], ae[1][1], ae[1][2]);
		let (a20, a21, a22) = (ae[2][0], ae[2][1], ae[2][2]);

		let (b00, b01, b02) = (be[0][0], be[0][1], be[0][2]);
		let (b10, b11, b12) = (be[1][0], be[1][1], be[1][2]);
		let (b20, b21, b22) = (be[2][0], be[2][1], be[2][2]);

		ae[0][0] = a00 * b00 + a01 * b10 + a02 * b20;
		ae[0][1] = a00 * b01 + a01 * b11 + a02 * b21;
		ae[0][2] = a00 * b02 + a01 * b12 + a02 * b22;

		ae[1][0] = a10 * b00 + a11 * b10 + a12 * b20;
		ae[1][1] = a10 * b01 + a11 * b11 + a12 * b21;
		ae[1][2] = a10 * b02 + a11 * b12 + a12 * b22;

		ae[2][0] = a20 * b00 + a21 * b10 + a22 * b20;
		ae[2][1] = a20 * b01 + a21 * b11 + a22 * b21;
		ae[2][2] = a20 * b02 + a21 * b12 + a22 * b22;
	}
});

impl ApproxEq for Matrix3 {
	fn approx_eq(&self, other: &Self, tol: f64) -> bool {
		for i in 0..3 {
			for j in 0..3 {
				if (self.elements[i][j] - other.elements[i][j]).abs() > tol {
					return false;
				}
			}
		}

		true
	}
}
