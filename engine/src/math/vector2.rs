use auto_ops::impl_op_ex;
use super::ApproxEq;

pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Vector2 {
	pub x: f64,
	pub y: f64
}

impl Vector2 {
	pub fn new() -> Self {
		ZERO
	}

	pub fn from(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn from_scalar(scalar: f64) -> Self {
		Self { x: scalar, y: scalar }
	}

	pub fn length(&self) -> f64 {
		(self.x * self.x + self.y * self.y).sqrt()
	}

	pub fn distance_to(&self, other: &Vector2) -> f64 {
		(other - self).length()
	}
}

impl_op_ex!(+ |a: &Vector2, b: &Vector2| -> Vector2 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Vector2, b: &Vector2| -> Vector2 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(+= |a: &mut Vector2, b: &Vector2| {
	a.x += b.x;
	a.y += b.y;
});

impl_op_ex!(-= |a: &mut Vector2, b: &Vector2| {
	a.x -= b.x;
	a.y -= b.y;
});

impl_op_ex!(* |a: &Vector2, b: f64| -> Vector2 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(*= |a: &mut Vector2, b: f64| {
	a.x *= b;
	a.y *= b;
});

impl ApproxEq for Vector2 {
	fn approx_eq(&self, other: &Self, tol: f64) -> bool {
		(self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
	}
}
