pub mod vector2;
pub use vector2::Vector2;

pub mod matrix3;
pub use matrix3::Matrix3;

pub mod box2;
pub use box2::Box2;

use std::fmt::Debug;

pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, tol: f64) -> bool;
}

pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f64) {
	if !left.approx_eq(right, tol) {
		panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`", left, right, tol);
	}
}
