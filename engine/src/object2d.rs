use crate::{
	math::{Vector2, Matrix3},
	Transform2D
};

/// A fixed outline driven by a pose. Each update rebuilds the matrix from the
/// pose and maps the untouched template through it.
pub struct Object2D {
	pub transform: Transform2D,
	template: Vec<Vector2>,
	matrix: Matrix3,
	vertices: Vec<Vector2>
}

impl Object2D {
	pub fn new(template: Vec<Vector2>) -> Self {
		Self::from(template, Transform2D::new())
	}

	pub fn from(template: Vec<Vector2>, transform: Transform2D) -> Self {
		let mut object = Self {
			transform,
			vertices: Vec::with_capacity(template.len()),
			template,
			matrix: Matrix3::default()
		};

		object.update();
		object
	}

	pub fn update(&mut self) {
		self.matrix = self.transform.matrix();
		self.vertices = self.matrix.transform_points(&self.template);
	}

	pub fn local_to_world(&self, point: &Vector2) -> Vector2 {
		self.matrix.transform_point(point)
	}

	pub fn template(&self) -> &[Vector2] {
		&self.template
	}

	pub fn matrix(&self) -> &Matrix3 {
		&self.matrix
	}

	pub fn vertices(&self) -> &[Vector2] {
		&self.vertices
	}
}
