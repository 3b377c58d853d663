use crate::math::{Vector2, Matrix3};

/// Drawing surface in display coordinates. There is no camera; whatever the
/// core hands over is already in screen space.
pub trait Canvas {
	fn clear(&mut self);
	fn polygon(&mut self, points: &[Vector2]);
	fn circle(&mut self, center: &Vector2, radius: f64);
	fn text(&mut self, position: &Vector2, string: &str);
}

const LINE_HEIGHT: f64 = 20.0;

/// Draws the title and the three matrix rows starting at `position`.
pub fn draw_matrix(canvas: &mut dyn Canvas, position: &Vector2, title: &str, matrix: &Matrix3) {
	canvas.text(position, title);

	for (i, row) in matrix.rows().iter().enumerate() {
		let line = Vector2::from(position.x, position.y + LINE_HEIGHT * (i + 1) as f64);
		canvas.text(&line, row);
	}
}
