use engine::{Canvas, math::Vector2};
use log::{debug, log_enabled, trace, Level};

/// Writes each frame to the log instead of a framebuffer. Frames are numbered
/// by `clear`, and only every `interval`th frame is written.
pub struct LogCanvas {
	frame: u64,
	interval: u64
}

impl LogCanvas {
	pub fn new(interval: u64) -> Self {
		Self {
			frame: 0,
			interval: interval.max(1)
		}
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}

	fn visible(&self) -> bool {
		self.frame.saturating_sub(1) % self.interval == 0 && log_enabled!(Level::Debug)
	}
}

impl Canvas for LogCanvas {
	fn clear(&mut self) {
		self.frame += 1;

		if self.visible() {
			debug!("frame {}", self.frame);
		}
	}

	fn polygon(&mut self, points: &[Vector2]) {
		if self.visible() {
			let outline: Vec<String> = points.iter().map(|p| format!("({:.2}, {:.2})", p.x, p.y)).collect();
			debug!("  polygon {}", outline.join(" "));
		}
	}

	fn circle(&mut self, center: &Vector2, radius: f64) {
		if self.visible() {
			trace!("  circle r={} at ({:.2}, {:.2})", radius, center.x, center.y);
		}
	}

	fn text(&mut self, _position: &Vector2, string: &str) {
		if self.visible() {
			debug!("  {}", string);
		}
	}
}
