use engine::{Canvas, Input};
use log::info;
use rand::rngs::StdRng;
use crate::GameConfig;

pub struct GameResources {
	pub config: GameConfig,
	pub rng: StdRng
}

pub trait State {
	fn name(&self) -> &'static str;
	fn enter(&mut self, resources: &mut GameResources);
	fn leave(&mut self, resources: &mut GameResources);
	fn update(&mut self, input: &Input, resources: &mut GameResources) -> StateAction;
	fn render(&self, canvas: &mut dyn Canvas);
}

pub enum StateAction {
	None,
	Push(Box<dyn State>),
	Pop
}

/// Stack of states. Only the top one receives input and draws.
pub struct StateManager {
	states: Vec<Box<dyn State>>
}

impl StateManager {
	pub fn new(resources: &mut GameResources, mut initial_state: Box<dyn State>) -> Self {
		initial_state.enter(resources);
		info!("Entered {}", initial_state.name());

		Self { states: vec![initial_state] }
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	pub fn current(&self) -> Option<&dyn State> {
		self.states.last().map(|state| state.as_ref())
	}

	pub fn update(&mut self, input: &Input, resources: &mut GameResources) {
		let action = match self.states.last_mut() {
			Some(state) => state.update(input, resources),
			None => return
		};

		match action {
			StateAction::Push(mut state) => {
				state.enter(resources);
				info!("Entered {}", state.name());
				self.states.push(state);
			},
			StateAction::Pop => {
				if let Some(mut state) = self.states.pop() {
					state.leave(resources);
					info!("Left {}", state.name());
				}
			},
			StateAction::None => ()
		}
	}

	pub fn render(&self, canvas: &mut dyn Canvas) {
		if let Some(state) = self.states.last() {
			state.render(canvas);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use engine::{math::Vector2, input::{Action, Key}};
	use rand::SeedableRng;

	struct Probe {
		name: &'static str
	}

	impl State for Probe {
		fn name(&self) -> &'static str {
			self.name
		}

		fn enter(&mut self, _resources: &mut GameResources) {}

		fn leave(&mut self, _resources: &mut GameResources) {}

		fn update(&mut self, input: &Input, _resources: &mut GameResources) -> StateAction {
			if input.key_pressed(Key::Tab) {
				StateAction::Push(Box::new(Probe { name: "overlay" }))
			}
			else if input.key_pressed(Key::Escape) {
				StateAction::Pop
			}
			else {
				StateAction::None
			}
		}

		fn render(&self, canvas: &mut dyn Canvas) {
			canvas.text(&Vector2::new(), self.name);
		}
	}

	struct NameCanvas(Vec<String>);

	impl Canvas for NameCanvas {
		fn clear(&mut self) {}
		fn polygon(&mut self, _points: &[Vector2]) {}
		fn circle(&mut self, _center: &Vector2, _radius: f64) {}

		fn text(&mut self, _position: &Vector2, string: &str) {
			self.0.push(string.to_owned());
		}
	}

	fn resources() -> GameResources {
		GameResources {
			config: GameConfig::default(),
			rng: StdRng::seed_from_u64(0)
		}
	}

	fn press(key: Key) -> Input {
		let mut input = Input::new();
		input.set_key_action(key, Action::Press);
		input
	}

	#[test]
	fn push_and_pop() {
		let mut resources = resources();
		let mut manager = StateManager::new(&mut resources, Box::new(Probe { name: "base" }));
		assert_eq!(manager.current().map(|s| s.name()), Some("base"));

		manager.update(&press(Key::Tab), &mut resources);
		assert_eq!(manager.current().map(|s| s.name()), Some("overlay"));

		let mut canvas = NameCanvas(vec![]);
		manager.render(&mut canvas);
		assert_eq!(canvas.0, vec!["overlay"]);

		manager.update(&press(Key::Escape), &mut resources);
		assert_eq!(manager.current().map(|s| s.name()), Some("base"));

		manager.update(&press(Key::Escape), &mut resources);
		assert!(manager.is_empty());

		manager.update(&Input::new(), &mut resources);
		assert!(manager.current().is_none());
	}
}
