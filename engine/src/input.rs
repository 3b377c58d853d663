use std::collections::HashSet;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
	Left,
	Right,
	Up,
	Down,
	Space,
	Tab,
	Escape,
	E,
	Q,
	R,
	T,
	X,
	Z
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
	Press,
	Release,
	Repeat
}

/// Keyboard state collected between two ticks.
///
/// Events are buffered as they arrive and the whole snapshot is handed to the
/// tick, which reads it once. `clear` drops the per-tick presses but keeps
/// track of which keys are still held.
#[derive(Default, Clone, Debug)]
pub struct Input {
	held_keys: HashSet<Key>,
	pressed_keys: Vec<Key>
}

impl Input {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set_key_action(&mut self, key: Key, action: Action) {
		match action {
			Action::Press => {
				self.held_keys.insert(key);
				self.pressed_keys.push(key);
			},
			Action::Release => {
				self.held_keys.remove(&key);
			},
			Action::Repeat => ()
		}
	}

	pub fn key_down(&self, key: Key) -> bool {
		self.held_keys.contains(&key)
	}

	pub fn key_pressed(&self, key: Key) -> bool {
		self.pressed_keys.contains(&key)
	}

	pub fn clear(&mut self) {
		self.pressed_keys.clear();
	}

	/// Forgets every held key, for when key-up events can no longer arrive.
	pub fn release_all(&mut self) {
		self.held_keys.clear();
		self.clear();
	}
}
