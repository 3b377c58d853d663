use engine::{Canvas, Input, Key, input::Action};
use log::info;
use crate::{GameResources, StateManager};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScriptEvent {
	pub tick: u64,
	pub key: Key,
	pub action: Action
}

fn tap(script: &mut Vec<ScriptEvent>, tick: u64, key: Key) {
	hold(script, tick, tick + 1, key);
}

fn hold(script: &mut Vec<ScriptEvent>, from: u64, to: u64, key: Key) {
	script.push(ScriptEvent { tick: from, key, action: Action::Press });
	script.push(ScriptEvent { tick: to, key, action: Action::Release });
}

/// A short session touching both modes: a flight with steering and sliders,
/// a round of incremental edits, then a reset and quit.
pub fn demo_script() -> Vec<ScriptEvent> {
	let mut script = Vec::new();

	tap(&mut script, 0, Key::Space);
	hold(&mut script, 5, 65, Key::Up);
	hold(&mut script, 65, 80, Key::Right);
	hold(&mut script, 80, 160, Key::Up);
	hold(&mut script, 160, 170, Key::Left);
	hold(&mut script, 170, 260, Key::Down);
	tap(&mut script, 270, Key::E);
	tap(&mut script, 275, Key::X);

	tap(&mut script, 300, Key::Tab);
	for (i, key) in [Key::Right, Key::E, Key::E, Key::X, Key::Up, Key::Q, Key::T, Key::Right, Key::E].iter().enumerate() {
		tap(&mut script, 310 + 10 * i as u64, *key);
	}
	tap(&mut script, 400, Key::Tab);

	hold(&mut script, 410, 500, Key::Up);
	tap(&mut script, 520, Key::R);
	tap(&mut script, 590, Key::Escape);

	script
}

/// Feeds the script through the state manager one tick at a time and returns
/// the number of ticks that ran.
pub fn run(manager: &mut StateManager, resources: &mut GameResources, script: &[ScriptEvent], canvas: &mut dyn Canvas) -> u64 {
	let mut input = Input::new();
	let ticks = resources.config.headless_ticks;

	for tick in 0..ticks {
		for event in script.iter().filter(|e| e.tick == tick) {
			input.set_key_action(event.key, event.action);
		}

		if input.key_pressed(Key::Escape) {
			info!("Escape pressed at tick {}", tick);
			return tick;
		}

		manager.update(&input, resources);

		if manager.is_empty() {
			return tick + 1;
		}

		manager.render(canvas);
		input.clear();
	}

	ticks
}
