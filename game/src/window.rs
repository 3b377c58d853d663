use std::time::{Duration, Instant};
use engine::{Canvas, Input, Key, input::Action};
use log::info;
use crate::{GameError, GameResources, StateManager};

const TITLE: &str = "Matrix Transformation Game";

fn map_key(key: glfw::Key) -> Option<Key> {
	match key {
		glfw::Key::Left => Some(Key::Left),
		glfw::Key::Right => Some(Key::Right),
		glfw::Key::Up => Some(Key::Up),
		glfw::Key::Down => Some(Key::Down),
		glfw::Key::Space => Some(Key::Space),
		glfw::Key::Tab => Some(Key::Tab),
		glfw::Key::Escape => Some(Key::Escape),
		glfw::Key::E => Some(Key::E),
		glfw::Key::Q => Some(Key::Q),
		glfw::Key::R => Some(Key::R),
		glfw::Key::T => Some(Key::T),
		glfw::Key::X => Some(Key::X),
		glfw::Key::Z => Some(Key::Z),
		_ => None
	}
}

fn map_action(action: glfw::Action) -> Action {
	match action {
		glfw::Action::Press => Action::Press,
		glfw::Action::Release => Action::Release,
		glfw::Action::Repeat => Action::Repeat
	}
}

/// Runs the game against keyboard input from a glfw window. Events are
/// buffered into an `Input` and consumed once per fixed-length tick.
///
/// The window has no client API and never draws. It exists to receive keyboard
/// focus; frames still go to `canvas`.
pub fn run(manager: &mut StateManager, resources: &mut GameResources, canvas: &mut dyn Canvas) -> Result<(), GameError> {
	let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)
		.map_err(|e| GameError::Window(format!("could not initialize glfw: {:?}", e)))?;
	glfw.window_hint(glfw::WindowHint::ClientApi(glfw::ClientApiHint::NoApi));

	let width = resources.config.field_width as u32;
	let height = resources.config.field_height as u32;
	let (mut window, events) = glfw.create_window(width, height, TITLE, glfw::WindowMode::Windowed)
		.ok_or_else(|| GameError::Window(String::from("could not create window")))?;
	window.set_key_polling(true);
	window.set_focus_polling(true);

	let tick_interval = Duration::from_millis(resources.config.tick_interval_ms.max(1));
	let mut input = Input::new();
	let mut last_tick = Instant::now();

	info!("Window open, Escape closes it");

	while !window.should_close() {
		let until_tick = tick_interval.checked_sub(last_tick.elapsed()).unwrap_or_default();
		glfw.wait_events_timeout(until_tick.as_secs_f64());

		for (_, event) in glfw::flush_messages(&events) {
			match event {
				glfw::WindowEvent::Key(key, _, action, _) => {
					if key == glfw::Key::Escape && action == glfw::Action::Press {
						window.set_should_close(true);
					}

					if let Some(key) = map_key(key) {
						input.set_key_action(key, map_action(action));
					}
				},
				// Key-up events go to whichever window has focus, so held keys would stick.
				glfw::WindowEvent::Focus(false) => input.release_all(),
				_ => ()
			}
		}

		if last_tick.elapsed() < tick_interval {
			continue;
		}

		last_tick = Instant::now();
		manager.update(&input, resources);

		if manager.is_empty() {
			break;
		}

		manager.render(canvas);
		input.clear();
	}

	Ok(())
}
