use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};

pub fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

/// Consumes every pending event and reports whether any of them asked to
/// quit. The queue is always drained, even after a quit is seen.
pub fn drain_quit<I>(events: I) -> bool
where
    I: IntoIterator<Item = Event>,
{
    events
        .into_iter()
        .fold(false, |quit, event| quit | is_quit_event(&event))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl DirectionKeys {
    // Arrow keys, with WASD as aliases
    pub fn from_keyboard(state: &KeyboardState) -> DirectionKeys {
        let held = |primary, alias| state.is_scancode_pressed(primary) || state.is_scancode_pressed(alias);
        DirectionKeys {
            left: held(Scancode::Left, Scancode::A),
            right: held(Scancode::Right, Scancode::D),
            up: held(Scancode::Up, Scancode::W),
            down: held(Scancode::Down, Scancode::S),
        }
    }

    /// Movement for one frame, each axis in {-1, 0, 1}.
    pub fn delta(&self) -> (i32, i32) {
        (
            self.right as i32 - self.left as i32,
            self.down as i32 - self.up as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode, scancode: Scancode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Some(scancode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn key_up(keycode: Keycode, scancode: Scancode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Some(scancode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn quit_and_escape_down_are_quit_events() {
        assert!(is_quit_event(&Event::Quit { timestamp: 0 }));
        assert!(is_quit_event(&key_down(Keycode::Escape, Scancode::Escape)));
        assert!(!is_quit_event(&key_up(Keycode::Escape, Scancode::Escape)));
        assert!(!is_quit_event(&key_down(Keycode::Right, Scancode::Right)));
    }

    #[test]
    fn drain_quit_finds_quit_anywhere_in_queue() {
        let queue = vec![
            key_down(Keycode::Right, Scancode::Right),
            Event::Quit { timestamp: 0 },
            key_down(Keycode::Down, Scancode::Down),
        ];
        assert!(drain_quit(queue));

        let queue = vec![
            key_down(Keycode::Left, Scancode::Left),
            key_up(Keycode::Left, Scancode::Left),
            key_down(Keycode::Escape, Scancode::Escape),
        ];
        assert!(drain_quit(queue));
    }

    #[test]
    fn drain_quit_without_quit_keeps_running() {
        let queue = vec![
            key_down(Keycode::Up, Scancode::Up),
            key_up(Keycode::Up, Scancode::Up),
        ];
        assert!(!drain_quit(queue));
        assert!(!drain_quit(Vec::new()));
    }

    #[test]
    fn delta_right_and_down_moves_diagonally() {
        let keys = DirectionKeys {
            right: true,
            down: true,
            ..DirectionKeys::default()
        };
        assert_eq!(keys.delta(), (1, 1));
    }

    #[test]
    fn delta_no_keys_is_zero() {
        assert_eq!(DirectionKeys::default().delta(), (0, 0));
    }

    #[test]
    fn delta_opposite_keys_cancel() {
        let keys = DirectionKeys {
            left: true,
            right: true,
            up: true,
            down: false,
        };
        assert_eq!(keys.delta(), (0, -1));
    }
}
