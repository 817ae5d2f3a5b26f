//! Held-input tracking
//!
//! Keyboard and touch sources both write into the same logical-key map,
//! keyed by the arrow-key names. Keyboard additionally feeds the w/a/s/d
//! aliases; touch controls are translated to the arrow names.

use std::collections::HashMap;

/// The four logical movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Primary key name (also the name touch controls map onto)
    pub fn key(self) -> &'static str {
        match self {
            Direction::Up => "ArrowUp",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Right => "ArrowRight",
        }
    }

    /// Keyboard-only alias
    pub fn alias(self) -> &'static str {
        match self {
            Direction::Up => "w",
            Direction::Down => "s",
            Direction::Left => "a",
            Direction::Right => "d",
        }
    }
}

/// Currently-held logical keys
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down/key-up event. Keys are stored as reported by the
    /// host; only the direction names and aliases are ever read back.
    pub fn set_key(&mut self, key: &str, down: bool) {
        self.held.insert(key.to_owned(), down);
    }

    /// Record a touch control event by control identifier
    /// (`move-left`, `move-right`, `move-up`, `move-down`).
    pub fn set_touch_control(&mut self, control: &str, active: bool) {
        let key = match control {
            "move-left" => Direction::Left.key(),
            "move-right" => Direction::Right.key(),
            "move-up" => Direction::Up.key(),
            "move-down" => Direction::Down.key(),
            other => {
                log::debug!("ignoring unknown touch control {other:?}");
                return;
            }
        };
        self.set_key(key, active);
    }

    /// Whether a direction is held via its primary key or its alias
    pub fn held(&self, direction: Direction) -> bool {
        self.key_down(direction.key()) || self.key_down(direction.alias())
    }

    /// Release everything (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    fn key_down(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }
}
