//! Key presses the demos react to.
//!
//! ```text
//! a ──► push (0, 0,  1)      w ──► push (-1, 0, 0)
//! d ──► push (0, 0, -1)      s ──► push ( 1, 0, 0)
//! p ──► toggle pause
//! ```

use fg_core::Vec3;

/// Horizontal push directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// Unit push vector in world space.
    pub fn vector(self) -> Vec3 {
        match self {
            Direction::Backward => Vec3::new(0.0, 0.0, 1.0),
            Direction::Forward => Vec3::new(0.0, 0.0, -1.0),
            Direction::Left => Vec3::new(-1.0, 0.0, 0.0),
            Direction::Right => Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

/// A key event understood by every demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Push(Direction),
    Pause,
}

impl Key {
    pub fn from_char(c: char) -> Option<Key> {
        match c.to_ascii_lowercase() {
            'a' => Some(Key::Push(Direction::Backward)),
            'd' => Some(Key::Push(Direction::Forward)),
            'w' => Some(Key::Push(Direction::Left)),
            's' => Some(Key::Push(Direction::Right)),
            'p' => Some(Key::Pause),
            _ => None,
        }
    }
}

/// A key press scheduled for a given frame, written `key@frame` (e.g. `w@10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledKey {
    pub frame: u64,
    pub key: Key,
}

impl std::str::FromStr for ScheduledKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, frame) = s
            .trim()
            .split_once('@')
            .ok_or_else(|| format!("expected key@frame, got `{}`", s))?;

        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Key::from_char(c).ok_or_else(|| format!("unknown key `{}`", c))?,
            _ => return Err(format!("expected a single key character, got `{}`", key)),
        };
        let frame = frame
            .parse()
            .map_err(|e| format!("invalid frame `{}`: {}", frame, e))?;

        Ok(ScheduledKey { frame, key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Key::from_char('a'), Some(Key::Push(Direction::Backward)));
        assert_eq!(Key::from_char('D'), Some(Key::Push(Direction::Forward)));
        assert_eq!(Key::from_char('w'), Some(Key::Push(Direction::Left)));
        assert_eq!(Key::from_char('s'), Some(Key::Push(Direction::Right)));
        assert_eq!(Key::from_char('p'), Some(Key::Pause));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_direction_vectors_are_unit() {
        for d in [Direction::Left, Direction::Right, Direction::Forward, Direction::Backward] {
            assert!((d.vector().magnitude() - 1.0).abs() < 1e-12);
        }
        assert_eq!(Direction::Backward.vector(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_parse_scheduled_key() {
        let parsed: ScheduledKey = "w@10".parse().expect("valid schedule");
        assert_eq!(
            parsed,
            ScheduledKey {
                frame: 10,
                key: Key::Push(Direction::Left)
            }
        );

        assert!("w10".parse::<ScheduledKey>().is_err());
        assert!("x@3".parse::<ScheduledKey>().is_err());
        assert!("ww@3".parse::<ScheduledKey>().is_err());
        assert!("p@soon".parse::<ScheduledKey>().is_err());
    }
}
