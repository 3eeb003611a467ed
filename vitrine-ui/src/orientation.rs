//! Direction-to-rotation mapping for the rotatable icons.
//!
//! Arrow and caret glyphs are authored once in their resting orientation
//! and rotated with a stylesheet class. The mapping from a logical
//! direction to that class depends on the icon family: an arrow rests
//! pointing right, a caret rests pointing down.

use tracing::debug;

/// Logical orientation for rotatable icons.
///
/// Mirrors the `direction` attribute values accepted from upstream
/// markup. Stored nowhere; computed fresh on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parse a direction attribute value (as it appears in markup).
    ///
    /// Total over arbitrary input. Matching is exact: anything other
    /// than the four lowercase names, casing variants included, yields
    /// `None` and the icon renders in its resting orientation.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            other => {
                debug!("unrecognized direction {:?}, falling back to resting orientation", other);
                None
            }
        }
    }

    /// Attribute value string (e.g., "up").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which mapping table [`resolve_rotation`] consults.
///
/// The two families are not interchangeable: the same logical direction
/// maps to a different rotation in each, because their resting
/// orientations differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKind {
    /// Outward-pointing arrow, rests pointing right.
    Arrow,
    /// Disclosure caret, rests pointing down.
    Caret,
}

/// Rotation applied to a rendered icon.
///
/// Wraps the stylesheet's rotate utilities as an enum for type-safe
/// comparisons; `as_class` returns the literal class name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Resting orientation.
    None,
    /// Quarter turn clockwise.
    Clockwise,
    /// Half turn.
    Half,
    /// Quarter turn counter-clockwise.
    CounterClockwise,
}

impl Rotation {
    /// Stylesheet class name (e.g., "rotate-90").
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::None => "rotate-0",
            Self::Clockwise => "rotate-90",
            Self::Half => "rotate-180",
            Self::CounterClockwise => "-rotate-90",
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Map a logical direction to the rotation class for one icon family.
///
/// Total over its domain: a missing direction resolves to the family's
/// resting orientation. Each family defines its own fallback arm; the
/// two tables share no entries.
pub fn resolve_rotation(kind: ArrowKind, direction: Option<Direction>) -> Rotation {
    match kind {
        ArrowKind::Arrow => match direction {
            Some(Direction::Right) => Rotation::None,
            Some(Direction::Left) => Rotation::Half,
            Some(Direction::Up) => Rotation::CounterClockwise,
            Some(Direction::Down) => Rotation::Clockwise,
            None => Rotation::None,
        },
        ArrowKind::Caret => match direction {
            Some(Direction::Down) => Rotation::None,
            Some(Direction::Up) => Rotation::Half,
            Some(Direction::Left) => Rotation::CounterClockwise,
            Some(Direction::Right) => Rotation::Clockwise,
            None => Rotation::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_table() {
        let arrow = ArrowKind::Arrow;
        assert_eq!(resolve_rotation(arrow, Some(Direction::Right)), Rotation::None);
        assert_eq!(resolve_rotation(arrow, Some(Direction::Left)), Rotation::Half);
        assert_eq!(
            resolve_rotation(arrow, Some(Direction::Up)),
            Rotation::CounterClockwise
        );
        assert_eq!(resolve_rotation(arrow, Some(Direction::Down)), Rotation::Clockwise);
    }

    #[test]
    fn caret_table() {
        let caret = ArrowKind::Caret;
        assert_eq!(resolve_rotation(caret, Some(Direction::Down)), Rotation::None);
        assert_eq!(resolve_rotation(caret, Some(Direction::Up)), Rotation::Half);
        assert_eq!(
            resolve_rotation(caret, Some(Direction::Left)),
            Rotation::CounterClockwise
        );
        assert_eq!(resolve_rotation(caret, Some(Direction::Right)), Rotation::Clockwise);
    }

    #[test]
    fn missing_direction_rests() {
        assert_eq!(resolve_rotation(ArrowKind::Arrow, None), Rotation::None);
        assert_eq!(resolve_rotation(ArrowKind::Caret, None), Rotation::None);
    }

    #[test]
    fn unrecognized_direction_rests() {
        let junk = Direction::from_attr("diagonal");
        assert_eq!(junk, None);
        assert_eq!(resolve_rotation(ArrowKind::Arrow, junk), Rotation::None);
        assert_eq!(resolve_rotation(ArrowKind::Caret, junk), Rotation::None);
    }

    #[test]
    fn quarter_turns_differ_per_family() {
        assert_eq!(
            resolve_rotation(ArrowKind::Arrow, Some(Direction::Up)).as_class(),
            "-rotate-90"
        );
        assert_eq!(
            resolve_rotation(ArrowKind::Caret, Some(Direction::Left)).as_class(),
            "-rotate-90"
        );
        assert_eq!(
            resolve_rotation(ArrowKind::Arrow, Some(Direction::Down)).as_class(),
            "rotate-90"
        );
        assert_eq!(
            resolve_rotation(ArrowKind::Caret, Some(Direction::Right)).as_class(),
            "rotate-90"
        );
    }

    #[test]
    fn from_attr_known_values() {
        assert_eq!(Direction::from_attr("up"), Some(Direction::Up));
        assert_eq!(Direction::from_attr("down"), Some(Direction::Down));
        assert_eq!(Direction::from_attr("left"), Some(Direction::Left));
        assert_eq!(Direction::from_attr("right"), Some(Direction::Right));
    }

    #[test]
    fn from_attr_is_exact() {
        assert_eq!(Direction::from_attr("Up"), None);
        assert_eq!(Direction::from_attr("LEFT"), None);
        assert_eq!(Direction::from_attr(" down"), None);
        assert_eq!(Direction::from_attr(""), None);
        assert_eq!(Direction::from_attr("north"), None);
    }

    #[test]
    fn round_trip() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(Direction::from_attr(d.as_str()), Some(d));
        }
    }

    #[test]
    fn rotation_classes() {
        assert_eq!(Rotation::None.as_class(), "rotate-0");
        assert_eq!(Rotation::Clockwise.as_class(), "rotate-90");
        assert_eq!(Rotation::Half.as_class(), "rotate-180");
        assert_eq!(Rotation::CounterClockwise.as_class(), "-rotate-90");
    }
}
