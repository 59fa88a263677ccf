use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the parsed source text. Lines and columns are one-based,
/// matching parser diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Where a node came from, if anywhere.
///
/// Parser-produced nodes carry a known position; nodes built by a rebuilder
/// rule carry none, since they no longer correspond to source text.
///
/// Locations are diagnostic only: two nodes that differ solely in their
/// locations are structurally equal, so `PartialEq` always holds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(Option<Position>);

impl Location {
    /// A location with no source correspondence.
    pub const fn none() -> Self {
        Location(None)
    }

    pub const fn at(line: usize, column: usize) -> Self {
        Location(Some(Position { line, column }))
    }

    pub fn position(&self) -> Option<Position> {
        self.0
    }

    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }
}

impl PartialEq for Location {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Position { line, column }) => write!(f, "{}:{}", line, column),
            None => write!(f, "<rebuilt>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_never_affect_equality() {
        assert_eq!(Location::at(1, 1), Location::at(7, 42));
        assert_eq!(Location::at(3, 9), Location::none());
    }

    #[test]
    fn test_position_is_still_observable() {
        assert_eq!(Location::at(3, 14).position(), Some(Position { line: 3, column: 14 }));
        assert!(!Location::none().is_known());
        assert_eq!(Location::at(3, 14).to_string(), "3:14");
        assert_eq!(Location::none().to_string(), "<rebuilt>");
    }
}
