//! Aisle and grid position types.

use serde::{Deserialize, Serialize};

/// A named location node in the store graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aisle {
    /// Unique aisle identifier
    pub id: u32,
    /// Display name (e.g. "Dairy")
    pub name: String,
    /// Optional product category
    pub category: Option<String>,
}

impl Aisle {
    /// Create a new aisle without a category
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
        }
    }

    /// Create a new aisle with a category
    pub fn with_category(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: Some(category.into()),
        }
    }
}

/// Grid position of an aisle on the store floor plan (integer cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
    /// Whether shoppers can walk through this cell
    #[serde(default = "walkable_default")]
    pub walkable: bool,
}

fn walkable_default() -> bool {
    true
}

impl GridPosition {
    /// Create a new walkable position
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            walkable: true,
        }
    }

    /// Manhattan distance to another position
    #[inline]
    pub fn manhattan_distance(&self, other: &GridPosition) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let a = GridPosition::new(0, 0);
        let b = GridPosition::new(3, -4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
    }

    #[test]
    fn test_walkable_default() {
        let pos: GridPosition = serde_yaml::from_str("{x: 1, y: 2}").unwrap();
        assert!(pos.walkable);
    }
}
