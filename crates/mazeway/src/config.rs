//! Terrain cost configuration.

use std::collections::HashMap;

use crate::maze::DOOR;

/// Mapping from maze symbols to the cost of stepping onto them.
///
/// Symbols that are not listed cost `0`. A negative cost makes a cell
/// impassable. The door symbol `|` always costs `0` and cannot be
/// overridden.
///
/// With the `serde` feature the table (de)serializes as a plain
/// symbol → cost map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CostTable {
    costs: HashMap<char, i32>,
}

impl Default for CostTable {
    /// `' '` 1, `'#'` wall, `'.'` 2, `'-'` 5, `'w'` 10.
    fn default() -> Self {
        Self::empty()
            .with(' ', 1)
            .with('#', -1)
            .with('.', 2)
            .with('-', 5)
            .with('w', 10)
    }
}

impl CostTable {
    /// A table with no entries, under which every symbol costs 0.
    pub fn empty() -> Self {
        Self {
            costs: HashMap::new(),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, symbol: char, cost: i32) -> Self {
        self.insert(symbol, cost);
        self
    }

    /// Set the cost of `symbol`, returning the previous entry.
    ///
    /// Entries for the door symbol are ignored.
    pub fn insert(&mut self, symbol: char, cost: i32) -> Option<i32> {
        if symbol == DOOR {
            log::warn!("ignoring cost {cost} for door symbol {DOOR:?}");
            return None;
        }
        self.costs.insert(symbol, cost)
    }

    /// Resolved cost of `symbol`.
    pub fn cost_of(&self, symbol: char) -> i32 {
        if symbol == DOOR {
            return 0;
        }
        self.costs.get(&symbol).copied().unwrap_or(0)
    }

    /// The configured entry for `symbol`, if any.
    pub fn get(&self, symbol: char) -> Option<i32> {
        self.costs.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl FromIterator<(char, i32)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (char, i32)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (symbol, cost) in iter {
            table.insert(symbol, cost);
        }
        table
    }
}

impl From<HashMap<char, i32>> for CostTable {
    fn from(costs: HashMap<char, i32>) -> Self {
        costs.into_iter().collect()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_is_a_plain_map() {
        let t: CostTable = serde_json::from_str(r##"{" ": 1, "#": -1, "~": 3}"##).unwrap();
        assert_eq!(t.cost_of(' '), 1);
        assert_eq!(t.cost_of('#'), -1);
        assert_eq!(t.cost_of('~'), 3);

        let json = serde_json::to_string(&CostTable::default()).unwrap();
        let back: CostTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CostTable::default());
    }
}
