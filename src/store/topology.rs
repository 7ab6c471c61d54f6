//! Store topology: aisles, positions, and undirected connections.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::{Aisle, GridPosition};
use crate::error::{NavError, Result};

/// The store graph: aisle nodes plus an undirected edge set.
///
/// Connections are stored once, canonically ordered as `(min, max)`, so a
/// pair of aisles can never end up with duplicate or asymmetric edges.
/// Symmetry is enforced here at the write boundary; readers never need to
/// check it. Adjacency lists are kept sorted by aisle id so neighbor
/// iteration order is deterministic.
#[derive(Clone, Debug, Default)]
pub struct StoreTopology {
    aisles: BTreeMap<u32, Aisle>,
    positions: HashMap<u32, GridPosition>,
    edges: BTreeSet<(u32, u32)>,
    adjacency: HashMap<u32, Vec<u32>>,
}

impl StoreTopology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an aisle, replacing any existing record with the same id.
    ///
    /// Existing position and connections for that id are kept.
    pub fn insert_aisle(&mut self, aisle: Aisle) {
        self.aisles.insert(aisle.id, aisle);
    }

    /// Set or replace the grid position of an aisle (one position per aisle).
    pub fn set_position(&mut self, aisle_id: u32, position: GridPosition) -> Result<()> {
        if !self.aisles.contains_key(&aisle_id) {
            return Err(NavError::UnknownAisle(aisle_id));
        }
        self.positions.insert(aisle_id, position);
        Ok(())
    }

    /// Connect two aisles bidirectionally.
    ///
    /// Idempotent: connecting an already-connected pair is a no-op and
    /// returns `Ok(false)`. Self-connections are ignored the same way.
    /// Returns `Ok(true)` when a new edge was inserted.
    pub fn connect(&mut self, a: u32, b: u32) -> Result<bool> {
        if !self.aisles.contains_key(&a) {
            return Err(NavError::UnknownAisle(a));
        }
        if !self.aisles.contains_key(&b) {
            return Err(NavError::UnknownAisle(b));
        }
        if a == b {
            return Ok(false);
        }

        let edge = (a.min(b), a.max(b));
        if !self.edges.insert(edge) {
            return Ok(false);
        }

        Self::insert_neighbor(&mut self.adjacency, a, b);
        Self::insert_neighbor(&mut self.adjacency, b, a);
        Ok(true)
    }

    fn insert_neighbor(adjacency: &mut HashMap<u32, Vec<u32>>, from: u32, to: u32) {
        let list = adjacency.entry(from).or_default();
        if let Err(idx) = list.binary_search(&to) {
            list.insert(idx, to);
        }
    }

    /// Look up an aisle by id
    pub fn aisle(&self, aisle_id: u32) -> Option<&Aisle> {
        self.aisles.get(&aisle_id)
    }

    /// Look up an aisle's grid position
    pub fn position(&self, aisle_id: u32) -> Option<&GridPosition> {
        self.positions.get(&aisle_id)
    }

    /// Whether the aisle id is known
    pub fn contains(&self, aisle_id: u32) -> bool {
        self.aisles.contains_key(&aisle_id)
    }

    /// Neighbors of an aisle, sorted ascending by id.
    ///
    /// Unknown aisles have no neighbors.
    pub fn neighbors(&self, aisle_id: u32) -> &[u32] {
        self.adjacency
            .get(&aisle_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All aisle ids, ascending
    pub fn aisle_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.aisles.keys().copied()
    }

    /// All connections as canonical `(min, max)` pairs, ascending
    pub fn connections(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.edges.iter().copied()
    }

    /// Number of aisles
    pub fn len(&self) -> usize {
        self.aisles.len()
    }

    /// Whether the topology has no aisles
    pub fn is_empty(&self) -> bool {
        self.aisles.is_empty()
    }
}
