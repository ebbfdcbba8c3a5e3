//! `OccupancyGrid` and its movement query helpers.

use ct_core::{AgentId, GridPoint, MOVEMENTS, Offset, grid_cells};

use crate::{GridError, GridResult};

// ── MoveSet ───────────────────────────────────────────────────────────────────

/// The legal subset of [`MOVEMENTS`] for one agent, stored inline.
///
/// At most nine entries, so no heap allocation per query.  Entries keep the
/// order of `MOVEMENTS`, which keeps random choice deterministic per seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveSet {
    moves: [Offset; 9],
    len:   usize,
}

impl MoveSet {
    fn new() -> Self {
        Self { moves: [Offset::STAY; 9], len: 0 }
    }

    fn push(&mut self, offset: Offset) {
        self.moves[self.len] = offset;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Offset] {
        &self.moves[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, offset: Offset) -> bool {
        self.as_slice().contains(&offset)
    }
}

// ── OccupancyGrid ─────────────────────────────────────────────────────────────

/// N×N grid of optional agent references, kept in two snapshots.
///
/// Both buffers are flat row-major `Vec`s indexed by `y * size + x`.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    size:    usize,
    current: Vec<Option<AgentId>>,
    next:    Vec<Option<AgentId>>,
}

impl OccupancyGrid {
    /// An empty `size × size` grid.  Fails if the side is too long to
    /// address with `GridPoint` coordinates.
    pub fn new(size: usize) -> GridResult<Self> {
        let cells = grid_cells(size)?;
        Ok(Self {
            size,
            current: vec![None; cells],
            next:    vec![None; cells],
        })
    }

    /// Build a grid with agent `i` at `positions[i]` in both buffers.
    pub fn from_positions(size: usize, positions: &[GridPoint]) -> GridResult<Self> {
        let cells = grid_cells(size)?;
        if positions.len() > cells {
            return Err(GridError::AgentCountExceedsCells(positions.len(), cells));
        }
        let mut grid = Self::new(size)?;
        for (i, &point) in positions.iter().enumerate() {
            grid.place(AgentId(i as u32), point)?;
        }
        Ok(grid)
    }

    /// Put `agent` at `point` in both buffers.  Initial placement only.
    pub fn place(&mut self, agent: AgentId, point: GridPoint) -> GridResult<()> {
        let idx = self
            .cell_index(point)
            .ok_or(GridError::OutOfBounds { point, size: self.size })?;
        if let Some(occupant) = self.current[idx].or(self.next[idx]) {
            return Err(GridError::CellOccupied { agent, point, occupant });
        }
        self.current[idx] = Some(agent);
        self.next[idx] = Some(agent);
        Ok(())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index of an in-bounds point; `None` outside the grid.
    #[inline]
    fn cell_index(&self, point: GridPoint) -> Option<usize> {
        point
            .in_bounds(self.size)
            .then(|| point.y as usize * self.size + point.x as usize)
    }

    /// Occupant of `point` in the committed buffer.
    #[inline]
    pub fn current(&self, point: GridPoint) -> Option<AgentId> {
        self.cell_index(point).and_then(|i| self.current[i])
    }

    /// Occupant of `point` in the in-progress buffer.
    #[inline]
    pub fn next(&self, point: GridPoint) -> Option<AgentId> {
        self.cell_index(point).and_then(|i| self.next[i])
    }

    /// In-bounds points of the 3×3 block centred on `point`, clamped to the
    /// grid edges.  Includes `point` itself.
    pub fn neighborhood(&self, point: GridPoint) -> impl Iterator<Item = GridPoint> + '_ {
        MOVEMENTS
            .iter()
            .map(move |&m| point + m)
            .filter(move |p| p.in_bounds(self.size))
    }

    /// `true` if any cell in the clamped 3×3 block around `point` holds, in
    /// the *current* buffer, an agent for which `is_infectious` returns true.
    ///
    /// The centre cell is scanned too; callers only ask on behalf of
    /// susceptible agents, so an agent never exposes itself.
    pub fn has_infected_neighbor<F>(&self, point: GridPoint, mut is_infectious: F) -> bool
    where
        F: FnMut(AgentId) -> bool,
    {
        self.neighborhood(point)
            .filter_map(|p| self.current(p))
            .any(|agent| is_infectious(agent))
    }

    /// Out of bounds, held in `current`, or claimed in `next`.
    #[inline]
    pub fn is_occupied(&self, point: GridPoint) -> bool {
        match self.cell_index(point) {
            None => true,
            Some(i) => self.current[i].is_some() || self.next[i].is_some(),
        }
    }

    /// The offsets from [`MOVEMENTS`] whose destination is free in both
    /// buffers.
    ///
    /// The mover's own cell is always occupied (by itself, in `current` at
    /// the start of a tick or in `next` after a move), so stay never appears
    /// here.  An empty set means the agent has to stay put.
    pub fn legal_movements(&self, point: GridPoint) -> MoveSet {
        let mut set = MoveSet::new();
        for &m in &MOVEMENTS {
            if !self.is_occupied(point + m) {
                set.push(m);
            }
        }
        set
    }

    /// Move `agent` from `from` by `offset` in the `next` buffer and return
    /// its new position.  The caller stores the position on the agent.
    ///
    /// `offset` must come from [`legal_movements`](Self::legal_movements)
    /// for `from`; a zero offset is a no-op.
    pub fn move_agent(&mut self, agent: AgentId, from: GridPoint, offset: Offset) -> GridPoint {
        if offset.is_stay() {
            return from;
        }
        let to = from + offset;
        let (Some(old), Some(new)) = (self.cell_index(from), self.cell_index(to)) else {
            debug_assert!(false, "{agent} moved off the grid: {from} + {offset:?}");
            return from;
        };
        debug_assert_eq!(self.next[old], Some(agent), "{agent} is not at {from} in next");
        debug_assert!(self.next[new].is_none() && self.current[new].is_none());
        self.next[new] = Some(agent);
        self.next[old] = None;
        to
    }

    /// Copy `next` over `current`.  Runs once at the start of every tick,
    /// before any agent update.
    pub fn commit(&mut self) {
        self.current.clone_from_slice(&self.next);
    }

    /// Number of occupied cells in the committed buffer.
    pub fn occupied_count(&self) -> usize {
        self.current.iter().filter(|c| c.is_some()).count()
    }

    /// Number of occupied cells in the in-progress buffer.
    pub fn occupied_next_count(&self) -> usize {
        self.next.iter().filter(|c| c.is_some()).count()
    }

    /// `true` if both buffers agree cell for cell.  Holds right after
    /// [`commit`](Self::commit).
    pub fn is_settled(&self) -> bool {
        self.current == self.next
    }
}
