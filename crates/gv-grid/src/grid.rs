//! The node grid and its two presentation orders.
//!
//! # Storage
//!
//! Nodes live in one row-major `Vec<Node>` of `width × width` slots; a
//! [`NodeId`] is the slot index.  The sorted view never copies nodes: it is a
//! permutation of slot indices, rebuilt lazily the first time it is needed
//! after any status change.
//!
//! # Dirty flags
//!
//! Two independent flags are kept:
//!
//! - `sort_stale`: the permutation no longer reflects node statuses.
//! - `updated_since_draw`: something changed that the presenter has not
//!   drawn yet (day label, cell colours).  Cleared by [`Grid::take_updated`].

use std::cmp::Reverse;

use gv_core::{Category, GridRng, GvError, GvResult, NodeId, Status};

use crate::node::Node;
use crate::palette::Rgb;

/// Which order the presenter draws nodes in.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum PresentationMode {
    /// Raw slot order.  Slots are randomised each time sorting is switched off.
    #[default]
    Unsorted,
    /// Grouped by status rank, most severe first.
    Sorted,
}

/// Fixed-size square grid of nodes.
pub struct Grid {
    width:              u32,
    nodes:              Vec<Node>,
    mode:               PresentationMode,
    /// Slot indices in sorted display order.  Valid only when `!sort_stale`.
    sorted:             Vec<NodeId>,
    sort_stale:         bool,
    updated_since_draw: bool,
}

impl Grid {
    /// A `width × width` grid of healthy nodes.
    ///
    /// Fails with [`GvError::EmptyGrid`] for `width == 0`: every later
    /// percentage computation divides by the node count.
    pub fn new(width: u32) -> GvResult<Self> {
        let count = checked_count(width)?;
        Ok(Self::from_nodes(width, vec![Node::default(); count]))
    }

    /// A grid seeded from explicit statuses in row-major order.
    ///
    /// `statuses.len()` must equal `width²`.
    pub fn from_statuses(width: u32, statuses: &[Status]) -> GvResult<Self> {
        let count = checked_count(width)?;
        if statuses.len() != count {
            return Err(GvError::Config(format!(
                "{} statuses supplied for a {width}×{width} grid ({count} nodes)",
                statuses.len()
            )));
        }
        Ok(Self::from_nodes(width, statuses.iter().map(|&s| Node::new(s)).collect()))
    }

    fn from_nodes(width: u32, nodes: Vec<Node>) -> Self {
        Self {
            width,
            nodes,
            mode: PresentationMode::Unsorted,
            sorted: Vec::new(),
            sort_stale: true,
            updated_since_draw: true,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of nodes.  Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// All nodes in slot order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// `(NodeId, &Node)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    #[inline]
    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    #[inline]
    pub fn is_sorted_mode(&self) -> bool {
        self.mode == PresentationMode::Sorted
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move node `id` into `category`.
    ///
    /// Infected conversions enter as [`Status::InfectedUnknown`].  Returns
    /// `false` if the node already had that entry status.
    pub fn convert(&mut self, id: NodeId, category: Category) -> bool {
        let node = &mut self.nodes[id.index()];
        let changed = match category {
            Category::Healthy => node.convert_healthy(),
            Category::Infected => node.convert_infected(),
            Category::Recovered => node.convert_recovered(),
            Category::Dead => node.convert_dead(),
        };
        if changed {
            self.sort_stale = true;
            self.updated_since_draw = true;
        }
        changed
    }

    /// Apply one per-frame colour step to every node.  Returns the number of
    /// nodes still shifting afterwards.
    pub fn advance_animations(&mut self) -> usize {
        self.nodes
            .iter_mut()
            .map(|n| n.advance_animation())
            .filter(|&still| still)
            .count()
    }

    /// Set every node's per-frame colour step.
    pub fn set_max_step(&mut self, step: u8) {
        for node in &mut self.nodes {
            node.set_max_step(step);
        }
    }

    /// Flip between unsorted and sorted presentation.
    ///
    /// Leaving sorted mode shuffles slot positions so the unsorted view
    /// shows no residual grouping.  Existing `NodeId`s are invalidated by
    /// that shuffle; callers must not hold them across a toggle.
    pub fn toggle_sort(&mut self, rng: &mut GridRng) -> PresentationMode {
        self.mode = match self.mode {
            PresentationMode::Sorted => {
                rng.shuffle(&mut self.nodes);
                PresentationMode::Unsorted
            }
            PresentationMode::Unsorted => PresentationMode::Sorted,
        };
        self.sort_stale = true;
        self.updated_since_draw = true;
        self.mode
    }

    /// Flag a change the presenter should pick up (e.g. a new day label).
    #[inline]
    pub fn mark_updated(&mut self) {
        self.updated_since_draw = true;
    }

    /// Return and clear the "updated since draw" flag.
    #[inline]
    pub fn take_updated(&mut self) -> bool {
        std::mem::take(&mut self.updated_since_draw)
    }

    #[inline]
    pub fn is_updated(&self) -> bool {
        self.updated_since_draw
    }

    // ── Presentation ──────────────────────────────────────────────────────

    /// Slot indices ordered by descending status rank.  Equal statuses keep
    /// slot order.  Rebuilt only if a status changed since the last call.
    pub fn sorted_order(&mut self) -> &[NodeId] {
        if self.sort_stale {
            self.sorted.clear();
            self.sorted.extend((0..self.nodes.len() as u32).map(NodeId));
            let nodes = &self.nodes;
            self.sorted
                .sort_by_key(|id| Reverse(nodes[id.index()].status().rank()));
            self.sort_stale = false;
        }
        &self.sorted
    }

    /// A drawable view in the current presentation order.
    ///
    /// `animate` selects interpolated colours; the sorted view always shows
    /// resting colours.
    pub fn view(&mut self, animate: bool) -> GridView<'_> {
        if self.is_sorted_mode() {
            self.sorted_order();
        }
        GridView {
            animated: animate && !self.is_sorted_mode(),
            grid:     self,
        }
    }
}

fn checked_count(width: u32) -> GvResult<usize> {
    if width == 0 {
        return Err(GvError::EmptyGrid);
    }
    let count = width as usize * width as usize;
    u32::try_from(count)
        .map(|_| count)
        .map_err(|_| GvError::Config(format!("grid width {width} exceeds the addressable node count")))
}

// ── GridView ──────────────────────────────────────────────────────────────────

/// One drawable cell: display position plus the node shown there.
#[derive(Copy, Clone, Debug)]
pub struct Cell<'a> {
    pub x:        u32,
    pub y:        u32,
    pub id:       NodeId,
    pub node:     &'a Node,
    pub animated: bool,
}

impl Cell<'_> {
    #[inline]
    pub fn colour(&self) -> Rgb {
        self.node.display_colour(self.animated)
    }

    /// Pixel rectangle `(left, top, side)` for a node side of `node_size`.
    #[inline]
    pub fn rect(&self, node_size: u32) -> (u32, u32, u32) {
        (self.x * node_size, self.y * node_size, node_size)
    }
}

/// Read-only, display-ordered view over a [`Grid`].
pub struct GridView<'a> {
    grid:     &'a Grid,
    animated: bool,
}

impl<'a> GridView<'a> {
    #[inline]
    pub fn width(&self) -> u32 {
        self.grid.width
    }

    #[inline]
    pub fn mode(&self) -> PresentationMode {
        self.grid.mode
    }

    /// Cells in row-major display order.
    pub fn cells(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let grid = self.grid;
        let animated = self.animated;
        let width = grid.width;
        (0..grid.nodes.len()).map(move |slot| {
            let id = match grid.mode {
                PresentationMode::Sorted => grid.sorted[slot],
                PresentationMode::Unsorted => NodeId(slot as u32),
            };
            Cell {
                x: slot as u32 % width,
                y: slot as u32 / width,
                id,
                node: &grid.nodes[id.index()],
                animated,
            }
        })
    }
}
