// Page geometry and the two-graphs-per-page placement walk

/// Physical page size in points (A4 portrait).
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

/// Vertical anchors of the two graph slots, PDF origin at the bottom left.
pub const ROW_ANCHORS: [f64; 2] = [100.0, 500.0];

/// Left edge of the graph column. The second column is reserved for
/// compact multi-column layouts.
pub const GRAPH_COLUMN: f64 = 50.0;
pub const ALT_GRAPH_COLUMN: f64 = 305.0;

/// Rendered graph footprint in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphSize {
    pub width: f64,
    pub height: f64,
}

impl GraphSize {
    /// Standard footprint, two graphs per page.
    pub const NORMAL: GraphSize = GraphSize {
        width: 400.0,
        height: 300.0,
    };
    /// Compact footprint for dense layouts.
    pub const COMPACT: GraphSize = GraphSize {
        width: 175.0,
        height: 125.0,
    };
}

/// Slot assigned to one logical graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePosition {
    pub page_index: usize,
    pub row: usize,
}

impl PagePosition {
    /// Bottom-left corner of the graph at this slot.
    pub fn origin(&self) -> (f64, f64) {
        (GRAPH_COLUMN, ROW_ANCHORS[self.row])
    }
}

/// Placement instruction for the next graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: PagePosition,
    /// True when the current page is full and a fresh one must be opened
    /// before drawing.
    pub turn_before: bool,
}

/// Walks graph slots in order: two rows per page, a page turn before each
/// odd pair. Purely positional; graph content never influences placement.
#[derive(Debug, Default)]
pub struct PageCursor {
    placed: usize,
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> Placement {
        let index = self.placed;
        self.placed += 1;
        Placement {
            position: PagePosition {
                page_index: index / 2,
                row: index % 2,
            },
            turn_before: index > 0 && index % 2 == 0,
        }
    }

    /// Physical pages opened so far. The first page exists before any graph
    /// is placed, so an empty report still counts one.
    pub fn pages_opened(&self) -> usize {
        self.placed.div_ceil(2).max(1)
    }
}
