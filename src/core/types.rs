//! Simulation data: the bird, obstacles and the paired obstacle collection.

use serde::Serialize;
use std::fmt;

/// Axis-aligned rectangle in world coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the two rectangles share a non-empty area. Touching edges
    /// do not count.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// The player. Only `y` and `velocity` change while a game runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bird {
    /// Top edge in world units. 0 = ceiling.
    pub y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
    x: f64,
    size: f64,
}

impl Bird {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self {
            y,
            velocity: 0.0,
            x,
            size,
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.size
    }

    /// Put the bird back at `start_y` at rest.
    pub fn reset(&mut self, start_y: f64) {
        self.y = start_y;
        self.velocity = 0.0;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: self.size,
            height: self.size,
        }
    }
}

/// Identifier shared by the two obstacles of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairId(pub u64);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the gap an obstacle sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObstacleKind {
    /// Hangs from the ceiling down to the gap.
    Top,
    /// Rises from the floor up to the gap.
    Bottom,
}

/// One pipe segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub top: f64,
    pub height: f64,
    pub width: f64,
    pub pair_id: PairId,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge; the pair is passed once this falls left of the bird.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }
}

/// Borrowed view of the two obstacles that form one gap.
#[derive(Debug, Clone, Copy)]
pub struct PipePair<'a> {
    pub top: &'a Obstacle,
    pub bottom: &'a Obstacle,
}

impl<'a> PipePair<'a> {
    pub fn id(&self) -> PairId {
        self.top.pair_id
    }

    pub fn x(&self) -> f64 {
        self.top.x.max(self.bottom.x)
    }

    /// Rightmost trailing edge of the two members.
    pub fn trailing_edge(&self) -> f64 {
        self.top.trailing_edge().max(self.bottom.trailing_edge())
    }

    /// Upper edge of the opening.
    pub fn gap_top(&self) -> f64 {
        self.top.bottom()
    }

    /// Lower edge of the opening.
    pub fn gap_bottom(&self) -> f64 {
        self.bottom.top
    }

    /// Both members are fully past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.top.trailing_edge() < 0.0 && self.bottom.trailing_edge() < 0.0
    }

    /// Any part of the pair is inside `0..screen_width`.
    pub fn is_visible(&self, screen_width: f64) -> bool {
        self.trailing_edge() > 0.0 && self.x() < screen_width
    }
}

/// Obstacle collection ordered by spawn time.
///
/// Obstacles are stored as contiguous `[top, bottom]` pairs and are only
/// ever added or removed a pair at a time, so the length is always even.
#[derive(Debug, Clone, Default)]
pub struct PipeField {
    obstacles: Vec<Obstacle>,
}

impl PipeField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of obstacles (twice the number of pairs).
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.obstacles.len() / 2
    }

    pub fn pairs(&self) -> impl Iterator<Item = PipePair<'_>> + '_ {
        self.obstacles.chunks_exact(2).map(|pair| PipePair {
            top: &pair[0],
            bottom: &pair[1],
        })
    }

    /// Most recently spawned pair.
    pub fn newest(&self) -> Option<PipePair<'_>> {
        self.pairs().last()
    }

    pub fn contains(&self, id: PairId) -> bool {
        self.obstacles.iter().any(|o| o.pair_id == id)
    }

    /// Append a freshly generated pair.
    pub fn push_pair(&mut self, top: Obstacle, bottom: Obstacle) {
        debug_assert_eq!(top.pair_id, bottom.pair_id);
        debug_assert_eq!(top.kind, ObstacleKind::Top);
        debug_assert_eq!(bottom.kind, ObstacleKind::Bottom);
        self.obstacles.push(top);
        self.obstacles.push(bottom);
    }

    /// Rebuild the collection keeping only the pairs `keep` accepts.
    /// Returns the ids of the dropped pairs in spawn order.
    pub fn retain_pairs<F>(&mut self, mut keep: F) -> Vec<PairId>
    where
        F: FnMut(&PipePair<'_>) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.obstacles.len());
        for pair in self.obstacles.chunks_exact(2) {
            let view = PipePair {
                top: &pair[0],
                bottom: &pair[1],
            };
            if keep(&view) {
                kept.extend_from_slice(pair);
            } else {
                removed.push(view.id());
            }
        }
        self.obstacles = kept;
        removed
    }

    /// Move every obstacle horizontally by `dx`.
    pub fn shift(&mut self, dx: f64) {
        for obstacle in &mut self.obstacles {
            obstacle.x += dx;
        }
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameState {
    Running,
    GameOver,
}

/// What ended a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameOverCause {
    PipeCollision { pair_id: PairId },
    HitCeiling,
    HitFloor,
}

impl GameOverCause {
    pub fn description(&self) -> String {
        match self {
            Self::PipeCollision { pair_id } => format!("hit pipe {pair_id}"),
            Self::HitCeiling => "flew above the screen".to_string(),
            Self::HitFloor => "fell to the ground".to_string(),
        }
    }
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    /// Points credited this tick.
    pub scored: u32,
    pub pairs_spawned: u32,
    /// Pairs removed after scrolling off the left edge.
    pub pairs_recycled: Vec<PairId>,
    /// Set on the tick that ends the game.
    pub game_over: Option<GameOverCause>,
}

/// Extra numbers shown by the debug overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugInfo {
    pub ticks_per_second: f64,
    pub tick_count: u64,
    pub bird_y: f64,
    pub bird_velocity: f64,
    pub obstacle_count: usize,
    pub scored_pairs: usize,
    /// Next pair still ahead of the bird and the distance to its leading edge.
    pub next_pair: Option<(PairId, f64)>,
}

/// Immutable view handed to the renderer between ticks.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub bird: Bird,
    pub obstacles: &'a [Obstacle],
    pub score: u32,
    pub state: GameState,
    pub game_over: Option<GameOverCause>,
    pub screen_width: f64,
    pub screen_height: f64,
    pub debug: Option<DebugInfo>,
}
