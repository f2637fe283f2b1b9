//! Score keeping.

use super::types::{Bird, PairId, PipeField, PipePair};
use std::collections::HashSet;

/// A pair counts as passed once its trailing edge is strictly left of the bird.
pub fn has_passed(pair: &PipePair<'_>, bird_x: f64) -> bool {
    pair.trailing_edge() < bird_x
}

/// Running score plus the set of pairs already credited.
///
/// The set only holds ids of live pairs: entries are dropped through
/// [`ScoreTracker::forget`] when their pair is recycled.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    score: u32,
    scored: HashSet<PairId>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn scored_count(&self) -> usize {
        self.scored.len()
    }

    pub fn is_scored(&self, id: PairId) -> bool {
        self.scored.contains(&id)
    }

    /// Credit `score_value` for every pair passed for the first time.
    /// Returns the points added this call.
    pub fn update_score(&mut self, bird: &Bird, field: &PipeField, score_value: u32) -> u32 {
        let mut gained = 0;
        for pair in field.pairs() {
            if has_passed(&pair, bird.x()) && self.scored.insert(pair.id()) {
                gained += score_value;
                log::debug!("passed pair {}", pair.id());
            }
        }
        self.score = self.score.saturating_add(gained);
        gained
    }

    /// Drop bookkeeping for recycled pairs.
    pub fn forget(&mut self, recycled: &[PairId]) {
        for id in recycled {
            self.scored.remove(id);
        }
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.scored.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pipes;
    use crate::core::types::{Obstacle, ObstacleKind};

    fn field_at(id: u64, x: f64) -> PipeField {
        let mut field = PipeField::new();
        let top = Obstacle {
            x,
            top: 0.0,
            height: 200.0,
            width: 50.0,
            pair_id: PairId(id),
            kind: ObstacleKind::Top,
        };
        let bottom = Obstacle {
            top: 400.0,
            kind: ObstacleKind::Bottom,
            ..top.clone()
        };
        field.push_pair(top, bottom);
        field
    }

    #[test]
    fn test_not_passed_until_strictly_left() {
        let bird = Bird::new(160.0, 300.0, 20.0);
        let mut tracker = ScoreTracker::new();

        // Trailing edge exactly at bird x.
        let field = field_at(1, 110.0);
        assert_eq!(tracker.update_score(&bird, &field, 100), 0);

        let field = field_at(1, 109.0);
        assert_eq!(tracker.update_score(&bird, &field, 100), 100);
        assert_eq!(tracker.score(), 100);
    }

    #[test]
    fn test_pair_scores_once() {
        let bird = Bird::new(160.0, 300.0, 20.0);
        let mut tracker = ScoreTracker::new();
        let mut field = field_at(1, 105.0);

        assert_eq!(tracker.update_score(&bird, &field, 100), 100);
        for _ in 0..10 {
            pipes::advance(&mut field, 3.0);
            assert_eq!(tracker.update_score(&bird, &field, 100), 0);
        }
        assert_eq!(tracker.score(), 100);
        assert!(tracker.is_scored(PairId(1)));
    }

    #[test]
    fn test_forget_bounds_the_set() {
        let bird = Bird::new(160.0, 300.0, 20.0);
        let mut tracker = ScoreTracker::new();
        let mut field = field_at(1, 0.0);
        tracker.update_score(&bird, &field, 100);
        assert_eq!(tracker.scored_count(), 1);

        pipes::advance(&mut field, 60.0);
        let recycled = pipes::recycle(&mut field);
        tracker.forget(&recycled);
        assert_eq!(tracker.scored_count(), 0);
        assert_eq!(tracker.score(), 100);
    }

    #[test]
    fn test_reset() {
        let bird = Bird::new(160.0, 300.0, 20.0);
        let mut tracker = ScoreTracker::new();
        tracker.update_score(&bird, &field_at(1, 0.0), 100);
        tracker.reset();
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.scored_count(), 0);
    }
}
