//! Bird vs pipe overlap and screen bounds.

use super::types::{Bird, GameOverCause, PairId, PipeField};

/// First pair with a member overlapping the bird, if any.
pub fn check_collision(bird: &Bird, field: &PipeField) -> Option<PairId> {
    let bird_box = bird.bounds();
    field
        .obstacles()
        .iter()
        .find(|obstacle| bird_box.intersects(&obstacle.bounds()))
        .map(|obstacle| obstacle.pair_id)
}

/// Ceiling or floor violation. The top edge may not go above 0 and the
/// bottom edge may not pass `screen_height`.
pub fn check_bounds(bird: &Bird, screen_height: f64) -> Option<GameOverCause> {
    if bird.y < 0.0 {
        Some(GameOverCause::HitCeiling)
    } else if bird.bottom() > screen_height {
        Some(GameOverCause::HitFloor)
    } else {
        None
    }
}

/// Combined terminal check. Pipes take precedence over bounds.
pub fn detect_crash(bird: &Bird, field: &PipeField, screen_height: f64) -> Option<GameOverCause> {
    check_collision(bird, field)
        .map(|pair_id| GameOverCause::PipeCollision { pair_id })
        .or_else(|| check_bounds(bird, screen_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Obstacle, ObstacleKind};

    fn field_with_gap(x: f64, gap_top: f64, gap_bottom: f64) -> PipeField {
        let mut field = PipeField::new();
        field.push_pair(
            Obstacle {
                x,
                top: 0.0,
                height: gap_top,
                width: 50.0,
                pair_id: PairId(9),
                kind: ObstacleKind::Top,
            },
            Obstacle {
                x,
                top: gap_bottom,
                height: 600.0 - gap_bottom,
                width: 50.0,
                pair_id: PairId(9),
                kind: ObstacleKind::Bottom,
            },
        );
        field
    }

    #[test]
    fn test_bird_inside_gap_is_safe() {
        let bird = Bird::new(160.0, 250.0, 20.0);
        let field = field_with_gap(150.0, 200.0, 400.0);
        assert_eq!(check_collision(&bird, &field), None);
    }

    #[test]
    fn test_bird_hits_top_pipe() {
        let bird = Bird::new(160.0, 190.0, 20.0);
        let field = field_with_gap(150.0, 200.0, 400.0);
        assert_eq!(check_collision(&bird, &field), Some(PairId(9)));
    }

    #[test]
    fn test_bird_hits_bottom_pipe() {
        let bird = Bird::new(160.0, 385.0, 20.0);
        let field = field_with_gap(150.0, 200.0, 400.0);
        assert_eq!(check_collision(&bird, &field), Some(PairId(9)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Bird's right edge at 180 meets pipe's left edge at 180.
        let bird = Bird::new(160.0, 100.0, 20.0);
        let field = field_with_gap(180.0, 200.0, 400.0);
        assert_eq!(check_collision(&bird, &field), None);
    }

    #[test]
    fn test_pipe_behind_bird_is_ignored() {
        let bird = Bird::new(160.0, 100.0, 20.0);
        let field = field_with_gap(50.0, 200.0, 400.0);
        assert_eq!(check_collision(&bird, &field), None);
    }

    #[test]
    fn test_bounds() {
        let h = 600.0;
        assert_eq!(check_bounds(&Bird::new(160.0, 300.0, 20.0), h), None);
        assert_eq!(check_bounds(&Bird::new(160.0, 0.0, 20.0), h), None);
        assert_eq!(check_bounds(&Bird::new(160.0, 580.0, 20.0), h), None);
        assert_eq!(
            check_bounds(&Bird::new(160.0, -0.5, 20.0), h),
            Some(GameOverCause::HitCeiling)
        );
        assert_eq!(
            check_bounds(&Bird::new(160.0, 599.0, 20.0), h),
            Some(GameOverCause::HitFloor)
        );
    }

    #[test]
    fn test_pipe_takes_precedence_over_floor() {
        let bird = Bird::new(160.0, 590.0, 20.0);
        let field = field_with_gap(150.0, 200.0, 400.0);
        assert_eq!(
            detect_crash(&bird, &field, 600.0),
            Some(GameOverCause::PipeCollision { pair_id: PairId(9) })
        );
    }
}
