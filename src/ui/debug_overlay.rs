//! Debug overlay: live numbers in a corner of the play field, collision
//! box outlines and pair id labels.

use crate::core::types::{Bounds, DebugInfo, ObstacleKind, PairId, Snapshot};
use crate::ui::game_scene::{CellKind, FieldScale};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const PANEL_WIDTH: u16 = 24;

/// Text lines shown in the debug panel.
pub fn debug_lines(info: &DebugInfo) -> Vec<String> {
    let mut lines = vec![
        format!("TPS: {:.1}", info.ticks_per_second),
        format!("Tick: {}", info.tick_count),
        format!("Bird Y: {:.1}", info.bird_y),
        format!("Bird Vel: {:.1}", info.bird_velocity),
        format!("Pipes: {}", info.obstacle_count),
        format!("Scored Pipes: {}", info.scored_pairs),
    ];
    match info.next_pair {
        Some((id, distance)) => lines.push(format!("Next: {id} in {distance:.0}")),
        None => lines.push("Next: -".to_string()),
    }
    lines
}

/// Draw the debug numbers in the top-right corner of `area`.
pub fn render_debug_panel(frame: &mut Frame, area: Rect, info: &DebugInfo) {
    let lines = debug_lines(info);
    let height = lines.len() as u16 + 2;
    if area.width < PANEL_WIDTH || area.height < height {
        return;
    }

    let panel = Rect {
        x: area.x + area.width - PANEL_WIDTH,
        y: area.y,
        width: PANEL_WIDTH,
        height,
    };
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .title(" Debug ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(block),
        panel,
    );
}

/// Mark the perimeter cells of every collision box. Only empty sky is
/// overwritten so pipes stay visible.
pub fn outline_hitboxes(grid: &mut [Vec<CellKind>], snapshot: &Snapshot<'_>, scale: &FieldScale) {
    let boxes = snapshot
        .obstacles
        .iter()
        .map(|o| o.bounds())
        .chain(std::iter::once(snapshot.bird.bounds()));

    for bounds in boxes {
        let Some((c0, r0, c1, r1)) = cell_span(&bounds, scale) else {
            continue;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                let on_edge = row == r0 || row == r1 || col == c0 || col == c1;
                let cell = &mut grid[row][col];
                if on_edge && *cell == CellKind::Sky {
                    *cell = CellKind::Hitbox;
                }
            }
        }
    }
}

/// Cell position of each on-screen pair's id label: the first gap row,
/// starting at the pair's leading column.
pub fn pair_labels(snapshot: &Snapshot<'_>, scale: &FieldScale) -> Vec<(u16, u16, PairId)> {
    snapshot
        .obstacles
        .chunks_exact(2)
        .filter_map(|pair| {
            let top = pair.iter().find(|o| o.kind == ObstacleKind::Top)?;
            if top.x + top.width <= 0.0 {
                return None;
            }
            let (col, row) = scale.cell_at(top.x.max(0.0), top.bottom())?;
            Some((col, row, top.pair_id))
        })
        .collect()
}

/// Write `#id` at the top of every visible gap.
pub fn render_pair_labels(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let scale = FieldScale::new(
        area.width,
        area.height,
        snapshot.screen_width,
        snapshot.screen_height,
    );
    for (col, row, id) in pair_labels(snapshot, &scale) {
        let text = id.to_string();
        let width = (text.len() as u16).min(area.width - col);
        let label = Rect {
            x: area.x + col,
            y: area.y + row,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Red)),
            label,
        );
    }
}

/// Inclusive cell range covered by `bounds`, clipped to the field.
fn cell_span(bounds: &Bounds, scale: &FieldScale) -> Option<(usize, usize, usize, usize)> {
    let width = scale.cols as f64 * scale.cell_width;
    let height = scale.rows as f64 * scale.cell_height;
    if bounds.right() <= 0.0 || bounds.x >= width || bounds.bottom() <= 0.0 || bounds.y >= height
    {
        return None;
    }

    let to_col = |x: f64| ((x / scale.cell_width).max(0.0) as usize).min(scale.cols as usize - 1);
    let to_row = |y: f64| ((y / scale.cell_height).max(0.0) as usize).min(scale.rows as usize - 1);

    // Right and bottom edges are exclusive.
    let edge = 1e-9;
    Some((
        to_col(bounds.x),
        to_row(bounds.y),
        to_col(bounds.right() - edge),
        to_row(bounds.bottom() - edge),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Bird, GameState, Obstacle};

    fn info() -> DebugInfo {
        DebugInfo {
            ticks_per_second: 49.96,
            tick_count: 120,
            bird_y: 312.0,
            bird_velocity: -3.0,
            obstacle_count: 4,
            scored_pairs: 1,
            next_pair: Some((PairId(2), 140.0)),
        }
    }

    #[test]
    fn test_debug_lines() {
        let lines = debug_lines(&info());
        assert_eq!(lines[0], "TPS: 50.0");
        assert!(lines.contains(&"Pipes: 4".to_string()));
        assert!(lines.contains(&"Scored Pipes: 1".to_string()));
        assert_eq!(lines.last().unwrap(), "Next: #2 in 140");
    }

    #[test]
    fn test_outline_marks_bird_box() {
        let snapshot = Snapshot {
            bird: Bird::new(160.0, 300.0, 20.0),
            obstacles: &[],
            score: 0,
            state: GameState::Running,
            game_over: None,
            screen_width: 800.0,
            screen_height: 600.0,
            debug: Some(info()),
        };
        // 5x5 world units per cell, so the bird covers 4x4 cells.
        let scale = FieldScale::new(160, 120, 800.0, 600.0);
        let mut grid = vec![vec![CellKind::Sky; 160]; 120];
        outline_hitboxes(&mut grid, &snapshot, &scale);

        assert_eq!(grid[60][32], CellKind::Hitbox);
        assert_eq!(grid[63][35], CellKind::Hitbox);
        assert_eq!(grid[61][33], CellKind::Sky);
        assert_eq!(grid[64][36], CellKind::Sky);
    }

    fn pair(id: u64, x: f64, gap_top: f64) -> [Obstacle; 2] {
        [
            Obstacle {
                x,
                top: 0.0,
                height: gap_top,
                width: 50.0,
                pair_id: PairId(id),
                kind: ObstacleKind::Top,
            },
            Obstacle {
                x,
                top: gap_top + 200.0,
                height: 400.0 - gap_top,
                width: 50.0,
                pair_id: PairId(id),
                kind: ObstacleKind::Bottom,
            },
        ]
    }

    #[test]
    fn test_pair_labels_sit_at_gap_top() {
        let mut obstacles = Vec::new();
        obstacles.extend(pair(3, 400.0, 200.0));
        // Leading edge off the left side, trailing edge still visible.
        obstacles.extend(pair(2, -20.0, 100.0));
        // Fully scrolled off.
        obstacles.extend(pair(1, -60.0, 100.0));
        // Not yet on screen.
        obstacles.extend(pair(4, 800.0, 100.0));
        let snapshot = Snapshot {
            bird: Bird::new(160.0, 300.0, 20.0),
            obstacles: &obstacles,
            score: 0,
            state: GameState::Running,
            game_over: None,
            screen_width: 800.0,
            screen_height: 600.0,
            debug: Some(info()),
        };
        let scale = FieldScale::new(80, 30, 800.0, 600.0);

        let labels = pair_labels(&snapshot, &scale);
        assert_eq!(labels, vec![(40, 10, PairId(3)), (0, 5, PairId(2))]);
    }

    #[test]
    fn test_offscreen_box_is_skipped() {
        let scale = FieldScale::new(80, 30, 800.0, 600.0);
        let bounds = Bounds {
            x: -100.0,
            y: 0.0,
            width: 50.0,
            height: 100.0,
        };
        assert!(cell_span(&bounds, &scale).is_none());
    }
}
