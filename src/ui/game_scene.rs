//! Play field rendering.
//!
//! World coordinates are scaled to terminal cells. A cell is filled when
//! its center lies inside an obstacle; the bird occupies the cell under its
//! center.

use crate::core::types::{Bounds, GameState, ObstacleKind, Snapshot};
use crate::ui::game_common::{
    create_game_layout, info_line, render_game_over_banner, render_info_panel_frame,
    render_status_bar,
};
use crate::ui::debug_overlay;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 24;

/// What a single terminal cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Sky,
    Pipe,
    /// Last row of a pipe next to the gap.
    PipeCap,
    Bird,
    /// Debug-only outline of a collision box.
    Hitbox,
}

/// World-to-cell mapping for one render area.
#[derive(Debug, Clone, Copy)]
pub struct FieldScale {
    pub cols: u16,
    pub rows: u16,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl FieldScale {
    pub fn new(cols: u16, rows: u16, world_width: f64, world_height: f64) -> Self {
        Self {
            cols,
            rows,
            cell_width: world_width / cols.max(1) as f64,
            cell_height: world_height / rows.max(1) as f64,
        }
    }

    /// World coordinates of the center of cell (`col`, `row`).
    pub fn cell_center(&self, col: u16, row: u16) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.cell_width,
            (row as f64 + 0.5) * self.cell_height,
        )
    }

    /// Cell containing world point (`x`, `y`), if on screen.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell_width) as u16;
        let row = (y / self.cell_height) as u16;
        (col < self.cols && row < self.rows).then_some((col, row))
    }
}

fn contains(bounds: &Bounds, x: f64, y: f64) -> bool {
    x >= bounds.x && x < bounds.right() && y >= bounds.y && y < bounds.bottom()
}

/// Rasterize a snapshot into a `rows x cols` grid.
pub fn rasterize(snapshot: &Snapshot<'_>, scale: &FieldScale) -> Vec<Vec<CellKind>> {
    let mut grid = vec![vec![CellKind::Sky; scale.cols as usize]; scale.rows as usize];

    for (row, line) in grid.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            let (x, y) = scale.cell_center(col as u16, row as u16);
            for obstacle in snapshot.obstacles {
                let bounds = obstacle.bounds();
                if !contains(&bounds, x, y) {
                    continue;
                }
                // The cap is the row touching the gap.
                let at_gap = match obstacle.kind {
                    ObstacleKind::Top => y + scale.cell_height >= obstacle.bottom(),
                    ObstacleKind::Bottom => y - scale.cell_height < obstacle.top,
                };
                *cell = if at_gap {
                    CellKind::PipeCap
                } else {
                    CellKind::Pipe
                };
                break;
            }
        }
    }

    if snapshot.debug.is_some() {
        debug_overlay::outline_hitboxes(&mut grid, snapshot, scale);
    }

    let bird = snapshot.bird.bounds();
    let (cx, cy) = (bird.x + bird.width / 2.0, bird.y + bird.height / 2.0);
    if let Some((col, row)) = scale.cell_at(cx, cy) {
        grid[row as usize][col as usize] = CellKind::Bird;
    }

    grid
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let layout = create_game_layout(frame, area, " Flappy ", Color::Cyan, INFO_PANEL_WIDTH);

    render_play_field(frame, layout.content, snapshot);
    render_status(frame, layout.status_bar, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot);

    if let Some(debug) = &snapshot.debug {
        debug_overlay::render_pair_labels(frame, layout.content, snapshot);
        debug_overlay::render_debug_panel(frame, layout.content, debug);
    }

    if snapshot.state == GameState::GameOver {
        let message = match snapshot.game_over {
            Some(cause) => format!("{} with {} points", cause.description(), snapshot.score),
            None => format!("{} points", snapshot.score),
        };
        render_game_over_banner(frame, layout.content, "GAME OVER", &message);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let scale = FieldScale::new(
        area.width,
        area.height,
        snapshot.screen_width,
        snapshot.screen_height,
    );
    let falling = snapshot.bird.velocity > 0.0;

    let lines: Vec<Line> = rasterize(snapshot, &scale)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    CellKind::Sky => Span::raw(" "),
                    CellKind::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                    CellKind::PipeCap => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                    CellKind::Hitbox => Span::styled("·", Style::default().fg(Color::Red)),
                    CellKind::Bird => Span::styled(
                        if falling { "▼" } else { "▲" },
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    match snapshot.state {
        GameState::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", snapshot.score),
            Color::Green,
            &[
                ("[Space/Up]", "Flap"),
                ("[D]", "Debug"),
                ("[R]", "Restart"),
                ("[Esc]", "Quit"),
            ],
        ),
        GameState::GameOver => render_status_bar(
            frame,
            area,
            &format!("Crashed! Final score: {}", snapshot.score),
            Color::Red,
            &[("[Space/R]", "Restart"), ("[Esc]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let inner = render_info_panel_frame(frame, area, " Info ");
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let (state_text, state_color) = match snapshot.state {
        GameState::Running => ("Flying", Color::Green),
        GameState::GameOver => ("Game Over", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            " Flappy",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", snapshot.score.to_string(), Color::White),
        info_line("State", state_text.to_string(), state_color),
        Line::from(""),
        info_line(
            "Pipes",
            (snapshot.obstacles.len() / 2).to_string(),
            Color::Green,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
