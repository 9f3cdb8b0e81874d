use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GRID_SIZE, GameSnapshot, Position, PowerUpKind};
use crate::metrics::GameMetrics;

/// Which overlay, if any, covers the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Ready,
    Playing,
    GameOver,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &GameSnapshot,
        metrics: &GameMetrics,
        screen: Screen,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = match screen {
            Screen::Ready => self.render_start(),
            Screen::Playing => self.render_grid(snapshot),
            Screen::GameOver => self.render_game_over(snapshot, metrics),
        };
        frame.render_widget(board, game_area);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, snapshot: &GameSnapshot) -> Paragraph<'_> {
        let head = snapshot.head();
        let head_style = if snapshot.is_dashing {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = Vec::with_capacity(GRID_SIZE as usize);
        for y in 0..GRID_SIZE {
            let mut spans = Vec::with_capacity(GRID_SIZE as usize);

            for x in 0..GRID_SIZE {
                let pos = Position::new(x, y);

                let cell = if pos == head {
                    Span::styled("■ ", head_style)
                } else if snapshot.snake.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Gray))
                } else if snapshot.enemies.contains(&pos) {
                    Span::styled(
                        "X ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else if let Some(cell) = snapshot.power_ups.iter().find(|p| p.position == pos) {
                    let (glyph, color) = power_up_glyph(cell.kind);
                    Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
                } else if snapshot.food.contains(&pos) {
                    Span::styled("● ", Style::default().fg(Color::Green))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        // Damage flashes the frame
        let border = if snapshot.shaking {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(border)
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &GameSnapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let hearts: String = (0..snapshot.lives.max(3))
            .map(|i| if i < snapshot.lives { '♥' } else { '♡' })
            .collect();
        let held = snapshot
            .active_power_up
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "None".to_string());

        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value),
            Span::raw("    "),
            Span::styled("Multiplier: ", label),
            Span::styled(format!("x{}", snapshot.multiplier), value),
            Span::raw("    "),
            Span::styled("Lives: ", label),
            Span::styled(hearts, Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("Power-up: ", label),
            Span::styled(held, value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start(&self) -> Paragraph<'_> {
        let hint = Style::default().fg(Color::Gray);
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "READY TO PLAY?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(Span::styled("Eat the green food to grow", hint)),
            Line::from(Span::styled("Don't bite your tail or touch an X: each costs a life", hint)),
            Line::from(vec![
                Span::styled("D ", Style::default().fg(Color::Yellow)),
                Span::styled("Dash: extreme speed for 1 second, enemies can't hurt you", hint),
            ]),
            Line::from(vec![
                Span::styled("E ", Style::default().fg(Color::LightRed)),
                Span::styled("Explosive: wipes out nearby enemies", hint),
            ]),
            Line::from(vec![
                Span::styled("V ", Style::default().fg(Color::LightGreen)),
                Span::styled("Venom: raises the multiplier for 5 seconds", hint),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", hint),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", hint),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_game_over(&self, snapshot: &GameSnapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", label),
                Span::styled(snapshot.score.to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Snake Length: ", label),
                Span::styled(snapshot.snake.len().to_string(), value),
            ]),
            Line::from(vec![
                Span::styled("Best This Run: ", label),
                Span::styled(metrics.high_score.to_string(), value),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to use power-up | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

fn power_up_glyph(kind: PowerUpKind) -> (&'static str, Color) {
    match kind {
        PowerUpKind::Dash => ("D ", Color::Yellow),
        PowerUpKind::Explosive => ("E ", Color::LightRed),
        PowerUpKind::Venom => ("V ", Color::LightGreen),
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
