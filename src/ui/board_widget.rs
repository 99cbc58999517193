use crate::game::{Color as Team, Coord, GameState, Glyph};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn team_color(team: Team) -> Color {
    match team {
        Team::Black => Color::DarkGray,
        Team::White => Color::White,
        Team::Red => Color::Red,
        Team::Blue => Color::Blue,
    }
}

/// Build the staggered board rows, top row first. Selected marbles are
/// reversed and the field under the cursor gets a cyan background.
pub fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let board = game.board();
    let r = board.radius();
    let mut lines = Vec::new();

    for j in (-r..=r).rev() {
        let mut spans = vec![Span::raw(" ".repeat((r - j) as usize))];
        for i in -r..=r {
            let coord = Coord::new(i, j);
            let Ok(glyph) = board.glyph(coord) else {
                continue;
            };
            let mut style = match glyph {
                Glyph::Marble(team) => Style::default()
                    .fg(team_color(team))
                    .add_modifier(Modifier::BOLD),
                Glyph::Cursor => Style::default().fg(Color::Cyan),
                Glyph::Empty => Style::default().fg(Color::DarkGray),
                Glyph::Invalid => Style::default(),
            };
            let selected = board
                .top_marble(coord)
                .is_some_and(|id| game.selection().contains(id));
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if game.cursor().coord() == coord {
                style = style.bg(Color::Cyan);
            }
            spans.push(Span::styled(glyph.symbol().to_string(), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }
    lines
}
