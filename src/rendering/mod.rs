use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::application::{GameState, Viewport};
use crate::domain::LiveSet;

pub const LIVE_CHAR: char = '#';
pub const DEAD_CHAR: char = '.';

/// Draw the viewport as text: one character per cell, every row
/// newline-terminated. Cells outside the viewport are skipped even if live.
pub fn render(viewport: &Viewport, live: &LiveSet) -> String {
    let width = viewport.width as usize;
    let height = viewport.height as usize;
    let mut cells = vec![DEAD_CHAR; width * height];
    for (col, row) in live.iter().filter_map(|&c| viewport.cell_offset(c)) {
        cells[row * width + col] = LIVE_CHAR;
    }

    let mut out = String::with_capacity((width + 1) * height);
    for row in 0..height {
        out.extend(&cells[row * width..(row + 1) * width]);
        out.push('\n');
    }
    out
}

pub fn status_line(state: &GameState) -> String {
    format!("Generation: {} | Population: {}", state.generation, state.population())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameOptions {
    /// Clear the terminal and home the cursor before drawing
    pub clear_screen: bool,
    pub show_stop_hint: bool,
}

/// Write one complete frame (status line, grid, optional hint) and flush
pub fn draw_frame<W: Write>(
    out: &mut W,
    state: &GameState,
    viewport: &Viewport,
    options: FrameOptions,
) -> io::Result<()> {
    if options.clear_screen {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    writeln!(out, "{}", status_line(state))?;
    write!(out, "{}", render(viewport, &state.live))?;
    if options.show_stop_hint {
        writeln!(out, "\n[Press Ctrl+C to stop]")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coord, presets, random_soup};

    #[test]
    fn test_render_glider() {
        let live = presets::glider().at(0, 0);
        let text = render(&Viewport::new(4, 3), &live);
        assert_eq!(text, ".#..\n..#.\n###.\n");
    }

    #[test]
    fn test_render_skips_cells_outside_viewport() {
        let live: LiveSet = [(-1, 0), (0, 0), (5, 5), (1, -3)]
            .into_iter()
            .map(|(x, y)| Coord::new(x, y))
            .collect();
        assert_eq!(render(&Viewport::new(2, 2), &live), "#.\n..\n");
    }

    #[test]
    fn test_render_with_origin() {
        let live = presets::block().at(-1, -1);
        let viewport = Viewport::new(3, 2).with_origin(Coord::new(-2, -1));
        assert_eq!(render(&viewport, &live), ".##\n.##\n");
    }

    #[test]
    fn test_render_empty_viewport() {
        assert_eq!(render(&Viewport::new(0, 0), &presets::block().at(0, 0)), "");
        assert_eq!(render(&Viewport::new(0, 2), &LiveSet::new()), "\n\n");
    }

    #[test]
    fn test_status_line() {
        let state = GameState::new(presets::glider().at(0, 0)).tick();
        assert_eq!(status_line(&state), "Generation: 1 | Population: 5");
    }

    #[test]
    fn test_status_line_prints_full_population() {
        let state = GameState::new(random_soup(0, 0, 50, 30, 1.0, 1));
        assert_eq!(status_line(&state), "Generation: 0 | Population: 1500");
    }

    #[test]
    fn test_render_ignores_cells_at_the_edge_of_the_plane() {
        let live: LiveSet = [(i64::MAX, 0), (0, i64::MIN), (1, 1)]
            .into_iter()
            .map(|(x, y)| Coord::new(x, y))
            .collect();
        let viewport = Viewport::new(2, 2).with_origin(Coord::new(0, 0));
        assert_eq!(render(&viewport, &live), "..\n.#\n");
    }

    #[test]
    fn test_draw_frame_without_clear() {
        let state = GameState::new(presets::blinker().at(0, 0));
        let mut out = Vec::new();
        let options = FrameOptions { clear_screen: false, show_stop_hint: true };
        draw_frame(&mut out, &state, &Viewport::new(3, 1), options).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Generation: 0 | Population: 3\n###\n\n[Press Ctrl+C to stop]\n"
        );
    }

    #[test]
    fn test_draw_frame_clears_first() {
        let state = GameState::new(LiveSet::new());
        let mut out = Vec::new();
        let options = FrameOptions { clear_screen: true, show_stop_hint: false };
        draw_frame(&mut out, &state, &Viewport::new(1, 1), options).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b["));
        assert!(text.ends_with("Generation: 0 | Population: 0\n.\n"));
    }
}
