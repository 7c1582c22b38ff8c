use std::io;

use crossterm::terminal;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

use crate::framebuffer::FrameBuffer;

/// The render collaborator. Reads the framebuffer once per frame and owns
/// all presentation concerns; the interpreter only ever hands it pixel
/// state.
pub trait Display {
    fn render(&mut self, framebuffer: &FrameBuffer) -> Result<(), io::Error>;
}

/// monochrome display in a terminal, rendered with TUI over crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl MonoTermDisplay {
    pub fn new() -> Result<MonoTermDisplay, io::Error> {
        terminal::enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(MonoTermDisplay { terminal })
    }

    /// lit pixels as canvas coordinates; TUI's canvas y-axis points up, so
    /// rows are negated
    fn lit_points(framebuffer: &FrameBuffer) -> Vec<(f64, f64)> {
        let mut points = Vec::new();
        for y in 0..framebuffer.height() {
            for x in 0..framebuffer.width() {
                if framebuffer.is_lit(x, y) {
                    points.push((x as f64, -1.0 * y as f64));
                }
            }
        }
        points
    }
}

impl Display for MonoTermDisplay {
    fn render(&mut self, framebuffer: &FrameBuffer) -> Result<(), io::Error> {
        let (width, height) = (framebuffer.width(), framebuffer.height());
        let points = Self::lit_points(framebuffer);

        // 1:1 between framebuffer pixels and canvas cells, plus the border
        self.terminal.draw(|f| {
            let size = Rect::new(0, 0, 2 + width as u16, 2 + height as u16);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("vip8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds([0.0, (width - 1) as f64])
                .y_bounds([-1.0 * (height - 1) as f64, 0.0])
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &points,
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

impl Drop for MonoTermDisplay {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// useful for tests and headless runs
pub struct NullDisplay;

impl NullDisplay {
    pub fn new() -> Self {
        NullDisplay {}
    }
}

impl Default for NullDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for NullDisplay {
    fn render(&mut self, _framebuffer: &FrameBuffer) -> Result<(), io::Error> {
        Ok(())
    }
}
