// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Terminal user interface
//!
//! Plays the flag in the terminal: mouse movement drives the parallax, a
//! click cycles a tile, `s` scrambles and `q` quits. One frame is drawn
//! every 16 ms while motion is enabled.

use crate::flag::{Bounds, FlagGrid, FlagOptions, FlagWidget, FrameHandle, RenderHost, TileColor};
use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Poll timeout between frames
pub const FRAME: Duration = Duration::from_millis(16);

/// Rotation, in degrees, past which a tile is drawn leaning
const LEAN_DEG: f64 = 10.0;

/// Translated strings shown in the status line
#[derive(Debug, Clone)]
pub struct Labels {
    /// Block title
    pub title: String,
    /// Key help
    pub hint: String,
    /// Shown once the puzzle is solved
    pub solved: String,
    /// Prefix for the count of misplaced tiles
    pub remaining: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Flag".to_string(),
            hint: "s scramble, q quit".to_string(),
            solved: "Solved! Press s to scramble again".to_string(),
            remaining: "Tiles out of place".to_string(),
        }
    }
}

/// Terminal side of the widget contract. Frames are delivered by the
/// event loop; at most one is pending at a time.
#[derive(Debug)]
pub struct TerminalHost {
    area: Option<Rect>,
    reduced_motion: bool,
    mouse: bool,
    listening: bool,
    next_frame: u64,
    pending: Option<FrameHandle>,
}

impl TerminalHost {
    /// Host for a flag drawn into `area`
    #[must_use]
    pub fn new(area: Option<Rect>, reduced_motion: bool, mouse: bool) -> Self {
        Self {
            area,
            reduced_motion,
            mouse,
            listening: false,
            next_frame: 0,
            pending: None,
        }
    }

    /// Take the pending frame, if any
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }

    /// Whether pointer events should be forwarded
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

/// Bounds of a terminal rectangle, in cells
#[must_use]
pub fn bounds_of(area: Rect) -> Bounds {
    Bounds {
        x: f64::from(area.x),
        y: f64::from(area.y),
        width: f64::from(area.width),
        height: f64::from(area.height),
    }
}

impl RenderHost for TerminalHost {
    fn container(&self) -> Option<Bounds> {
        self.area.filter(|a| a.width > 0 && a.height > 0).map(bounds_of)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn has_fine_pointer(&self) -> bool {
        self.mouse
    }

    fn listen_pointer(&mut self) {
        self.listening = true;
    }

    fn unlisten_pointer(&mut self) {
        self.listening = false;
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}

/// Split the screen into the flag block and the status line
#[must_use]
pub fn layout(area: Rect) -> (Rect, Rect) {
    let [flag, status] = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    (flag, status)
}

/// Inner area of the bordered flag block
#[must_use]
pub fn flag_area(area: Rect) -> Rect {
    Block::bordered().inner(layout(area).0)
}

fn tile_color(color: TileColor) -> Color {
    match color {
        TileColor::Green => Color::Rgb(22, 155, 98),
        TileColor::White => Color::Rgb(245, 245, 245),
        TileColor::Orange => Color::Rgb(255, 136, 62),
    }
}

/// Glyph for a tile at `rotation` degrees and celebration `scale`
#[must_use]
pub fn glyph(rotation: f64, scale: f64) -> char {
    if scale > 1.05 {
        '✦'
    } else if rotation > LEAN_DEG {
        '╱'
    } else if rotation < -LEAN_DEG {
        '╲'
    } else {
        ' '
    }
}

/// Draws the tiles of a mounted widget into its container
pub struct FlagView<'a> {
    widget: &'a FlagWidget,
}

impl<'a> FlagView<'a> {
    /// View of `widget`
    #[must_use]
    pub fn new(widget: &'a FlagWidget) -> Self {
        Self { widget }
    }
}

impl Widget for FlagView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(grid) = self.widget.grid() else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Same mapping as clicks, so what is drawn is what is hit
                let Some(index) = self
                    .widget
                    .hit_test(f64::from(x) + 0.5, f64::from(y) + 0.5)
                else {
                    continue;
                };
                let tile = &grid.tiles()[index];
                let style = Style::default()
                    .bg(tile_color(tile.color))
                    .fg(Color::Rgb(30, 30, 30));
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(glyph(tile.rotation(), tile.style.scale))
                        .set_style(style);
                }
            }
        }
    }
}

fn status_line(grid: Option<&FlagGrid>, labels: &Labels) -> Line<'static> {
    let Some(grid) = grid else {
        return Line::from(labels.hint.clone());
    };
    if grid.show_scramble_control() {
        Line::styled(
            format!("{}  |  {}", labels.solved, labels.hint),
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else if grid.mode().is_interactive() {
        Line::from(format!(
            "{}: {}  |  {}",
            labels.remaining,
            grid.mismatched(),
            labels.hint
        ))
    } else {
        Line::from(labels.hint.clone())
    }
}

/// Restores the terminal even when the loop bails out
struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Session {
    fn start() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
        tracing::debug!("Terminal session started");
        Ok(Self { terminal })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the flag until the user quits. Returns whether the puzzle ended solved.
pub fn run(options: &FlagOptions, labels: &Labels, reduced_motion: bool) -> Result<bool> {
    let mut session = Session::start()?;
    let size = session.terminal.size().context("Failed to read terminal size")?;
    let screen = Rect::new(0, 0, size.width, size.height);

    let mut host = TerminalHost::new(Some(flag_area(screen)), reduced_motion, true);
    let mut widget = FlagWidget::mount(&mut host, options)?;
    let started = Instant::now();
    tracing::info!(
        "Flag running ({}, motion {})",
        options.mode,
        if widget.is_animating() { "on" } else { "off" }
    );

    loop {
        if let Some(handle) = host.take_frame() {
            widget.on_frame(&mut host, handle, started.elapsed().as_secs_f64() * 1000.0);
        }

        session.terminal.draw(|frame| {
            let (flag, status) = layout(frame.area());
            let block = Block::bordered().title(format!(" {} ", labels.title));
            let inner = block.inner(flag);
            frame.render_widget(block, flag);
            frame.render_widget(FlagView::new(&widget), inner);
            frame.render_widget(Paragraph::new(status_line(widget.grid(), labels)), status);
        })?;

        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('s') => widget.scramble(),
                _ => {}
            },
            Event::Mouse(mouse) => {
                let (x, y) = (f64::from(mouse.column) + 0.5, f64::from(mouse.row) + 0.5);
                let inside = widget.bounds().is_some_and(|b| b.contains(x, y));
                match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) if host.is_listening() => {
                        if inside {
                            widget.on_pointer_move(x, y);
                        } else {
                            widget.on_pointer_leave();
                        }
                    }
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(outcome) = widget.on_click(x, y) {
                            if outcome.just_solved {
                                tracing::debug!("Solved in the terminal");
                            }
                        }
                    }
                    _ => {}
                }
            }
            Event::Resize(width, height) => {
                widget.resize(bounds_of(flag_area(Rect::new(0, 0, width, height))));
            }
            _ => {}
        }
    }

    let solved = widget.grid().is_some_and(FlagGrid::is_solved);
    widget.unmount(&mut host);
    Ok(solved)
}
