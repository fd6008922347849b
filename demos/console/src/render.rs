//! ANSI truecolor presenter: two terminal columns per node, one status line.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use gv_grid::{GridView, PresentationMode};
use gv_sim::{ControlEvent, FrameInfo, Presenter};

/// Terminal columns per node; terminal cells are roughly twice as tall as wide.
const COLS_PER_NODE: u16 = 2;

/// Draws the grid in the alternate screen and reads `s` / `q` key presses.
///
/// Raw mode and the alternate screen are restored on drop.
pub struct TerminalPresenter {
    out:           Stdout,
    was_animating: bool,
    last_error:    Option<io::Error>,
}

impl TerminalPresenter {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self { out, was_animating: false, last_error: None })
    }

    /// Take the first terminal error, if any occurred while drawing.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    fn draw(&mut self, frame: &FrameInfo, view: &GridView<'_>) -> io::Result<()> {
        let mode = match view.mode() {
            PresentationMode::Unsorted => "unsorted",
            PresentationMode::Sorted => "sorted",
        };
        queue!(
            self.out,
            MoveTo(0, 0),
            ResetColor,
            Clear(ClearType::CurrentLine),
            Print(format!("{}  [{mode}]   s: sort   q: quit", frame.day)),
        )?;
        for cell in view.cells() {
            let colour = cell.colour();
            queue!(
                self.out,
                MoveTo(cell.x as u16 * COLS_PER_NODE, cell.y as u16 + 1),
                SetForegroundColor(Color::Rgb { r: colour.0, g: colour.1, b: colour.2 }),
                Print("\u{2588}\u{2588}"),
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn read_events(&mut self, events: &mut Vec<ControlEvent>) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('s') => events.push(ControlEvent::ToggleSort),
                KeyCode::Char('q') | KeyCode::Esc => events.push(ControlEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    events.push(ControlEvent::Quit)
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl Presenter for TerminalPresenter {
    fn poll_events(&mut self) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        let result = self.read_events(&mut events);
        self.store_err(result);
        events
    }

    fn present(&mut self, frame: &FrameInfo, view: GridView<'_>) {
        let animating = view.cells().any(|c| c.animated && c.node.is_animating());
        // One extra frame after shifts finish so the resting colour lands.
        if frame.updated || animating || self.was_animating {
            let result = self.draw(frame, &view);
            self.store_err(result);
        }
        self.was_animating = animating;
    }
}

impl Drop for TerminalPresenter {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
