//! Play command implementation - Interactive TUI.

use super::CliError;
use super::output::describe_outcome;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as Split, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use solit::board::CENTER;
use solit::layout::{self, Layout, Point};
use solit::{Coord, Session, SessionConfig, Slot, SlotIndex, SlotState};
use std::io::{Stdout, stdout};
use std::time::Duration;

/// Rows taken by the header; the terminal layout's origin sits just below.
const HEADER_HEIGHT: u16 = 5;

/// Input poll timeout. Nothing runs on the tick, it only bounds redraw latency.
const TICK: Duration = Duration::from_millis(33);

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub(crate) fn execute(seed: Option<u64>, zoom: u16) -> Result<(), CliError> {
    let config = seed.map_or_else(SessionConfig::default, |seed| SessionConfig { seed });
    let session = Session::from_config(&config);
    let layout = Layout::terminal().with_zoom(zoom);

    log::info!("starting game with seed {}", config.seed);
    run_tui(session, layout)
}

/// Cursor movement.
#[derive(Debug, Clone, Copy)]
enum Step {
    Up,
    Down,
    Left,
    Right,
}

/// App state for the TUI.
struct App {
    session: Session,
    layout: Layout,
    cursor: Coord,
    status: String,
}

impl App {
    fn new(session: Session, layout: Layout) -> Self {
        Self {
            session,
            layout,
            cursor: CENTER,
            status: "Select a peg, then the slot to jump it to".to_string(),
        }
    }

    fn click(&mut self, slot: Option<SlotIndex>) {
        let outcome = self.session.select_or_move(slot);
        self.status = describe_outcome(&outcome);
    }

    fn click_point(&mut self, point: Point) {
        let slot = self
            .session
            .board()
            .slot_at_point(&self.layout, point)
            .map(Slot::index);
        if let Some(index) = slot {
            self.cursor = index.coord();
        }
        self.click(slot);
    }

    fn click_cursor(&mut self) {
        let slot = self
            .session
            .board()
            .slot_at(self.cursor.row, self.cursor.col)
            .filter(|slot| slot.state().is_playable())
            .map(Slot::index);
        self.click(slot);
    }

    fn reset(&mut self) {
        self.session.reset();
        self.status = "New game".to_string();
    }

    /// Move the cursor to the next slot on the cross in direction `step`,
    /// skipping corner blocks. Stays put at the edge.
    fn move_cursor(&mut self, step: Step) {
        let mut probe = self.cursor;
        while let Some(next) = neighbour(probe, step) {
            if next.in_cross() {
                self.cursor = next;
                return;
            }
            probe = next;
        }
    }
}

fn neighbour(coord: Coord, step: Step) -> Option<Coord> {
    let next = match step {
        Step::Up => Coord::new(coord.row.checked_sub(1)?, coord.col),
        Step::Down => Coord::new(coord.row + 1, coord.col),
        Step::Left => Coord::new(coord.row, coord.col.checked_sub(1)?),
        Step::Right => Coord::new(coord.row, coord.col + 1),
    };
    next.in_bounds().then_some(next)
}

fn run_tui(session: Session, layout: Layout) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(session, layout);
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('n' | 'N') => app.reset(),
                KeyCode::Char('+' | '=') => app.layout.zoom_in(),
                KeyCode::Char('-') => app.layout.zoom_out(),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Step::Up),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Step::Down),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Step::Left),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Step::Right),
                KeyCode::Enter | KeyCode::Char(' ') => app.click_cursor(),
                _ => {}
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => app.click_point(Point::new(i32::from(column), i32::from(row))),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Split::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Counters
            Constraint::Min(5),                // Board
            Constraint::Length(3),             // Status
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(format!("Killcount : {}", app.session.kill_count())),
        Line::from(format!("Remaining : {}", app.session.remaining())),
        Line::from(format!(
            "Restart with 'n', zoom with + and - ({}%), quit with 'q'",
            app.layout.zoom_percent()
        )),
    ];

    let header = Paragraph::new(lines)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Solit "));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let frame = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    for slot in app.session.board() {
        let fill = match slot.state() {
            SlotState::Invalid => continue,
            SlotState::Empty => Color::White,
            SlotState::Occupied(color) => {
                let (r, g, b) = color.rgb();
                Color::Rgb(r, g, b)
            }
        };
        let Some(cell) = to_cells(app.layout.slot_rect(slot.index()), inner) else {
            continue;
        };

        let selected = app.session.selected() == Some(slot.index());
        let border_type = if selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        let border_color = if slot.coord() == app.cursor {
            Color::Cyan
        } else {
            Color::Gray
        };

        let widget = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(fill));
        f.render_widget(widget, cell);
    }
}

/// Convert layout bounds to terminal cells, clipped to `bounds`.
fn to_cells(rect: layout::Rect, bounds: Rect) -> Option<Rect> {
    let cells = Rect::new(
        u16::try_from(rect.x).ok()?,
        u16::try_from(rect.y).ok()?,
        u16::try_from(rect.width).ok()?,
        u16::try_from(rect.height).ok()?,
    );
    let clipped = cells.intersection(bounds);
    (clipped.area() > 0).then_some(clipped)
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let selection = app
        .session
        .selected()
        .map_or_else(String::new, |slot| format!(" | holding {slot}"));
    let cursor = SlotIndex::from_coord(app.cursor)
        .map_or_else(String::new, |slot| format!(" | cursor {slot}"));

    let footer = Paragraph::new(format!(" {}{selection}{cursor} ", app.status))
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
