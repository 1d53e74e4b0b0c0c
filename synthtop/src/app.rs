//! App state and main loop: terminal setup, key handling, and paging through
//! the three chart views.

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::analyze::Analysis;
use crate::types::MetricsTable;
use crate::ui::{dashboard, distributions, header, timeseries};

/// The three chart pages, shown in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    TimeSeries,
    Distributions,
    Dashboard,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::TimeSeries => "Metrics over time",
            View::Distributions => "Distributions",
            View::Dashboard => "Dashboard",
        }
    }

    /// Next page in the sequence; `None` past the last one.
    pub fn next(self) -> Option<View> {
        match self {
            View::TimeSeries => Some(View::Distributions),
            View::Distributions => Some(View::Dashboard),
            View::Dashboard => None,
        }
    }

    pub fn prev(self) -> View {
        match self {
            View::TimeSeries | View::Distributions => View::TimeSeries,
            View::Dashboard => View::Distributions,
        }
    }
}

pub struct App {
    table: MetricsTable,
    analysis: Analysis,
    view: View,
    should_quit: bool,
}

impl App {
    pub fn new(table: MetricsTable, analysis: Analysis) -> Self {
        Self {
            table,
            analysis,
            view: View::TimeSeries,
            should_quit: false,
        }
    }

    /// Take over the terminal and page through the views. Failing to set up
    /// the display surface is fatal; the screen is restored on every exit
    /// path that reaches teardown.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let res = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Input (blocks briefly so resizes repaint promptly)
            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(k) = event::read()? {
                    self.handle_key(k.code);
                }
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Advance through the views like closing chart windows one by one;
    /// advancing past the dashboard quits.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Tab | KeyCode::Right => {
                match self.view.next() {
                    Some(v) => self.view = v,
                    None => self.should_quit = true,
                }
            }
            KeyCode::Left => self.view = self.view.prev(),
            KeyCode::Char('1') => self.view = View::TimeSeries,
            KeyCode::Char('2') => self.view = View::Distributions,
            KeyCode::Char('3') => self.view = View::Dashboard,
            _ => {}
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(8)])
            .split(f.area());

        header::draw_header(f, rows[0], self.view);
        match self.view {
            View::TimeSeries => timeseries::draw_time_series(f, rows[1], &self.table),
            View::Distributions => {
                distributions::draw_distributions(f, rows[1], &self.table, &self.analysis)
            }
            View::Dashboard => dashboard::draw_dashboard(f, rows[1], &self.table, &self.analysis),
        }
    }
}
