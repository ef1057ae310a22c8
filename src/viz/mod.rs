use std::{
    io,
    sync::mpsc::{self, Receiver, Sender, TryRecvError},
    thread::{self, JoinHandle},
    time::Duration,
};

use crossterm::event::{self, KeyCode};
use ratatui::{prelude::*, widgets::*};

use self::components::{Component, Logs, Plots};
use self::util::event_keycode;

mod components;
mod tui;
mod util;

/// A per-episode metrics update sent from the training loop to the UI thread
pub struct Update {
    pub episode: u16,
    pub data: Vec<f64>,
}

/// Initialize the visualization on a background thread
///
/// Registers the tui-logger backend for the `log` facade so records land in
/// the UI's log pane, and returns the UI thread handle along with the sender
/// half of the metrics channel. One plot is created per name in `metrics`,
/// and each [`Update`] is expected to carry its `data` in the same order.
pub fn init(
    metrics: Vec<&'static str>,
    episodes: u16,
) -> (JoinHandle<io::Result<()>>, Sender<Update>) {
    let _ = tui_logger::init_logger(log::LevelFilter::Trace);
    tui_logger::set_default_level(log::LevelFilter::Trace);

    let (tx, rx) = mpsc::channel();
    let mut app = App::new(metrics, episodes);
    let handle = thread::spawn(move || app.run(rx));

    (handle, tx)
}

#[derive(Default, PartialEq)]
enum Focus {
    #[default]
    Plots,
    Logs,
}

pub struct App {
    episode: u16,
    total_episodes: u16,
    plots: Plots,
    logs: Logs,
    focus: Focus,
    finished: bool,
    quit: bool,
}

impl App {
    pub fn new(metrics: Vec<&'static str>, episodes: u16) -> Self {
        Self {
            episode: 0,
            total_episodes: episodes,
            plots: Plots::new(metrics, episodes),
            logs: Logs::new(),
            focus: Focus::default(),
            finished: false,
            quit: false,
        }
    }

    /// Drive the UI until the user quits
    ///
    /// The UI outlives the training side of the channel, so the final curves
    /// stay on screen until `q` is pressed.
    pub fn run(&mut self, rx: Receiver<Update>) -> io::Result<()> {
        let mut terminal = tui::init()?;

        while !self.quit {
            self.drain(&rx);
            terminal.draw(|frame| frame.render_widget(&*self, frame.size()))?;
            self.handle_events()?;
        }

        tui::restore()
    }

    fn drain(&mut self, rx: &Receiver<Update>) {
        loop {
            match rx.try_recv() {
                Ok(update) => {
                    self.episode = update.episode;
                    self.plots.update(update);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.finished = true;
                    break;
                }
            }
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }
        let event = event::read()?;

        if let Some(key) = event_keycode(&event) {
            match key {
                KeyCode::Char('q') => {
                    self.quit = true;
                    return Ok(());
                }
                KeyCode::Tab => {
                    self.focus = match self.focus {
                        Focus::Plots => Focus::Logs,
                        Focus::Logs => Focus::Plots,
                    };
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Plots => self.plots.handle_ui_event(&event),
            Focus::Logs => self.logs.handle_ui_event(&event),
        };

        Ok(())
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Length(3),
            ])
            .split(area);

        self.plots.render_ref(rows[0], buf);
        self.logs.render_ref(rows[1], buf);

        let title = if self.finished {
            "Progress (training finished, press q to quit)"
        } else {
            "Progress"
        };
        Gauge::default()
            .block(Block::bordered().border_type(BorderType::Rounded).title(title))
            .gauge_style(Color::Cyan)
            .ratio(f64::from(self.episode + 1) / f64::from(self.total_episodes.max(1)))
            .render(rows[2], buf);
    }
}
