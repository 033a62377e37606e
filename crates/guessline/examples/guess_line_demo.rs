//! # Guess Line Demo
//!
//! Demonstrates the bare `GuessLine` widget outside the game:
//! - Routing every key press to the mounted component
//! - Observing the `Submitted` message in the parent
//! - The lenient capacity adapter (`+`/`-` change the slot count here)
//!
//! Run with: `cargo run --example guess_line_demo`

use guessline::crossterm::event::{KeyCode, KeyModifiers};
use guessline::ratatui::layout::{Constraint, Layout};
use guessline::ratatui::style::{Color, Style};
use guessline::ratatui::text::{Line, Span};
use guessline::ratatui::widgets::Paragraph;
use guessline::ratatui::Frame;
use guessline::widgets::chrome::CELL_HEIGHT;
use guessline::widgets::guess_line::{self, GuessLine};
use guessline::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};

struct Demo {
    entry: GuessLine,
    submitted: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Entry(guess_line::Message),
    Grow,
    Shrink,
    Quit,
}

impl Model for Demo {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        (
            Demo {
                entry: GuessLine::new(),
                submitted: None,
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Entry(guess_line::Message::Submitted(word)) => {
                self.submitted = Some(word);
                self.entry.reset();
                Command::none()
            }
            Msg::Entry(m) => self.entry.update(m).map(Msg::Entry),
            Msg::Grow => {
                self.entry.set_capacity(self.entry.capacity() + 1);
                Command::none()
            }
            Msg::Shrink => {
                self.entry.set_capacity(self.entry.capacity().saturating_sub(1));
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [title, entry_area, status, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(
            Paragraph::new("guess line demo").style(Style::default().fg(Color::Cyan)),
            title,
        );
        self.entry.view(frame, entry_area);
        if let Some(ref word) = self.submitted {
            frame.render_widget(Paragraph::new(format!("submitted: {word}")), status);
        }
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("letters", Style::default().fg(Color::Cyan)),
                Span::raw(" type  "),
                Span::styled("+/-", Style::default().fg(Color::Cyan)),
                Span::raw(" resize  "),
                Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
                Span::raw(" quit"),
            ])),
            help,
        );
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Char('+'), _) => Some(Msg::Grow),
                (KeyCode::Char('-'), _) => Some(Msg::Shrink),
                _ => Some(Msg::Entry(guess_line::Message::Key(key))),
            },
            _ => None,
        })]
    }
}

#[guessline::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    guessline::run::<Demo>(()).await?;
    Ok(())
}
