//! The top-level application model: difficulty menu, play screen, and the
//! end-of-game overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guessline_core::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
use guessline_widgets::banner::{self, Banner};
use guessline_widgets::board::{self, Board, ScoredRow};
use guessline_widgets::chrome::{title_block, CELL_HEIGHT, CELL_WIDTH};
use guessline_widgets::guess_line::{self, GuessLine};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::{Difficulty, Game, GameConfig, GuessOutcome, Status};

/// Startup data for [`App`].
#[derive(Debug, Default)]
pub struct Flags {
    /// Skip the menu and start a game with this configuration.
    pub start: Option<GameConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Game,
}

/// Application messages.
#[derive(Debug)]
pub enum Msg {
    /// A raw key press; routed by screen in `update`.
    Key(KeyEvent),
    /// Guess line child messages.
    Entry(guess_line::Message),
    /// Board child messages.
    Board(board::Message),
    /// Banner child messages.
    Banner(banner::Message),
}

/// The guessline application.
///
/// Keyboard input is captured page-wide: while a game is running every key
/// reaches the mounted [`GuessLine`]; the moment the game ends the line is
/// unmounted and keys drive the overlay instead.  The difficulty menu and the
/// overlay have their own small key maps.
pub struct App {
    screen: Screen,
    banner: Banner,
    menu_index: usize,
    menu_error: Option<String>,
    game: Option<Game>,
    board: Board,
    entry: GuessLine,
}

impl App {
    fn game_running(&self) -> bool {
        matches!(self.game.as_ref().map(Game::status), Some(Status::Running))
    }

    fn start_game(&mut self, config: GameConfig) -> Command<Msg> {
        match Game::new(config) {
            Ok(game) => {
                self.mount_game(game);
                Command::none()
            }
            Err(err) => {
                self.menu_error = Some(err.to_string());
                Command::none()
            }
        }
    }

    fn mount_game(&mut self, game: Game) {
        self.entry = GuessLine::new().with_capacity(game.word_len());
        self.board.reset(game.word_len());
        self.game = Some(game);
        self.screen = Screen::Game;
        self.menu_error = None;
        self.banner.stop();
    }

    fn back_to_menu(&mut self) {
        self.game = None;
        self.screen = Screen::Menu;
        self.banner.start();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Msg> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Command::quit(),
                KeyCode::Char('z') => return Command::suspend(),
                _ => {}
            }
        }
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            // Page-wide capture: while the game runs, every remaining key
            // goes to the mounted guess line.
            Screen::Game if self.game_running() => self
                .entry
                .update(guess_line::Message::Key(key))
                .map(Msg::Entry),
            Screen::Game => self.handle_overlay_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Command<Msg> {
        let count = Difficulty::ALL.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_index = (self.menu_index + count - 1) % count;
                Command::none()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_index = (self.menu_index + 1) % count;
                Command::none()
            }
            KeyCode::Enter => self.start_game(Difficulty::ALL[self.menu_index].config()),
            KeyCode::Char(c @ '1'..='4') => {
                self.menu_index = (c as usize) - ('1' as usize);
                self.start_game(Difficulty::ALL[self.menu_index].config())
            }
            KeyCode::Char('q') => Command::quit(),
            _ => Command::none(),
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> Command<Msg> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                self.back_to_menu();
                Command::none()
            }
            KeyCode::Char('q') => Command::quit(),
            _ => Command::none(),
        }
    }

    fn submit_guess(&mut self, word: &str) -> Command<Msg> {
        let Some(game) = self.game.as_mut() else {
            return Command::none();
        };
        match game.apply_guess(word) {
            GuessOutcome::Rejected => Command::none(),
            GuessOutcome::Accepted | GuessOutcome::Won | GuessOutcome::Lost => {
                // apply_guess recorded the attempt; mirror it onto the board
                // and clear the line for the next one.
                let row = game.attempts().last().map(|attempt| ScoredRow {
                    word: attempt.word.clone(),
                    scores: attempt.scores.clone(),
                });
                self.entry.reset();
                match row {
                    Some(row) => Command::message(Msg::Board(board::Message::Push(row))),
                    None => Command::none(),
                }
            }
        }
    }

    fn view_menu(&self, frame: &mut Frame, area: Rect) {
        let width = 44u16.min(area.width);
        let height = (Difficulty::ALL.len() as u16 + 4).min(area.height);
        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [menu_area, below] =
            Layout::vertical([Constraint::Length(height), Constraint::Fill(1)]).areas(column);

        let block = title_block("difficulty", true);
        let inner = block.inner(menu_area);
        frame.render_widget(block, menu_area);

        let mut lines = Vec::new();
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let config = difficulty.config();
            let text = format!(
                "{}. {:<10} {} tries, {} letters",
                i + 1,
                difficulty.label(),
                config.tries,
                config.word_len
            );
            let style = if i == self.menu_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        if let Some(ref err) = self.menu_error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("\u{2191}/\u{2193}", Style::default().fg(Color::Cyan)),
            Span::raw(" move  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" start  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, below);
    }

    fn view_game(&self, frame: &mut Frame, area: Rect) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let tries = game.tries() as u16;
        let word_len = game.word_len();
        let grid_width = (word_len as u16 * CELL_WIDTH).max(20);

        // Fall back to one line per row when the grid does not fit.
        let row_height = if area.height >= tries * CELL_HEIGHT + 2 {
            CELL_HEIGHT
        } else {
            1
        };

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(grid_width.min(area.width)),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [grid_area, status_area] =
            Layout::vertical([Constraint::Length(tries * row_height), Constraint::Fill(1)])
                .areas(column);

        let rows = Layout::vertical(vec![Constraint::Length(row_height); tries as usize])
            .split(grid_area);
        let played = game.attempts().len();

        if played > 0 {
            let board_area = Rect::new(
                grid_area.x,
                grid_area.y,
                grid_area.width,
                row_height * played as u16,
            );
            self.board.view(frame, board_area);
        }
        for (i, row) in rows.iter().enumerate().skip(played) {
            if i == played && self.game_running() {
                self.entry.view(frame, *row);
            } else {
                board::placeholder_row(frame, *row, word_len);
            }
        }

        self.view_status(frame, status_area, game);
    }

    fn view_status(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let mut lines = Vec::new();
        match game.status() {
            Status::Running => {
                lines.push(Line::from(format!(
                    "attempt {}/{}",
                    game.attempts().len() + 1,
                    game.tries()
                )));
                lines.push(Line::from(vec![
                    Span::styled("letters", Style::default().fg(Color::Cyan)),
                    Span::raw(" type  "),
                    Span::styled("Backspace", Style::default().fg(Color::Cyan)),
                    Span::raw(" erase  "),
                    Span::styled("Enter", Style::default().fg(Color::Cyan)),
                    Span::raw(" guess  "),
                    Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
                    Span::raw(" quit"),
                ]));
            }
            Status::Won => {
                lines.push(Line::from(Span::styled(
                    "A WINNER IS YOU",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!(
                    "In only {} attempts, wow :o",
                    game.attempts().len()
                )));
                lines.push(play_again_line());
            }
            Status::Lost => {
                lines.push(Line::from(Span::styled(
                    "NICE TRY...",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!("The word was {}", game.word())));
                lines.push(play_again_line());
            }
        }
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

fn play_again_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" play again  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ])
}

impl Model for App {
    type Message = Msg;
    type Flags = Flags;

    fn init(flags: Flags) -> (Self, Command<Msg>) {
        let mut app = App {
            screen: Screen::Menu,
            banner: Banner::new("banner", "G U E S S L I N E"),
            menu_index: 0,
            menu_error: None,
            game: None,
            board: Board::new(guess_line::DEFAULT_CAPACITY),
            entry: GuessLine::new(),
        };
        let cmd = match flags.start {
            Some(config) => app.start_game(config),
            None => Command::none(),
        };
        (app, cmd)
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self.handle_key(key),
            Msg::Entry(guess_line::Message::Submitted(word)) => self.submit_guess(&word),
            Msg::Entry(m) => self.entry.update(m).map(Msg::Entry),
            Msg::Board(m) => self.board.update(m).map(Msg::Board),
            Msg::Banner(m) => self.banner.update(m).map(Msg::Banner),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [banner_area, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);
        self.banner.view(frame, banner_area);
        match self.screen {
            Screen::Menu => self.view_menu(frame, body),
            Screen::Game => self.view_game(frame, body),
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => Some(Msg::Key(key)),
            _ => None,
        })];
        subs.extend(
            self.banner
                .subscriptions()
                .into_iter()
                .map(|s| s.map(Msg::Banner)),
        );
        subs
    }
}
