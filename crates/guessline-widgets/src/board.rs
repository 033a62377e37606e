//! Scored attempt board: one row of colored letter cells per completed guess,
//! plus a placeholder-row helper for unplayed rows.

use guessline_core::command::Command;
use guessline_core::component::Component;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::chrome::{slot_cells, CELL_HEIGHT};

/// Per-letter score of a completed guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterScore {
    /// Right letter, right position.
    Correct,
    /// Letter occurs elsewhere in the word.
    Present,
    /// Letter does not occur (or all its occurrences are used up).
    Absent,
}

impl LetterScore {
    /// Cell style for this score.
    pub fn style(self) -> Style {
        let bg = match self {
            LetterScore::Correct => Color::Green,
            LetterScore::Present => Color::Yellow,
            LetterScore::Absent => Color::DarkGray,
        };
        Style::default()
            .bg(bg)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }
}

/// One completed, scored guess.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    /// The guessed word, uppercase.
    pub word: String,
    /// One score per letter of `word`.
    pub scores: Vec<LetterScore>,
}

impl ScoredRow {
    /// Pair up letters with their scores.
    fn cells(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        self.word.chars().zip(self.scores.iter().copied())
    }
}

/// Messages for the board component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Append a completed, scored guess.
    Push(ScoredRow),
    /// Remove all rows (new game).
    Clear,
}

/// The stack of completed attempts for the current game.
///
/// Purely derived display state: rows are appended as guesses are scored and
/// cleared when a new game starts.  Rendering shows each row as a line of
/// letter cells colored by score.
pub struct Board {
    rows: Vec<ScoredRow>,
    word_len: usize,
}

impl Board {
    /// Create an empty board for words of `word_len` letters.
    pub fn new(word_len: usize) -> Self {
        Self {
            rows: Vec::new(),
            word_len,
        }
    }

    /// Append a completed, scored guess.
    pub fn push_row(&mut self, row: ScoredRow) {
        self.rows.push(row);
    }

    /// Remove all rows and adopt a new word length.
    pub fn reset(&mut self, word_len: usize) {
        self.rows.clear();
        self.word_len = word_len;
    }

    /// The completed rows, oldest first.
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Number of completed rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no guess has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Word length the board renders cells for.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    fn view_row(&self, frame: &mut Frame, area: Rect, row: &ScoredRow) {
        if area.height < CELL_HEIGHT {
            let mut spans = Vec::with_capacity(self.word_len * 2);
            for (i, (ch, score)) in row.cells().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(ch.to_string(), score.style()));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
            return;
        }
        let cells = slot_cells(area, self.word_len);
        for ((ch, score), cell) in row.cells().zip(cells.iter()) {
            let style = score.style();
            let block = Block::new().borders(Borders::ALL).style(style);
            let inner = block.inner(*cell);
            frame.render_widget(block, *cell);
            frame.render_widget(
                Paragraph::new(ch.to_string())
                    .alignment(Alignment::Center)
                    .style(style),
                inner,
            );
        }
    }
}

impl Component for Board {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Push(row) => self.rows.push(row),
            Message::Clear => self.rows.clear(),
        }
        Command::none()
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 || self.rows.is_empty() {
            return;
        }
        let row_height = if area.height >= CELL_HEIGHT * self.rows.len() as u16 {
            CELL_HEIGHT
        } else {
            1
        };
        let mut y = area.y;
        for row in &self.rows {
            if y + row_height > area.y + area.height {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, row_height);
            self.view_row(frame, row_area, row);
            y += row_height;
        }
    }
}

/// Render one empty placeholder row of `word_len` cells (an unplayed line).
pub fn placeholder_row(frame: &mut Frame, area: Rect, word_len: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let dim = Style::default().fg(Color::DarkGray);
    if area.height < CELL_HEIGHT {
        let mut text = String::with_capacity(word_len * 2);
        for i in 0..word_len {
            if i > 0 {
                text.push(' ');
            }
            text.push('.');
        }
        frame.render_widget(Paragraph::new(text).style(dim), area);
        return;
    }
    for cell in slot_cells(area, word_len).iter() {
        frame.render_widget(Block::new().borders(Borders::ALL).border_style(dim), *cell);
    }
}
