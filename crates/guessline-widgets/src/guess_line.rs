//! Guess-entry component: a bounded row of letter slots filled from the
//! keyboard, submitting its value when every slot is occupied.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guessline_core::command::Command;
use guessline_core::component::Component;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::chrome::{slot_cells, CELL_HEIGHT};

/// Number of letter slots used when none (or an unusable value) is given.
pub const DEFAULT_CAPACITY: usize = 5;

/// Parse a declarative capacity value the lenient way: any string that is not
/// a positive integer falls back to [`DEFAULT_CAPACITY`].
pub fn parse_capacity(input: &str) -> usize {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_CAPACITY)
}

/// Style configuration for the guess line.
#[derive(Debug, Clone)]
pub struct GuessLineStyle {
    /// Style applied to entered letters.
    pub letter: Style,
    /// Style applied to empty-slot placeholders in the compact rendering.
    pub placeholder: Style,
    /// Style applied to slot cell borders.
    pub border: Style,
}

impl Default for GuessLineStyle {
    fn default() -> Self {
        Self {
            letter: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Messages for the guess line component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    Key(KeyEvent),
    /// Emitted when Enter is pressed with every slot occupied.  Carries the
    /// full guess.  Parents observe this; the component itself ignores it.
    Submitted(String),
}

/// A single row of letter slots driven by the keyboard.
///
/// Letters are appended uppercased until the row is full; Escape or Backspace
/// removes the last letter; Enter submits only when the buffer length equals
/// the slot count exactly.  Everything else is ignored.  There is no focus
/// gate: the component processes whatever keys its host routes to it, and the
/// host stops routing when the component is unmounted.
///
/// # Example
///
/// ```ignore
/// let mut entry = GuessLine::new().with_capacity(6);
///
/// // In your parent's update method, forward key events:
/// // let cmd = entry.update(Message::Key(key)).map(Msg::Entry);
///
/// // In your parent's view method, delegate rendering:
/// // entry.view(frame, area);
/// ```
pub struct GuessLine {
    buffer: String,
    capacity: usize,
    style: GuessLineStyle,
}

impl Default for GuessLine {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessLine {
    /// Create an empty guess line with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            capacity: DEFAULT_CAPACITY,
            style: GuessLineStyle::default(),
        }
    }

    /// Set the slot count (builder variant).  Zero falls back to the default.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.set_capacity(capacity);
        self
    }

    /// Set custom styles for the guess line.
    pub fn with_style(mut self, style: GuessLineStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the current buffer value.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Programmatically set the buffer value, verbatim.
    ///
    /// No length or charset validation is applied: the keyboard path is the
    /// only normalizing writer, a programmatic set stores exactly what it is
    /// given.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
    }

    /// Clear the buffer.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Get the slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Set the slot count.  The single mutation path for capacity.
    ///
    /// Zero is treated as unset and falls back to [`DEFAULT_CAPACITY`].
    /// Shrinking below the current buffer length does not truncate the
    /// buffer: only the rendered slot count changes.  Typing stays blocked
    /// and Enter never fires until enough letters are deleted.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
    }

    /// Declarative-attribute adapter over [`set_capacity`](Self::set_capacity):
    /// parses `input` leniently via [`parse_capacity`].
    pub fn set_length(&mut self, input: &str) {
        self.set_capacity(parse_capacity(input));
    }

    /// Number of characters currently in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the buffer fills every slot exactly.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && (key.modifiers == KeyModifiers::NONE
                        || key.modifiers == KeyModifiers::SHIFT) =>
            {
                if self.len() < self.capacity {
                    self.buffer.push(c.to_ascii_uppercase());
                }
                Command::none()
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.buffer.pop();
                Command::none()
            }
            KeyCode::Enter => {
                if self.is_full() {
                    Command::message(Message::Submitted(self.buffer.clone()))
                } else {
                    Command::none()
                }
            }
            _ => Command::none(),
        }
    }

    fn view_compact(&self, frame: &mut Frame, area: Rect) {
        let letters: Vec<char> = self.buffer.chars().collect();
        let mut spans = Vec::with_capacity(self.capacity * 2);
        for i in 0..self.capacity {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match letters.get(i) {
                Some(&ch) => spans.push(Span::styled(ch.to_string(), self.style.letter)),
                None => spans.push(Span::styled("_", self.style.placeholder)),
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for GuessLine {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Key(key) => self.handle_key(key),
            Message::Submitted(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if area.height < CELL_HEIGHT {
            self.view_compact(frame, area);
            return;
        }

        let letters: Vec<char> = self.buffer.chars().collect();
        for (i, cell) in slot_cells(area, self.capacity).iter().enumerate() {
            let block = Block::new()
                .borders(Borders::ALL)
                .border_style(self.style.border);
            let inner = block.inner(*cell);
            frame.render_widget(block, *cell);
            if let Some(&ch) = letters.get(i) {
                let letter = Paragraph::new(ch.to_string())
                    .alignment(Alignment::Center)
                    .style(self.style.letter);
                frame.render_widget(letter, inner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use guessline_core::testing::TestProgram;
    use guessline_core::Model;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_shift(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_word(entry: &mut GuessLine, word: &str) {
        for c in word.chars() {
            entry.update(Message::Key(key(KeyCode::Char(c))));
        }
    }

    #[test]
    fn new_guess_line_is_empty_with_five_slots() {
        let entry = GuessLine::new();
        assert_eq!(entry.value(), "");
        assert_eq!(entry.capacity(), 5);
    }

    #[test]
    fn typing_uppercases_letters() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "he");
        assert_eq!(entry.value(), "HE");
    }

    #[test]
    fn shift_letters_accepted() {
        let mut entry = GuessLine::new();
        entry.update(Message::Key(key_shift(KeyCode::Char('H'))));
        assert_eq!(entry.value(), "H");
    }

    #[test]
    fn ctrl_letters_ignored() {
        let mut entry = GuessLine::new();
        entry.update(Message::Key(key_ctrl(KeyCode::Char('a'))));
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn non_alphabetic_keys_ignored() {
        let mut entry = GuessLine::new();
        entry.update(Message::Key(key(KeyCode::Char('3'))));
        entry.update(Message::Key(key(KeyCode::Char(' '))));
        entry.update(Message::Key(key(KeyCode::Char('!'))));
        entry.update(Message::Key(key(KeyCode::Tab)));
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn letters_beyond_capacity_ignored() {
        let mut entry = GuessLine::new().with_capacity(3);
        type_word(&mut entry, "abcd");
        assert_eq!(entry.value(), "ABC");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hi");
        entry.update(Message::Key(key(KeyCode::Backspace)));
        assert_eq!(entry.value(), "H");
    }

    #[test]
    fn escape_removes_last_letter() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hi");
        entry.update(Message::Key(key(KeyCode::Esc)));
        assert_eq!(entry.value(), "H");
    }

    #[test]
    fn delete_on_empty_buffer_is_noop() {
        let mut entry = GuessLine::new();
        let cmd = entry.update(Message::Key(key(KeyCode::Backspace)));
        assert!(cmd.is_none());
        assert_eq!(entry.value(), "");

        let cmd = entry.update(Message::Key(key(KeyCode::Esc)));
        assert!(cmd.is_none());
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn enter_below_capacity_emits_nothing() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hi");
        let cmd = entry.update(Message::Key(key(KeyCode::Enter)));
        assert!(cmd.is_none());
    }

    #[test]
    fn enter_at_capacity_submits_once() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hello");
        let cmd = entry.update(Message::Key(key(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::Submitted(word)) => assert_eq!(word, "HELLO"),
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn submitted_message_is_ignored_by_the_component() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hello");
        let cmd = entry.update(Message::Submitted("HELLO".into()));
        assert!(cmd.is_none());
        assert_eq!(entry.value(), "HELLO");
    }

    #[test]
    fn set_value_is_verbatim() {
        let mut entry = GuessLine::new();
        entry.set_value("sos");
        assert_eq!(entry.value(), "sos");

        entry.set_value("TOOLONGVALUE");
        assert_eq!(entry.value(), "TOOLONGVALUE");
    }

    #[test]
    fn set_length_parses_numeric_input() {
        let mut entry = GuessLine::new();
        entry.set_length("7");
        assert_eq!(entry.capacity(), 7);
    }

    #[test]
    fn set_length_non_numeric_falls_back_to_five() {
        let mut entry = GuessLine::new().with_capacity(9);
        entry.set_length("abc");
        assert_eq!(entry.capacity(), 5);
    }

    #[test]
    fn set_length_zero_falls_back_to_five() {
        let mut entry = GuessLine::new().with_capacity(9);
        entry.set_length("0");
        assert_eq!(entry.capacity(), 5);
    }

    #[test]
    fn parse_capacity_rules() {
        assert_eq!(parse_capacity("3"), 3);
        assert_eq!(parse_capacity(" 12 "), 12);
        assert_eq!(parse_capacity(""), 5);
        assert_eq!(parse_capacity("abc"), 5);
        assert_eq!(parse_capacity("3.7"), 5);
        assert_eq!(parse_capacity("-2"), 5);
        assert_eq!(parse_capacity("0"), 5);
    }

    #[test]
    fn shrinking_capacity_preserves_buffer() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hello");
        entry.set_capacity(3);
        assert_eq!(entry.value(), "HELLO");
        assert_eq!(entry.capacity(), 3);

        // Over-length buffer: typing is blocked and Enter never fires
        entry.update(Message::Key(key(KeyCode::Char('x'))));
        assert_eq!(entry.value(), "HELLO");
        let cmd = entry.update(Message::Key(key(KeyCode::Enter)));
        assert!(cmd.is_none());

        // Deleting back down to the slot count makes it submittable again
        entry.update(Message::Key(key(KeyCode::Backspace)));
        entry.update(Message::Key(key(KeyCode::Backspace)));
        let cmd = entry.update(Message::Key(key(KeyCode::Enter)));
        match cmd.into_message() {
            Some(Message::Submitted(word)) => assert_eq!(word, "HEL"),
            other => panic!("expected Submitted, got {other:?}"),
        }
    }

    #[test]
    fn scenario_hello_submits_one_event() {
        let mut entry = GuessLine::new();
        let mut submitted = Vec::new();
        for c in "hello".chars() {
            let cmd = entry.update(Message::Key(key(KeyCode::Char(c))));
            assert!(cmd.is_none());
        }
        if let Some(Message::Submitted(word)) = entry
            .update(Message::Key(key(KeyCode::Enter)))
            .into_message()
        {
            submitted.push(word);
        }
        assert_eq!(submitted, vec!["HELLO".to_string()]);
    }

    #[test]
    fn scenario_hi_enter_emits_nothing() {
        let mut entry = GuessLine::new();
        type_word(&mut entry, "hi");
        let cmd = entry.update(Message::Key(key(KeyCode::Enter)));
        assert!(cmd.is_none());
        assert_eq!(entry.value(), "HI");
    }

    // Rendering is checked through a tiny host model so the slot invariant is
    // observable the way an application would see it.
    struct Host {
        entry: GuessLine,
    }

    impl Model for Host {
        type Message = Message;
        type Flags = usize;

        fn init(capacity: usize) -> (Self, Command<Message>) {
            (
                Host {
                    entry: GuessLine::new().with_capacity(capacity),
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: Message) -> Command<Message> {
            self.entry.update(msg)
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            self.entry.view(frame, frame.area());
        }
    }

    #[test]
    fn compact_render_shows_one_placeholder_per_slot() {
        for capacity in [1usize, 3, 5, 8] {
            let prog = TestProgram::<Host>::new(capacity);
            let line = prog.render_string(40, 1);
            assert_eq!(
                line.matches('_').count(),
                capacity,
                "capacity {capacity} must render {capacity} empty slots"
            );
        }
    }

    #[test]
    fn compact_render_left_aligns_typed_letters() {
        let mut prog = TestProgram::<Host>::new(5);
        prog.send(Message::Key(key(KeyCode::Char('h'))));
        prog.send(Message::Key(key(KeyCode::Char('i'))));
        let line = prog.render_string(40, 1);
        assert!(line.starts_with("H I _ _ _"), "got {line:?}");
    }

    #[test]
    fn boxed_render_shows_letters() {
        let mut prog = TestProgram::<Host>::new(5);
        prog.send(Message::Key(key(KeyCode::Char('a'))));
        prog.send(Message::Key(key(KeyCode::Char('b'))));
        let out = prog.render_string(30, 3);
        assert!(out.contains('A'));
        assert!(out.contains('B'));
    }

    #[test]
    fn render_after_capacity_change_rebuilds_slots() {
        let mut prog = TestProgram::<Host>::new(5);
        prog.model_mut().entry.set_length("not a number");
        let line = prog.render_string(40, 1);
        assert_eq!(line.matches('_').count(), 5);
    }
}
