use crate::command::{Action, Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// `TestProgram` lets you exercise every part of the init/update/view cycle in
/// a plain `#[test]` function -- no tokio runtime or TTY required.  Synchronous
/// commands (e.g. [`Command::message`]) are collected and can be flushed with
/// [`drain_messages`](TestProgram::drain_messages); async commands and terminal
/// commands are silently ignored.
///
/// # Example
///
/// ```rust,ignore
/// use guessline_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<App>::new(flags);
/// prog.send(Msg::Key(key(KeyCode::Char('h'))));
/// prog.drain_messages();
///
/// let output = prog.render_string(40, 10);
/// assert!(output.contains('H'));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    ///
    /// Any synchronous commands produced by `init` are collected into the
    /// pending-message queue.  Call
    /// [`drain_messages`](TestProgram::drain_messages) to process them.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// The message is passed to [`Model::update`] immediately.  Any
    /// synchronous commands returned by `update` are enqueued; call
    /// [`drain_messages`](TestProgram::drain_messages) to flush them.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process all pending synchronous messages produced by [`Command::message`].
    ///
    /// Repeatedly drains the pending queue, calling [`Model::update`] for each
    /// message, until no new synchronous messages are generated.  Useful for
    /// command-chaining scenarios where one update produces a message that
    /// triggers another update.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the model for direct test setup.
    ///
    /// This bypasses the normal message-driven update cycle, which can be
    /// useful for arranging test state before sending messages.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    ///
    /// Returns the raw buffer, which you can inspect cell-by-cell.  For a
    /// simpler string-based assertion, see
    /// [`render_string`](TestProgram::render_string).
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string.
    ///
    /// Each row of the buffer is concatenated into a line; rows are separated
    /// by newlines.  Trailing whitespace within each row is preserved.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                output.push_str(cell.symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {}
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
            CommandInner::Terminal(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // A minimal win-streak model for exercising the harness
    struct Streak {
        wins: i64,
    }

    #[derive(Debug)]
    enum StreakMsg {
        Won,
        Lost,
        Reset,
    }

    impl Model for Streak {
        type Message = StreakMsg;
        type Flags = i64;

        fn init(initial: i64) -> (Self, Command<StreakMsg>) {
            (Streak { wins: initial }, Command::none())
        }

        fn update(&mut self, msg: StreakMsg) -> Command<StreakMsg> {
            match msg {
                StreakMsg::Won => self.wins += 1,
                StreakMsg::Lost => self.wins -= 1,
                StreakMsg::Reset => self.wins = 0,
            }
            Command::none()
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let area = frame.area();
            let text = format!("Streak: {}", self.wins);
            let paragraph = Paragraph::new(text);
            frame.render_widget(paragraph, area);
        }
    }

    #[test]
    fn test_program_init() {
        let prog = TestProgram::<Streak>::new(0);
        assert_eq!(prog.model().wins, 0);
    }

    #[test]
    fn test_program_init_with_flags() {
        let prog = TestProgram::<Streak>::new(42);
        assert_eq!(prog.model().wins, 42);
    }

    #[test]
    fn test_program_send() {
        let mut prog = TestProgram::<Streak>::new(0);
        prog.send(StreakMsg::Won);
        assert_eq!(prog.model().wins, 1);
    }

    #[test]
    fn test_program_send_multiple() {
        let mut prog = TestProgram::<Streak>::new(0);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Lost);
        assert_eq!(prog.model().wins, 2);
    }

    #[test]
    fn test_program_reset() {
        let mut prog = TestProgram::<Streak>::new(10);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Reset);
        assert_eq!(prog.model().wins, 0);
    }

    #[test]
    fn test_program_render() {
        let prog = TestProgram::<Streak>::new(0);
        let content = prog.render_string(40, 1);
        assert!(content.contains("Streak: 0"));
    }

    #[test]
    fn test_program_render_after_update() {
        let mut prog = TestProgram::<Streak>::new(0);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Won);
        prog.send(StreakMsg::Won);
        let content = prog.render_string(40, 1);
        assert!(content.contains("Streak: 3"));
    }

    // A model that uses Command::message for chaining
    struct ChainModel {
        steps: Vec<String>,
    }

    #[derive(Debug)]
    enum ChainMsg {
        Start,
        Step(String),
    }

    impl Model for ChainModel {
        type Message = ChainMsg;
        type Flags = ();

        fn init(_: ()) -> (Self, Command<ChainMsg>) {
            (ChainModel { steps: vec![] }, Command::none())
        }

        fn update(&mut self, msg: ChainMsg) -> Command<ChainMsg> {
            match msg {
                ChainMsg::Start => {
                    self.steps.push("started".into());
                    Command::message(ChainMsg::Step("auto".into()))
                }
                ChainMsg::Step(s) => {
                    self.steps.push(s);
                    Command::none()
                }
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let text = self.steps.join(", ");
            frame.render_widget(Paragraph::new(text), frame.area());
        }
    }

    #[test]
    fn test_command_message_chaining() {
        let mut prog = TestProgram::<ChainModel>::new(());
        prog.send(ChainMsg::Start);
        // The Command::message should have queued ChainMsg::Step
        prog.drain_messages();
        assert_eq!(prog.model().steps, vec!["started", "auto"]);
    }
}
