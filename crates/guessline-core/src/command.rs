use futures::future::BoxFuture;
use std::future::Future;

/// A side effect returned from [`Model::update`](crate::Model::update) or
/// [`Model::init`](crate::Model::init).
///
/// Commands represent async operations, immediate messages, terminal
/// management, and program lifecycle actions.  They are the only way to
/// perform work that goes beyond pure state updates.
///
/// # Examples
///
/// ```rust,ignore
/// // Do nothing:
/// let cmd = Command::none();
///
/// // Deliver a message to the model on the next loop iteration:
/// let cmd = Command::message(Msg::Submitted(guess));
///
/// // Quit the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Action(Action<Msg>),
    Future(BoxFuture<'static, Msg>),
    Batch(Vec<Command<Msg>>),
    Terminal(TerminalCommand),
}

/// Internal action variants handled synchronously by the runtime, without
/// spawning async tasks.
pub enum Action<Msg> {
    /// Send a message immediately (no async).
    Message(Msg),
    /// Quit the program.
    Quit,
}

/// Terminal management commands executed by the runtime.
///
/// Sent via [`Command::terminal`] or convenience methods such as
/// [`Command::enter_alt_screen`] and [`Command::hide_cursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalCommand {
    /// Switch to the alternate screen buffer.
    EnterAltScreen,
    /// Return to the primary screen buffer.
    ExitAltScreen,
    /// Make the terminal cursor visible.
    ShowCursor,
    /// Hide the terminal cursor.
    HideCursor,
    /// Set the terminal window title.
    SetTitle(String),
    /// Clear the entire terminal screen.
    ClearScreen,
    /// Suspend the process (send SIGTSTP on Unix).
    Suspend,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Run an async future, map the result to a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            inner: CommandInner::Future(Box::pin(async move { map(future.await) })),
        }
    }

    /// Send a message immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Action(Action::Message(msg)),
        }
    }

    /// Quit the program.
    pub fn quit() -> Self {
        Command {
            inner: CommandInner::Action(Action::Quit),
        }
    }

    /// Run multiple commands concurrently.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let cmds: Vec<_> = cmds.into_iter().collect();
        if cmds.is_empty() {
            return Command::none();
        }
        if cmds.len() == 1 {
            let mut cmds = cmds;
            return cmds.pop().unwrap();
        }
        Command {
            inner: CommandInner::Batch(cmds),
        }
    }

    /// Terminal management command.
    pub fn terminal(cmd: TerminalCommand) -> Self {
        Command {
            inner: CommandInner::Terminal(cmd),
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(std::sync::Arc::new(f))
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: std::sync::Arc<dyn Fn(Msg) -> NewMsg + Send + Sync>,
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Action(Action::Message(msg)) => Command::message(f(msg)),
            CommandInner::Action(Action::Quit) => Command::quit(),
            CommandInner::Future(fut) => {
                let f = f.clone();
                Command {
                    inner: CommandInner::Future(Box::pin(async move { f(fut.await) })),
                }
            }
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(
                    cmds.into_iter()
                        .map(|cmd| cmd.map_with(f.clone()))
                        .collect(),
                ),
            },
            CommandInner::Terminal(tcmd) => Command::terminal(tcmd),
        }
    }

    /// One-shot timer: fires once after `duration`, mapping the instant to a message.
    pub fn tick(
        duration: std::time::Duration,
        map: impl FnOnce(std::time::Instant) -> Msg + Send + 'static,
    ) -> Self {
        Command {
            inner: CommandInner::Future(Box::pin(async move {
                tokio::time::sleep(duration).await;
                map(std::time::Instant::now())
            })),
        }
    }

    // Convenience terminal command constructors

    /// Switch to the alternate screen buffer.
    pub fn enter_alt_screen() -> Self {
        Command::terminal(TerminalCommand::EnterAltScreen)
    }

    /// Return to the primary screen buffer.
    pub fn exit_alt_screen() -> Self {
        Command::terminal(TerminalCommand::ExitAltScreen)
    }

    /// Make the terminal cursor visible.
    pub fn show_cursor() -> Self {
        Command::terminal(TerminalCommand::ShowCursor)
    }

    /// Hide the terminal cursor.
    pub fn hide_cursor() -> Self {
        Command::terminal(TerminalCommand::HideCursor)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Command::terminal(TerminalCommand::SetTitle(title.into()))
    }

    /// Clear the entire terminal screen.
    pub fn clear_screen() -> Self {
        Command::terminal(TerminalCommand::ClearScreen)
    }

    /// Suspend the process (send SIGTSTP on Unix).
    pub fn suspend() -> Self {
        Command::terminal(TerminalCommand::Suspend)
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message action, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Action(Action::Message(msg)) => Some(msg),
            _ => None,
        }
    }

    /// If this command is a batch, return the inner commands.
    pub fn into_batch(self) -> Option<Vec<Command<Msg>>> {
        match self.inner {
            CommandInner::Batch(cmds) => Some(cmds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_message_creates_action() {
        let cmd: Command<i32> = Command::message(42);
        match cmd.inner {
            CommandInner::Action(Action::Message(msg)) => assert_eq!(msg, 42),
            _ => panic!("Expected Action::Message"),
        }
    }

    #[test]
    fn command_quit_creates_quit() {
        let cmd: Command<()> = Command::quit();
        assert!(matches!(cmd.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(matches!(cmd.inner, CommandInner::None));
    }

    #[test]
    fn command_batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1)]);
        match cmd.inner {
            CommandInner::Action(Action::Message(msg)) => assert_eq!(msg, 1),
            _ => panic!("Expected single command unwrapped"),
        }
    }

    #[test]
    fn command_batch_multiple() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        match cmd.inner {
            CommandInner::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn command_map_none() {
        let cmd: Command<i32> = Command::none();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::None));
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        match mapped.inner {
            CommandInner::Action(Action::Message(s)) => assert_eq!(s, "42"),
            _ => panic!("Expected mapped message"),
        }
    }

    #[test]
    fn command_map_quit_stays_quit() {
        let cmd: Command<i32> = Command::quit();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(matches!(mapped.inner, CommandInner::Action(Action::Quit)));
    }

    #[test]
    fn command_map_terminal_preserves_command() {
        let cmd: Command<i32> = Command::enter_alt_screen();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        match mapped.inner {
            CommandInner::Terminal(TerminalCommand::EnterAltScreen) => {}
            _ => panic!("Expected terminal command preserved"),
        }
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        match mapped.inner {
            CommandInner::Batch(cmds) => assert_eq!(cmds.len(), 2),
            _ => panic!("Expected mapped batch"),
        }
    }

    #[test]
    fn terminal_command_constructors() {
        let cmd: Command<()> = Command::show_cursor();
        assert!(matches!(
            cmd.inner,
            CommandInner::Terminal(TerminalCommand::ShowCursor)
        ));

        let cmd: Command<()> = Command::set_title("guessline");
        match cmd.inner {
            CommandInner::Terminal(TerminalCommand::SetTitle(s)) => assert_eq!(s, "guessline"),
            _ => panic!("Expected SetTitle"),
        }
    }

    #[test]
    fn into_message_on_non_message_is_none() {
        let cmd: Command<i32> = Command::quit();
        assert!(cmd.into_message().is_none());
    }
}
