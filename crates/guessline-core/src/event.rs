use crossterm::event::KeyEvent;

/// Terminal events produced by the runtime's event loop.
///
/// `TerminalEvent` is delivered to your application through the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription.
/// You provide a mapping function that converts each `TerminalEvent` into
/// your application's `Message` type.
///
/// The `Key` variant wraps [`crossterm::event::KeyEvent`], so you can
/// pattern-match on key codes and modifiers using the full crossterm API.
///
/// # Example
///
/// ```rust,ignore
/// use guessline_core::{subscriptions::terminal_events, TerminalEvent, Subscription};
///
/// fn subscriptions() -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|ev| match ev {
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         _ => None,
///     })]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding event kinds the runtime does
    /// not surface (mouse, bracketed paste).
    pub(crate) fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) => Some(TerminalEvent::Key(k)),
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::FocusGained => Some(TerminalEvent::FocusGained),
            crossterm::event::Event::FocusLost => Some(TerminalEvent::FocusLost),
            crossterm::event::Event::Mouse(_) | crossterm::event::Event::Paste(_) => None,
        }
    }
}
