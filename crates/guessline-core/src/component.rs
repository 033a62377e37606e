use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` is nearly identical to [`Model`](crate::Model) but its
/// [`view`](Component::view) method receives an `area: Rect`, making
/// components composable within layouts.  A parent model decides *where* each
/// child renders by passing it a sub-region of the frame.
///
/// # Composition pattern
///
/// Embed a `Component` inside a [`Model`](crate::Model) by wrapping the
/// component's message type in a variant of the parent message and using
/// [`Command::map`] to translate commands:
///
/// ```rust,ignore
/// use guessline_core::{Model, Component, Command};
/// use ratatui::Frame;
/// use ratatui::layout::{Constraint, Layout, Rect};
///
/// struct App { entry: GuessLine }
///
/// #[derive(Debug)]
/// enum AppMsg { Entry(guess_line::Message) }
///
/// impl Model for App {
///     type Message = AppMsg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<AppMsg>) {
///         (App { entry: GuessLine::new() }, Command::none())
///     }
///
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Entry(m) => self.entry.update(m).map(AppMsg::Entry),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let [row] = Layout::vertical([Constraint::Length(3)]).areas(frame.area());
///         self.entry.view(frame, row);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// Works exactly like [`Model::update`](crate::Model::update).  The
    /// returned command uses the component's own `Message` type; the parent
    /// should call [`.map()`](Command::map) to lift it into the parent
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// The parent is responsible for collecting child subscriptions and
    /// including them in its own
    /// [`Model::subscriptions`](crate::Model::subscriptions) return value,
    /// mapping messages appropriately.
    ///
    /// The default implementation returns an empty list (no subscriptions).
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently has focus.
    ///
    /// A hint for input routing.  A parent can query `focused()` to decide
    /// which child should receive keyboard events.  The default
    /// implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
