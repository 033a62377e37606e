//! Decorative animated title: a highlight sweeps across the letters while the
//! banner is animating.  Carries no application state.

use guessline_core::command::Command;
use guessline_core::component::Component;
use guessline_core::subscription::Subscription;
use guessline_core::subscriptions::Every;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::time::Duration;

/// Extra sweep positions past the last letter, so the highlight visibly
/// leaves the text before wrapping around.
const SWEEP_GAP: usize = 4;

/// Messages for the banner component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance the highlight sweep by one position.
    Tick,
}

/// An animated title row.
///
/// While animating, an `Every` subscription drives a highlight that travels
/// letter by letter across the text and wraps around.  Stopped, the banner
/// renders as a plain styled title.
pub struct Banner {
    text: String,
    phase: usize,
    animating: bool,
    interval: Duration,
    style: Style,
    highlight: Style,
    id: &'static str,
}

impl Banner {
    /// Create a new banner with the given subscription identifier and text.
    /// Defaults to a 120ms sweep interval, animating.
    pub fn new(id: &'static str, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            phase: 0,
            animating: true,
            interval: Duration::from_millis(120),
            style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            id,
        }
    }

    /// Set the duration between sweep advances.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the base text style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the style of the highlighted letter.
    pub fn with_highlight(mut self, style: Style) -> Self {
        self.highlight = style;
        self
    }

    /// Start the sweep animation.
    pub fn start(&mut self) {
        self.animating = true;
    }

    /// Stop the sweep animation.
    pub fn stop(&mut self) {
        self.animating = false;
    }

    /// Return whether the banner is currently animating.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Current sweep position (letter index, or past-the-end during the gap).
    pub fn phase(&self) -> usize {
        self.phase
    }
}

impl Component for Banner {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Tick => {
                if self.animating && !self.text.is_empty() {
                    let period = self.text.chars().count() + SWEEP_GAP;
                    self.phase = (self.phase + 1) % period;
                }
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let spans: Vec<Span> = self
            .text
            .chars()
            .enumerate()
            .map(|(i, ch)| {
                let style = if self.animating && i == self.phase {
                    self.highlight
                } else {
                    self.style
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.animating {
            vec![
                guessline_core::subscription::subscribe(Every::new(self.interval, self.id))
                    .map(|_: std::time::Instant| Message::Tick),
            ]
        } else {
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_phase() {
        let mut banner = Banner::new("test-banner", "ABC");
        assert_eq!(banner.phase(), 0);
        banner.update(Message::Tick);
        assert_eq!(banner.phase(), 1);
    }

    #[test]
    fn phase_wraps_after_text_and_gap() {
        let mut banner = Banner::new("test-banner", "AB");
        let period = 2 + SWEEP_GAP;
        for _ in 0..period {
            banner.update(Message::Tick);
        }
        assert_eq!(banner.phase(), 0);
    }

    #[test]
    fn stopped_banner_does_not_advance() {
        let mut banner = Banner::new("test-banner", "ABC");
        banner.stop();
        banner.update(Message::Tick);
        assert_eq!(banner.phase(), 0);
    }

    #[test]
    fn subscriptions_follow_animation_state() {
        let mut banner = Banner::new("test-banner", "ABC");
        assert_eq!(banner.subscriptions().len(), 1);
        banner.stop();
        assert!(banner.subscriptions().is_empty());
    }
}
