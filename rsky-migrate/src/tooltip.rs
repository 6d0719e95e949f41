//! Show/hide state machine behind the tooltip component.
//!
//! The machine owns no timers. When a transition has to wait it hands back a
//! [`Timer`]; the host sleeps for `delay` and then calls
//! [`TooltipMachine::elapse`] with the timer's generation. Any event that
//! changes the pending target bumps the generation, so a timer that fires
//! late is simply ignored.

use std::time::Duration;

use crate::config::TooltipConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipEvent {
    TriggerEnter,
    TriggerLeave,
    ContentEnter,
    ContentLeave,
    Focus,
    Blur,
    /// Escape key
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub generation: u64,
    pub delay: Duration,
}

impl Timer {
    pub fn delay_millis(&self) -> u32 {
        u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    generation: u64,
    target: Visibility,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipMachine {
    config: TooltipConfig,
    visibility: Visibility,
    pending: Option<Pending>,
    generation: u64,
    over_trigger: bool,
    over_content: bool,
    focused: bool,
    dismissed: bool,
    has_content: bool,
}

impl TooltipMachine {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            visibility: Visibility::Hidden,
            pending: None,
            generation: 0,
            over_trigger: false,
            over_content: false,
            focused: false,
            dismissed: false,
            has_content: true,
        }
    }

    /// Starts out visible, as if the trigger were already engaged.
    pub fn open(config: TooltipConfig) -> Self {
        Self {
            visibility: Visibility::Visible,
            ..Self::new(config)
        }
    }

    /// A tooltip with nothing to show stays hidden whatever happens.
    pub fn without_content(mut self) -> Self {
        self.has_content = false;
        self.visibility = Visibility::Hidden;
        self
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn handle(&mut self, event: TooltipEvent) -> Option<Timer> {
        match event {
            TooltipEvent::TriggerEnter => {
                self.over_trigger = true;
                self.dismissed = false;
            }
            TooltipEvent::TriggerLeave => self.over_trigger = false,
            TooltipEvent::ContentEnter => {
                self.over_content = true;
                self.dismissed = false;
            }
            TooltipEvent::ContentLeave => self.over_content = false,
            TooltipEvent::Focus => {
                self.focused = true;
                self.dismissed = false;
            }
            TooltipEvent::Blur => self.focused = false,
            TooltipEvent::Dismiss => self.dismissed = true,
        }

        let target = if self.engaged() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        if target == self.visibility {
            // Opposing event arrived before the delay elapsed.
            self.cancel();
            return None;
        }

        let delay = match (target, event) {
            (Visibility::Visible, TooltipEvent::Focus) => Duration::ZERO,
            (Visibility::Visible, _) => self.config.show_delay,
            (Visibility::Hidden, TooltipEvent::Dismiss) => Duration::ZERO,
            (Visibility::Hidden, _) => self.config.hide_delay,
        };

        if delay.is_zero() {
            self.cancel();
            self.set(target);
            return None;
        }

        if self.pending.map(|p| p.target) == Some(target) {
            return None;
        }

        self.generation += 1;
        self.pending = Some(Pending {
            generation: self.generation,
            target,
        });
        Some(Timer {
            generation: self.generation,
            delay,
        })
    }

    /// Completes the transition scheduled under `generation`. Returns
    /// `false` when that timer was superseded.
    pub fn elapse(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {
                self.pending = None;
                self.set(pending.target);
                true
            }
            _ => false,
        }
    }

    fn engaged(&self) -> bool {
        self.has_content
            && !self.dismissed
            && (self.over_trigger || self.over_content || self.focused)
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation += 1;
        }
    }

    fn set(&mut self, visibility: Visibility) {
        if self.visibility != visibility {
            tracing::trace!(?visibility, "tooltip transition");
        }
        self.visibility = visibility;
    }
}

impl Default for TooltipMachine {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}
