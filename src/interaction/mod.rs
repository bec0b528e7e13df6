//! Interaction state for the portfolio page.
//!
//! [`InteractionController`] owns every piece of transient UI state for one
//! page view. The browser shell feeds it scroll, pointer, timer and click
//! signals; each handler runs synchronously and reports through [`Update`]
//! whether the view has to be recomputed.

pub mod pointer;
pub mod scope;
pub mod scroll;
pub mod toggles;
pub mod welcome;

pub use pointer::{PointerPosition, PointerTracker, TooltipAnchor, TorchPlacement};
pub use scope::{MountScope, SharedController};
pub use scroll::{ScrollTracker, SectionExtent, SectionId, FALLBACK_SECTION};
pub use toggles::{ContactModal, Theme, Tooltip};
pub use welcome::{WelcomeState, WelcomeTimer};

use crate::config::InteractionConfig;

/// Change notification returned by every handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Update {
    pub redraw: bool,
}

impl Update {
    pub const NONE: Self = Self { redraw: false };
    pub const REDRAW: Self = Self { redraw: true };

    fn when(changed: bool) -> Self {
        Self { redraw: changed }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct PointerOutcome {
    pub update: Update,
    /// Set only in dark mode; applied directly to the torch element.
    pub torch: Option<TorchPlacement>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Mounted,
    TornDown,
}

/// Snapshot of everything the page renders from.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionView {
    pub active_section: SectionId,
    pub theme: Theme,
    pub welcome_visible: bool,
    pub contact_open: bool,
    /// Present only in dark mode.
    pub torch: Option<TorchPlacement>,
    pub torch_size: i32,
    pub tooltip: Option<(String, TooltipAnchor)>,
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    lifecycle: Lifecycle,
    scroll: ScrollTracker,
    pointer: PointerTracker,
    welcome: WelcomeTimer,
    theme: Theme,
    contact: ContactModal,
    tooltip: Tooltip,
}

impl InteractionController {
    /// Builds the controller for a freshly mounted page and arms the
    /// welcome timer relative to `now_ms`.
    pub fn mount(config: &InteractionConfig, sections: Vec<SectionId>, now_ms: u64) -> Self {
        log::info!(
            "interaction mounted: {} sections, welcome in {}ms",
            sections.len(),
            config.welcome_delay_ms
        );

        Self {
            lifecycle: Lifecycle::Mounted,
            scroll: ScrollTracker::new(sections, config.lookahead_margin),
            pointer: PointerTracker::new(config.torch_size, config.tooltip_offset()),
            welcome: WelcomeTimer::arm(now_ms, config.welcome_delay_ms),
            theme: Theme::default(),
            contact: ContactModal::default(),
            tooltip: Tooltip::default(),
        }
    }

    /// Cancels pending work. Every handler is inert afterwards.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.lifecycle = Lifecycle::TornDown;
        if self.welcome.cancel() {
            log::debug!("welcome timer cancelled before firing");
        }
        log::info!("interaction torn down");
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn welcome_delay_ms(&self) -> u32 {
        self.welcome.delay_ms()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn on_scroll<F>(&mut self, offset: f64, measure: F) -> Update
    where
        F: FnMut(&SectionId) -> Option<SectionExtent>,
    {
        if !self.is_mounted() {
            return Update::NONE;
        }

        let changed = self.scroll.on_scroll(offset, measure);
        if changed {
            log::debug!("active section -> {}", self.scroll.active());
        }
        Update::when(changed)
    }

    /// The tooltip is anchored to the pointer, so a move only needs a
    /// re-render while a tooltip is showing.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) -> PointerOutcome {
        if !self.is_mounted() {
            return PointerOutcome {
                update: Update::NONE,
                torch: None,
            };
        }

        let torch = self.pointer.on_move(PointerPosition::new(x, y), self.theme);
        log::trace!("pointer at ({x}, {y})");

        PointerOutcome {
            update: Update::when(self.tooltip.is_visible()),
            torch,
        }
    }

    /// Host timer callback for the welcome delay.
    pub fn welcome_elapsed(&mut self) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        let fired = self.welcome.fire();
        Self::welcome_update(fired)
    }

    /// Clock-driven alternative to [`Self::welcome_elapsed`].
    pub fn poll_welcome(&mut self, now_ms: u64) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        let fired = self.welcome.poll(now_ms);
        Self::welcome_update(fired)
    }

    fn welcome_update(fired: bool) -> Update {
        if fired {
            log::info!("welcome overlay dismissed");
        }
        Update::when(fired)
    }

    pub fn toggle_theme(&mut self) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        self.theme = self.theme.toggled();
        log::info!("theme -> {}", self.theme.as_str());
        Update::REDRAW
    }

    pub fn open_contact(&mut self) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        let changed = self.contact.open();
        if changed {
            log::info!("contact modal opened");
        }
        Update::when(changed)
    }

    pub fn close_contact(&mut self) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        let changed = self.contact.close();
        if changed {
            log::info!("contact modal closed");
        }
        Update::when(changed)
    }

    pub fn hover_enter(&mut self, label: impl Into<String>) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        Update::when(self.tooltip.enter(label))
    }

    pub fn hover_leave(&mut self) -> Update {
        if !self.is_mounted() {
            return Update::NONE;
        }
        Update::when(self.tooltip.leave())
    }

    /// Resolves a navigation click to a known section. Scrolling there is
    /// left to the caller and the active section is not touched here.
    pub fn nav_target(&self, id: &str) -> Option<&SectionId> {
        let target = self.scroll.find(id);
        if target.is_none() {
            log::warn!("navigation to unknown section `{id}` ignored");
        }
        target
    }

    pub fn view(&self) -> InteractionView {
        InteractionView {
            active_section: self.scroll.active().clone(),
            theme: self.theme,
            welcome_visible: self.welcome.is_showing(),
            contact_open: self.contact.is_open(),
            torch: self.theme.is_dark().then(|| {
                TorchPlacement::centered_on(self.pointer.position(), self.pointer.torch_size())
            }),
            torch_size: self.pointer.torch_size(),
            tooltip: self
                .tooltip
                .text()
                .map(|text| (text.to_string(), self.pointer.tooltip_anchor())),
        }
    }
}
