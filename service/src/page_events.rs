use core_types::events::PageEvent;

use crate::listeners::{ListenerRegistry, Subscription};

const LIVE_TOGGLE_KEY: char = 'l';

/// A popup that closes when the user clicks anywhere else.
///
/// It only listens while open: opening subscribes, closing drops the subscription.
#[derive(Debug, Default)]
pub struct Dropdown {
    subscription: Option<Subscription<PageEvent>>,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn open(&mut self, registry: &ListenerRegistry<PageEvent>) {
        if self.subscription.is_none() {
            self.subscription = Some(registry.subscribe());
        }
    }

    pub fn close(&mut self) {
        self.subscription = None;
    }

    pub fn toggle(&mut self, registry: &ListenerRegistry<PageEvent>) {
        if self.is_open() {
            self.close();
        } else {
            self.open(registry);
        }
    }

    /// Handles pending events, returns whether the dropdown is still open.
    pub fn pump(&mut self) -> bool {
        let clicked_outside = self.subscription.as_ref().is_some_and(|subscription| {
            subscription
                .drain()
                .iter()
                .any(|event| *event == PageEvent::ClickOutside)
        });
        if clicked_outside {
            self.close();
        }
        self.is_open()
    }
}

/// Site header: search popup, navigation menu and the live banner.
#[derive(Debug)]
pub struct HeaderState {
    search: Dropdown,
    menu_open: bool,
    live_active: bool,
    show_banner: bool,
    shortcuts: Subscription<PageEvent>,
}

impl HeaderState {
    /// Registers the keyboard shortcut listener for as long as the header lives.
    pub fn attach(registry: &ListenerRegistry<PageEvent>) -> Self {
        Self {
            search: Dropdown::default(),
            menu_open: false,
            live_active: false,
            show_banner: true,
            shortcuts: registry.subscribe(),
        }
    }

    pub fn is_search_open(&self) -> bool {
        self.search.is_open()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_banner_visible(&self) -> bool {
        self.live_active && self.show_banner
    }

    pub fn toggle_search(&mut self, registry: &ListenerRegistry<PageEvent>) {
        self.search.toggle(registry);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn dismiss_banner(&mut self) {
        self.show_banner = false;
    }

    pub fn pump(&mut self) {
        self.search.pump();
        for event in self.shortcuts.drain() {
            if let PageEvent::KeyPress { key, alt: true } = event
                && key.to_ascii_lowercase() == LIVE_TOGGLE_KEY
            {
                self.live_active = !self.live_active;
                self.show_banner = true;
                tracing::debug!(live = self.live_active, "Live banner toggled");
            }
        }
    }
}
