use log::{debug, error};
use web_sys::Element;

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::throttle::throttled;

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";

/// `open` on the navigation panel, `active` on the toggle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
    pub active: bool,
}

impl MenuState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Flips each class on its own, like `classList.toggle` on both nodes.
    pub fn toggled(self) -> Self {
        Self {
            open: !self.open,
            active: !self.active,
        }
    }

    fn read(nav: &Element, toggle: &Element) -> Self {
        Self {
            open: dom::has_class(nav, OPEN_CLASS),
            active: dom::has_class(toggle, ACTIVE_CLASS),
        }
    }

    fn write(self, nav: &Element, toggle: &Element) -> Result<()> {
        dom::set_class(nav, OPEN_CLASS, self.open)?;
        dom::set_class(toggle, ACTIVE_CLASS, self.active)
    }
}

pub fn closes_on_link_click(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

pub fn closes_on_resize(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width > breakpoint
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let selectors = &config.selectors;
    let (Some(toggle), Some(nav)) = (
        dom::query(&page.document, &selectors.menu_toggle),
        dom::query(&page.document, &selectors.nav_links),
    ) else {
        debug!("menu toggle or nav links missing, skipping mobile nav");
        return Ok(());
    };
    let breakpoint = config.nav_breakpoint;

    {
        let (nav, button) = (nav.clone(), toggle.clone());
        bindings.listen(&toggle, "click", move |_| {
            let next = MenuState::read(&nav, &button).toggled();
            if let Err(err) = next.write(&nav, &button) {
                error!("menu toggle: {}", err);
            }
        })?;
    }

    let links = dom::query_all_in(&nav, "a");
    debug!("closing mobile nav from {} links", links.len());
    for link in links {
        let (window, nav, toggle) = (page.window.clone(), nav.clone(), toggle.clone());
        bindings.listen(&link, "click", move |_| {
            if closes_on_link_click(dom::viewport_width(&window), breakpoint) {
                if let Err(err) = MenuState::closed().write(&nav, &toggle) {
                    error!("menu close: {}", err);
                }
            }
        })?;
    }

    let window = page.window.clone();
    bindings.listen(
        &page.window,
        "resize",
        throttled(config.resize_throttle_ms, move |_| {
            if closes_on_resize(dom::viewport_width(&window), breakpoint) {
                if let Err(err) = MenuState::closed().write(&nav, &toggle) {
                    error!("menu close on resize: {}", err);
                }
            }
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_toggles_restore_state() {
        let start = MenuState::closed();
        let mut state = start;
        for _ in 0..4 {
            state = state.toggled();
        }
        assert_eq!(state, start);
    }

    #[test]
    fn odd_toggles_flip_state() {
        let start = MenuState {
            open: true,
            active: true,
        };
        let state = start.toggled().toggled().toggled();
        assert_eq!(
            state,
            MenuState {
                open: false,
                active: false
            }
        );
    }

    #[test]
    fn toggle_keeps_classes_independent() {
        let skewed = MenuState {
            open: true,
            active: false,
        };
        assert_eq!(
            skewed.toggled(),
            MenuState {
                open: false,
                active: true
            }
        );
    }

    #[test]
    fn link_click_closes_only_at_or_below_breakpoint() {
        assert!(closes_on_link_click(375.0, 768.0));
        assert!(closes_on_link_click(768.0, 768.0));
        assert!(!closes_on_link_click(769.0, 768.0));
    }

    #[test]
    fn resize_past_breakpoint_always_closes() {
        assert!(!closes_on_resize(768.0, 768.0));
        assert!(closes_on_resize(1024.0, 768.0));
        for state in [
            MenuState::closed(),
            MenuState::closed().toggled(),
            MenuState {
                open: true,
                active: false,
            },
        ] {
            let after = if closes_on_resize(1280.0, 768.0) {
                MenuState::closed()
            } else {
                state
            };
            assert_eq!(after, MenuState::closed());
        }
    }
}
