use log::{debug, error, warn};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::style::Style;

pub const HIDDEN_CLASS: &str = "hidden";

/// How the page makes its entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingPlan {
    /// After window load: wait, add `hidden` to the splash, wait again, then
    /// take it out of layout.
    Splash {
        hide_after_ms: u32,
        remove_after_ms: u32,
    },
    /// No splash: fade the body in shortly after DOM-ready.
    BodyFade { reveal_after_ms: u32 },
}

impl LoadingPlan {
    pub fn for_page(has_splash: bool, config: &PageConfig) -> Self {
        if has_splash {
            LoadingPlan::Splash {
                hide_after_ms: config.loading_hide_delay_ms,
                remove_after_ms: config.loading_remove_delay_ms,
            }
        } else {
            LoadingPlan::BodyFade {
                reveal_after_ms: config.body_fade_delay_ms,
            }
        }
    }
}

pub fn splash_removed() -> Style {
    Style::new().display("none")
}

pub fn body_fade_start() -> Style {
    Style::new()
        .opacity("0")
        .transition("opacity 0.6s ease")
}

pub fn body_fade_end() -> Style {
    Style::new().opacity("1")
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let splash = dom::query(&page.document, &config.selectors.loading_screen);
    let timers = bindings.timers().handle();

    match (LoadingPlan::for_page(splash.is_some(), config), splash) {
        (
            LoadingPlan::Splash {
                hide_after_ms,
                remove_after_ms,
            },
            Some(splash),
        ) => {
            debug!("splash screen hides {}ms after load", hide_after_ms);
            let listener = dom::on_load(&page.window, &page.document, move || {
                let removal = timers.clone();
                timers.schedule(hide_after_ms, move || {
                    if let Err(err) = dom::set_class(&splash, HIDDEN_CLASS, true) {
                        error!("loading screen: {}", err);
                        return;
                    }
                    removal.schedule(remove_after_ms, move || {
                        if let Err(err) = splash_removed().apply(&splash) {
                            error!("loading screen: {}", err);
                        }
                    });
                });
            })?;
            bindings.keep(listener);
        }
        (LoadingPlan::BodyFade { reveal_after_ms }, _) => {
            let document = page.document.clone();
            let listener = dom::on_dom_ready(&page.document, move || {
                let Some(body) = document.body() else {
                    warn!("no body to fade in");
                    return;
                };
                if let Err(err) = body_fade_start().apply(&body) {
                    error!("body fade: {}", err);
                    return;
                }
                timers.schedule(reveal_after_ms, move || {
                    if let Err(err) = body_fade_end().apply(&body) {
                        error!("body fade: {}", err);
                    }
                });
            })?;
            bindings.keep(listener);
        }
        (LoadingPlan::Splash { .. }, None) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_hides_then_leaves_layout() {
        let plan = LoadingPlan::for_page(true, &PageConfig::default());
        match plan {
            LoadingPlan::Splash {
                hide_after_ms,
                remove_after_ms,
            } => {
                assert_eq!(hide_after_ms, 1500);
                assert_eq!(hide_after_ms + remove_after_ms, 2000);
            }
            other => panic!("expected splash plan, got {:?}", other),
        }
        assert_eq!(splash_removed().get("display"), Some("none"));
    }

    #[test]
    fn without_splash_body_fades_in() {
        let plan = LoadingPlan::for_page(false, &PageConfig::default());
        assert_eq!(plan, LoadingPlan::BodyFade { reveal_after_ms: 100 });
        assert_eq!(body_fade_start().get("opacity"), Some("0"));
        assert_eq!(
            body_fade_start().get("transition"),
            Some("opacity 0.6s ease")
        );
        assert_eq!(body_fade_end().get("opacity"), Some("1"));
    }
}
