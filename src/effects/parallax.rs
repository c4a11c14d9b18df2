use log::error;

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::style::Style;
use crate::throttle::throttled;

/// Linear parallax, unclamped.
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let (window, document) = (page.window.clone(), page.document.clone());
    let selector = config.selectors.hero.clone();
    let factor = config.parallax_factor;

    bindings.listen(
        &page.window,
        "scroll",
        throttled(config.parallax_throttle_ms, move |_| {
            let Some(hero) = dom::query(&document, &selector) else {
                return;
            };
            let style = Style::new().transform(parallax_transform(dom::scroll_y(&window), factor));
            if let Err(err) = style.apply(&hero) {
                error!("parallax: {}", err);
            }
        }),
    )
}
