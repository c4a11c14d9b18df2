use log::{debug, error};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::style::{hidden_style, revealed_style};

/// Selector and fade-in delay for each hero text element, in firing order.
pub fn hero_schedule(config: &PageConfig) -> [(&str, u32); 2] {
    [
        (config.selectors.hero_title.as_str(), config.hero_title_delay_ms),
        (
            config.selectors.hero_subtitle.as_str(),
            config.hero_subtitle_delay_ms,
        ),
    ]
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    for (selector, delay) in hero_schedule(config) {
        let Some(element) = dom::query(&page.document, selector) else {
            debug!("no {}, skipping its entrance", selector);
            continue;
        };
        hidden_style().apply(&element)?;
        bindings.timers().schedule(delay, move || {
            if let Err(err) = revealed_style().apply(&element) {
                error!("hero entrance: {}", err);
            }
        });
    }
    Ok(())
}
