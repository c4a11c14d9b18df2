use log::{debug, error};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::throttle::throttled;

pub const SCROLLED_CLASS: &str = "scrolled";

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let Some(header) = dom::query(&page.document, &config.selectors.header) else {
        debug!("no header, skipping sticky header");
        return Ok(());
    };

    let window = page.window.clone();
    let threshold = config.header_threshold;
    let update = move || {
        let scrolled = is_scrolled(dom::scroll_y(&window), threshold);
        if let Err(err) = dom::set_class(&header, SCROLLED_CLASS, scrolled) {
            error!("sticky header: {}", err);
        }
    };

    // Initial state, before any scroll happens
    update();

    bindings.listen(
        &page.window,
        "scroll",
        throttled(config.header_throttle_ms, move |_| update()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_threshold() {
        assert!(!is_scrolled(0.0, 10.0));
        assert!(!is_scrolled(10.0, 10.0));
        assert!(is_scrolled(10.5, 10.0));
        assert!(is_scrolled(800.0, 10.0));
    }

    #[test]
    fn scrolling_back_up_clears_it() {
        let offsets = [0.0, 50.0, 300.0, 8.0];
        let last = offsets.iter().map(|y| is_scrolled(*y, 10.0)).last();
        assert_eq!(last, Some(false));
    }
}
