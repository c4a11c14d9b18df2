use log::debug;
use web_sys::{Event, ScrollBehavior, ScrollToOptions};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;

/// What an in-page `href` points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// A bare `#`, used as a link placeholder.
    Placeholder,
    /// A decoded element id.
    Fragment(String),
}

impl AnchorTarget {
    pub fn parse(href: &str) -> Option<Self> {
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            return Some(AnchorTarget::Placeholder);
        }
        let id = urlencoding::decode(fragment)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| fragment.to_string());
        Some(AnchorTarget::Fragment(id))
    }
}

/// Document-relative position to scroll to so the target clears a fixed header.
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    rect_top + scroll_y - header_offset
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let anchors = dom::query_all(&page.document, &config.selectors.anchors);
    debug!("smooth scrolling {} anchors", anchors.len());

    for anchor in anchors {
        let (window, document) = (page.window.clone(), page.document.clone());
        let offset = config.anchor_offset;
        let link = anchor.clone();
        bindings.listen(&anchor, "click", move |event: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = AnchorTarget::parse(&href) else {
                return;
            };
            event.prevent_default();

            let AnchorTarget::Fragment(id) = target else {
                return;
            };
            let Some(element) = document.get_element_by_id(&id) else {
                debug!("anchor target #{} not found", id);
                return;
            };
            let top = scroll_target(
                element.get_bounding_client_rect().top(),
                dom::scroll_y(&window),
                offset,
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_placeholder() {
        assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Placeholder));
    }

    #[test]
    fn fragment_is_decoded() {
        assert_eq!(
            AnchorTarget::parse("#news"),
            Some(AnchorTarget::Fragment("news".to_string()))
        );
        assert_eq!(
            AnchorTarget::parse("#a%20b"),
            Some(AnchorTarget::Fragment("a b".to_string()))
        );
    }

    #[test]
    fn undecodable_fragment_is_kept_verbatim() {
        assert_eq!(
            AnchorTarget::parse("#caf%E9"),
            Some(AnchorTarget::Fragment("caf%E9".to_string()))
        );
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(AnchorTarget::parse("/about"), None);
        assert_eq!(AnchorTarget::parse("https://example.com/#top"), None);
        assert_eq!(AnchorTarget::parse(""), None);
    }

    #[test]
    fn target_clears_header() {
        assert_eq!(scroll_target(450.0, 1200.0, 100.0), 1550.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 100.0), 800.0);
    }
}
