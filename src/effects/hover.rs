use log::{debug, error};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::style::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverEffect {
    pub selector: String,
    pub enter: Style,
    pub leave: Style,
}

pub fn effects(config: &PageConfig) -> Vec<HoverEffect> {
    let selectors = &config.selectors;
    vec![
        HoverEffect {
            selector: selectors.buttons.clone(),
            enter: Style::new().transform("translateY(-2px)"),
            leave: Style::new().transform("translateY(0)"),
        },
        HoverEffect {
            selector: selectors.news_cards.clone(),
            enter: Style::new()
                .transform("translateY(-4px)")
                .box_shadow("0 10px 25px rgba(0, 0, 0, 0.15)"),
            leave: Style::new()
                .transform("translateY(0)")
                .box_shadow("0 4px 6px rgba(0, 0, 0, 0.1)"),
        },
        HoverEffect {
            selector: selectors.card_items.clone(),
            enter: Style::new().transform("scale(1.02)"),
            leave: Style::new().transform("scale(1)"),
        },
    ]
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    for effect in effects(config) {
        let elements = dom::query_all(&page.document, &effect.selector);
        debug!("hover on {} x{}", effect.selector, elements.len());
        for element in elements {
            for (event, style) in [
                ("mouseenter", effect.enter.clone()),
                ("mouseleave", effect.leave.clone()),
            ] {
                let target = element.clone();
                bindings.listen(&element, event, move |_| {
                    if let Err(err) = style.apply(&target) {
                        error!("hover: {}", err);
                    }
                })?;
            }
        }
    }
    Ok(())
}
