use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;
use crate::style::{hidden_style, revealed_style};

pub fn should_reveal(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Picks the entries of one observer batch to reveal, with their delay.
/// Entries are `(is_intersecting, intersection_ratio)`; the stagger uses each
/// entry's position in the batch.
pub fn plan(entries: &[(bool, f64)], threshold: f64, step_ms: u32) -> Vec<(usize, u32)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, (intersecting, ratio))| should_reveal(*intersecting, *ratio, threshold))
        .map(|(index, _)| (index, stagger_delay(index, step_ms)))
        .collect()
}

/// Keeps the observer callback alive; disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let targets = dom::query_all(&page.document, &config.selectors.reveal);
    if targets.is_empty() {
        debug!("nothing to reveal");
        return Ok(());
    }
    for target in &targets {
        hidden_style().apply(target)?;
    }

    let timers = bindings.timers().handle();
    let threshold = config.reveal_threshold;
    let step_ms = config.reveal_stagger_ms;
    let callback = Closure::wrap(Box::new(move |batch: Array, observer: IntersectionObserver| {
        let entries: Vec<IntersectionObserverEntry> = batch
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        let states: Vec<(bool, f64)> = entries
            .iter()
            .map(|entry| (entry.is_intersecting(), entry.intersection_ratio()))
            .collect();

        for (index, delay) in plan(&states, threshold, step_ms) {
            let Some(entry) = entries.get(index) else {
                continue;
            };
            let target = entry.target();
            observer.unobserve(&target);
            let Ok(element) = target.dyn_into::<HtmlElement>() else {
                continue;
            };
            timers.schedule(delay, move || {
                if let Err(err) = revealed_style().apply(&element) {
                    error!("reveal: {}", err);
                }
            });
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(&config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for target in &targets {
        observer.observe(target);
    }
    debug!("observing {} reveal targets", targets.len());

    bindings.keep_observer(Observer {
        observer,
        _callback: callback,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_never_reveals() {
        assert!(!should_reveal(true, 0.0, 0.1));
        assert!(!should_reveal(true, 0.09, 0.1));
        assert!(!should_reveal(false, 0.5, 0.1));
        assert!(should_reveal(true, 0.1, 0.1));
        assert!(should_reveal(true, 1.0, 0.1));
    }

    #[test]
    fn later_entries_wait_longer() {
        let batch = [(true, 0.4), (true, 0.2), (false, 0.0), (true, 1.0)];
        assert_eq!(plan(&batch, 0.1, 100), vec![(0, 0), (1, 100), (3, 300)]);
    }

    #[test]
    fn sliver_entries_are_skipped() {
        let batch = [(true, 0.05), (true, 0.3)];
        assert_eq!(plan(&batch, 0.1, 100), vec![(1, 100)]);
    }

    #[test]
    fn stagger_saturates() {
        assert_eq!(stagger_delay(2, 100), 200);
        assert_eq!(stagger_delay(usize::MAX, 100), u32::MAX);
    }
}
