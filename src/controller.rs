use log::{debug, error, info, warn};
use web_sys::{Document, Element, Event, EventTarget, Window};
use yew::prelude::*;

use crate::config::{PageConfig, ROOT_ELEMENT_ID};
use crate::dom::{self, Listener, TimerSet};
use crate::effects::{anchors, header, hero, hover, loading, nav, parallax, reveal, year};
use crate::error::{FxError, Result};

/// The browser globals every binding reads from.
pub struct Page {
    pub window: Window,
    pub document: Document,
}

impl Page {
    pub fn current() -> Result<Self> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        Ok(Self { window, document })
    }
}

/// Everything one mount attached to the page. Dropping it detaches all of it.
#[derive(Default)]
pub struct Bindings {
    listeners: Vec<Listener>,
    observers: Vec<reveal::Observer>,
    timers: TimerSet,
}

impl Bindings {
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, callback: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        self.listeners.push(Listener::new(target, event, callback)?);
        Ok(())
    }

    pub fn keep(&mut self, listener: Option<Listener>) {
        self.listeners.extend(listener);
    }

    pub fn keep_observer(&mut self, observer: reveal::Observer) {
        self.observers.push(observer);
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.timers.cancel_all();
        debug!(
            "released {} listeners and {} observers",
            self.listeners.len(),
            self.observers.len()
        );
    }
}

type Binder = fn(&Page, &PageConfig, &mut Bindings) -> Result<()>;

const FEATURES: [(&str, Binder); 9] = [
    ("sticky header", header::bind),
    ("mobile nav", nav::bind),
    ("smooth anchors", anchors::bind),
    ("hero entrance", hero::bind),
    ("scroll reveal", reveal::bind),
    ("hover", hover::bind),
    ("loading screen", loading::bind),
    ("parallax", parallax::bind),
    ("copyright year", year::bind),
];

/// Binds every feature. A feature that fails is logged and skipped so the
/// rest still bind.
pub fn mount(config: &PageConfig) -> Result<Bindings> {
    let page = Page::current()?;
    let mut bindings = Bindings::default();
    for (name, bind) in FEATURES {
        if let Err(err) = bind(&page, config, &mut bindings) {
            error!("{} not bound: {}", name, err);
        }
    }
    info!("page effects bound ({} listeners)", bindings.listener_count());
    Ok(bindings)
}

#[derive(Properties, PartialEq)]
pub struct PageEffectsProps {
    pub config: PageConfig,
}

/// Renders nothing; owns the page bindings for as long as it is mounted.
#[function_component(PageEffects)]
pub fn page_effects(props: &PageEffectsProps) -> Html {
    use_effect_with_deps(
        |config: &PageConfig| {
            let bindings = match mount(config) {
                Ok(bindings) => Some(bindings),
                Err(err) => {
                    error!("page effects failed to mount: {}", err);
                    None
                }
            };
            move || drop(bindings)
        },
        props.config.clone(),
    );

    html! {}
}

fn mount_root(document: &Document) -> Result<Element> {
    if let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) {
        return Ok(root);
    }
    let body = document.body().ok_or(FxError::NoBody)?;
    let root = document.create_element("div")?;
    root.set_id(ROOT_ELEMENT_ID);
    root.set_attribute("hidden", "")?;
    body.append_child(&root)?;
    Ok(root)
}

/// Reads the page config and mounts [`PageEffects`].
pub fn start() -> Result<()> {
    let page = Page::current()?;
    let config = PageConfig::from_document(&page.document).unwrap_or_else(|err| {
        warn!("{}, using defaults", err);
        PageConfig::default()
    });
    let root = mount_root(&page.document)?;
    yew::Renderer::<PageEffects>::with_root_and_props(root, PageEffectsProps { config }).render();
    Ok(())
}
