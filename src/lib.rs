pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod style;
pub mod throttle;
pub mod effects {
    pub mod anchors;
    pub mod header;
    pub mod hero;
    pub mod hover;
    pub mod loading;
    pub mod nav;
    pub mod parallax;
    pub mod reveal;
    pub mod year;
}

pub use config::PageConfig;
pub use controller::{mount, start, Bindings, PageEffects};
pub use error::FxError;
