use web_sys::HtmlElement;

use crate::error::Result;

pub const FADE_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";

/// An ordered set of inline style writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    props: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.props.push((property, value.into()));
        self
    }

    pub fn opacity(self, value: &str) -> Self {
        self.set("opacity", value)
    }

    pub fn transform(self, value: impl Into<String>) -> Self {
        self.set("transform", value)
    }

    pub fn transition(self, value: &str) -> Self {
        self.set("transition", value)
    }

    pub fn box_shadow(self, value: &str) -> Self {
        self.set("box-shadow", value)
    }

    pub fn display(self, value: &str) -> Self {
        self.set("display", value)
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.props
            .iter()
            .rev()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn apply(&self, element: &HtmlElement) -> Result<()> {
        let declaration = element.style();
        for (property, value) in &self.props {
            declaration.set_property(property, value)?;
        }
        Ok(())
    }
}

/// Starting point for entrance and reveal animations.
pub fn hidden_style() -> Style {
    Style::new()
        .opacity("0")
        .transform("translateY(30px)")
        .transition(FADE_TRANSITION)
}

pub fn revealed_style() -> Style {
    Style::new().opacity("1").transform("translateY(0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_writes_win_on_lookup() {
        let style = Style::new().opacity("0").opacity("1");
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.get("transform"), None);
    }

    #[test]
    fn hidden_and_revealed_pair_up() {
        let hidden = hidden_style();
        assert_eq!(hidden.get("opacity"), Some("0"));
        assert_eq!(hidden.get("transform"), Some("translateY(30px)"));
        assert_eq!(hidden.get("transition"), Some(FADE_TRANSITION));

        let shown = revealed_style();
        assert_eq!(shown.get("opacity"), Some("1"));
        assert_eq!(shown.get("transform"), Some("translateY(0)"));
        assert_eq!(shown.get("transition"), None);
    }
}
