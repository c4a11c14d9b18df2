use chrono::{DateTime, Datelike, Local, TimeZone};
use log::debug;

use crate::config::PageConfig;
use crate::controller::{Bindings, Page};
use crate::dom;
use crate::error::Result;

pub fn year_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    format!("{:04}", now.year())
}

pub fn bind(page: &Page, config: &PageConfig, bindings: &mut Bindings) -> Result<()> {
    let document = page.document.clone();
    let selector = config.selectors.current_year.clone();
    let listener = dom::on_dom_ready(&page.document, move || {
        match dom::query(&document, &selector) {
            Some(element) => element.set_text_content(Some(&year_text(&Local::now()))),
            None => debug!("no {}, skipping copyright year", selector),
        }
    })?;
    bindings.keep(listener);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn four_digit_year() {
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(year_text(&now), "2026");
    }

    #[test]
    fn year_tracks_the_clock() {
        let now = Local::now();
        assert_eq!(year_text(&now), now.format("%Y").to_string());
    }
}
