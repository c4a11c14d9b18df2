use web_sys::js_sys::Date;
use web_sys::Event;

/// Leading-edge rate limiter: at most one admitted call per `delay_ms` window.
/// Calls inside the window are dropped, never deferred.
#[derive(Debug, Clone)]
pub struct Throttle {
    delay_ms: f64,
    last: Option<f64>,
}

impl Throttle {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: f64::from(delay_ms),
            last: None,
        }
    }

    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.delay_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }
}

/// Wraps an event callback in a [`Throttle`] driven by the browser clock.
pub fn throttled<F>(delay_ms: u32, mut callback: F) -> impl FnMut(Event)
where
    F: FnMut(Event) + 'static,
{
    let mut throttle = Throttle::new(delay_ms);
    move |event: Event| {
        if throttle.admit(Date::now()) {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_calls_inside_the_window() {
        let mut throttle = Throttle::new(100);
        let t = 5_000.0;
        assert!(throttle.admit(t));
        assert!(!throttle.admit(t + 50.0));
        assert!(throttle.admit(t + 100.0));
    }

    #[test]
    fn calls_past_the_window_both_fire() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.admit(0.0));
        assert!(throttle.admit(101.0));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut throttle = Throttle::new(250);
        assert!(throttle.admit(1_000.0));
        for offset in [10.0, 100.0, 200.0, 249.0] {
            assert!(!throttle.admit(1_000.0 + offset));
        }
        assert!(throttle.admit(1_250.0));
    }

    #[test]
    fn burst_after_idle_fires_immediately() {
        let mut throttle = Throttle::new(10);
        assert!(throttle.admit(0.0));
        assert!(throttle.admit(60_000.0));
        assert!(!throttle.admit(60_005.0));
    }
}
