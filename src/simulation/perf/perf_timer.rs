/// Milliseconds on a monotonic-enough clock. Only differences are meaningful.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch feeding the `*_ms` fields of `PerfStats`
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
}

impl PerfTimer {
    /// `None` when metrics are off, so callers skip the clock entirely
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        enabled.then(|| PerfTimer { start_ms: now_ms() })
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        (now_ms() - self.start_ms).max(0.0)
    }

    /// Run `pass`, adding its wall time to `total_ms` when `enabled`
    pub(crate) fn measure<T>(enabled: bool, total_ms: &mut f64, pass: impl FnOnce() -> T) -> T {
        let timer = Self::start_if(enabled);
        let out = pass();
        if let Some(t) = timer {
            *total_ms += t.elapsed_ms();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_leaves_total_alone() {
        let mut total = 1.5;
        let out = PerfTimer::measure(false, &mut total, || 7);
        assert_eq!(out, 7);
        assert_eq!(total, 1.5);
        assert!(PerfTimer::start_if(false).is_none());
    }

    #[test]
    fn enabled_timer_accumulates() {
        let mut total = 0.0;
        let mut ran = 0;
        for _ in 0..3 {
            PerfTimer::measure(true, &mut total, || ran += 1);
        }
        assert_eq!(ran, 3);
        assert!(total >= 0.0 && total.is_finite());
    }
}
