//! Scroll-reactive header visibility policy
//!
//! Two thresholds, direction-and-speed sensitive: the header never hides
//! near the top of the page, tolerates slow or jittery scrolling (trackpad
//! drift), and only reclaims vertical space during a deliberate fast
//! downward scroll well past the fold. Each transition is a pure function
//! of the previous sample and the new offset; no history beyond that.

/// Thresholds for the visibility policy, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPolicy {
    /// T1: past this offset the header switches to its compact presentation.
    pub reveal_threshold: f64,
    /// T2: fast downward scrolling only hides the header past this offset.
    /// Must be greater than `reveal_threshold`.
    pub hide_threshold: f64,
    /// D: per-frame delta magnitude below which scrolling counts as slow.
    pub min_delta: f64,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self {
            reveal_threshold: 150.0,
            hide_threshold: 200.0,
            min_delta: 2.0,
        }
    }
}

/// One throttled scroll sample and the booleans derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    /// Whether to render the compact/fixed header presentation.
    pub past_threshold: bool,
    /// Whether the header is shown at all.
    pub header_visible: bool,
}

impl ScrollSample {
    /// State at page load: top of page, expanded header, visible.
    pub fn initial() -> ScrollSample {
        ScrollSample {
            offset: 0.0,
            past_threshold: false,
            header_visible: true,
        }
    }

    /// Fold in the next (rAF-throttled) scroll offset.
    pub fn next(&self, offset: f64, policy: &ScrollPolicy) -> ScrollSample {
        let past_threshold = offset > policy.reveal_threshold;

        let header_visible = if offset <= policy.reveal_threshold {
            // Always visible near the top.
            true
        } else {
            let delta = offset - self.offset;
            if delta < 0.0 {
                // Scrolling up reveals immediately.
                true
            } else if delta <= policy.min_delta {
                // Slow drift: keep whatever the header was doing.
                self.header_visible
            } else if offset > policy.hide_threshold {
                // Deliberate fast downward scroll past T2.
                false
            } else {
                self.header_visible
            }
        };

        ScrollSample {
            offset,
            past_threshold,
            header_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(offsets: &[f64]) -> Vec<ScrollSample> {
        let policy = ScrollPolicy::default();
        let mut sample = ScrollSample::initial();
        offsets
            .iter()
            .map(|&offset| {
                sample = sample.next(offset, &policy);
                sample
            })
            .collect()
    }

    #[test]
    fn test_fast_downward_scroll_sequence() {
        let samples = run(&[0.0, 60.0, 180.0, 260.0]);

        let past: Vec<bool> = samples.iter().map(|s| s.past_threshold).collect();
        let visible: Vec<bool> = samples.iter().map(|s| s.header_visible).collect();

        assert_eq!(past, [false, false, true, true]);
        assert_eq!(visible, [true, true, true, false]);
    }

    #[test]
    fn test_always_visible_near_top() {
        for sample in run(&[10.0, 150.0, 40.0, 0.0]) {
            assert!(sample.header_visible);
            assert!(!sample.past_threshold);
        }
    }

    #[test]
    fn test_scrolling_up_reveals() {
        let samples = run(&[0.0, 300.0, 600.0, 580.0]);
        assert!(!samples[2].header_visible);
        // One upward frame brings the header back, even while past T1
        assert!(samples[3].header_visible);
        assert!(samples[3].past_threshold);
    }

    #[test]
    fn test_slow_drift_never_hides() {
        // 1px per frame downward, from the top to well past both
        // thresholds: every delta stays below D, so the header stays up
        let offsets: Vec<f64> = (0..650).map(|i| i as f64).collect();
        for sample in run(&offsets) {
            assert!(sample.header_visible, "hidden at offset {}", sample.offset);
        }
    }

    #[test]
    fn test_fast_scroll_between_thresholds_keeps_state() {
        // Fast downward but still between T1 and T2: no hide yet
        let samples = run(&[0.0, 160.0, 190.0]);
        assert!(samples[2].past_threshold);
        assert!(samples[2].header_visible);
    }

    #[test]
    fn test_hidden_persists_during_slow_drift() {
        // Hide fast past T2, then drift slowly downward: stays hidden
        let samples = run(&[0.0, 300.0, 600.0, 601.0, 602.0]);
        assert!(!samples[2].header_visible);
        assert!(!samples[3].header_visible);
        assert!(!samples[4].header_visible);
    }

    #[test]
    fn test_transitions_depend_only_on_previous_sample() {
        let policy = ScrollPolicy::default();
        let a = ScrollSample::initial().next(300.0, &policy);
        let b = ScrollSample {
            offset: 300.0,
            past_threshold: true,
            header_visible: a.header_visible,
        };
        // Same (previous, next) pair, same result, regardless of how the
        // previous sample was reached
        assert_eq!(a.next(500.0, &policy), b.next(500.0, &policy));
    }
}
