use std::time::Duration;

use dm_core::config::TutorialConfig;
use dm_core::tutorial::ScrollPolicy;

const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(350);
const DEFAULT_SCROLL_SETTLE_DELAY: Duration = Duration::from_millis(400);
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(300);
const DEFAULT_MAX_MEASURE_RETRIES: u32 = 1;

/// Delays and thresholds used when measuring spotlight targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TutorialTimings {
    /// Wait before the first measurement so screen layout can finish.
    pub settle_delay: Duration,
    /// Wait after an auto-scroll before re-measuring.
    pub scroll_settle_delay: Duration,
    /// Wait before re-measuring an element that reported zero height.
    pub retry_delay: Duration,
    pub max_measure_retries: u32,
    pub scroll_policy: ScrollPolicy,
}

impl Default for TutorialTimings {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            scroll_settle_delay: DEFAULT_SCROLL_SETTLE_DELAY,
            retry_delay: DEFAULT_RETRY_DELAY,
            max_measure_retries: DEFAULT_MAX_MEASURE_RETRIES,
            scroll_policy: ScrollPolicy::default(),
        }
    }
}

fn millis_or(value: u64, default: Duration) -> Duration {
    if value == 0 {
        default
    } else {
        Duration::from_millis(value)
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        default
    }
}

impl TutorialTimings {
    /// Resolve timings from raw config, using defaults for unset (zero) values.
    pub fn from_config(config: &TutorialConfig) -> Self {
        let defaults = Self::default();
        let policy = defaults.scroll_policy;
        Self {
            settle_delay: millis_or(config.settle_delay_ms, defaults.settle_delay),
            scroll_settle_delay: millis_or(
                config.scroll_settle_delay_ms,
                defaults.scroll_settle_delay,
            ),
            retry_delay: millis_or(config.retry_delay_ms, defaults.retry_delay),
            max_measure_retries: if config.max_measure_retries == 0 {
                defaults.max_measure_retries
            } else {
                config.max_measure_retries
            },
            scroll_policy: ScrollPolicy {
                near_top: positive_or(config.near_top_threshold, policy.near_top),
                near_bottom: positive_or(config.near_bottom_threshold, policy.near_bottom),
                focus_fraction: if config.focus_fraction > 0.0 && config.focus_fraction < 1.0 {
                    config.focus_fraction
                } else {
                    policy.focus_fraction
                },
            },
        }
    }
}
