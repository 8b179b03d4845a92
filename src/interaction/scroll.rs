use serde::{Deserialize, Serialize};
use tracing::trace;

/// Tuning for scroll tracking on a sticky table container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTrackerConfig {
    /// Samples closer together than this are dropped (16 ms, about 60 fps).
    pub throttle_ms: u64,
    /// Idle time after the last event before scrolling is considered over.
    pub end_delay_ms: u64,
    /// Idle time used instead of `end_delay_ms` while scrolling fast.
    pub fast_end_delay_ms: u64,
    /// Vertical speed above which a scroll counts as fast.
    pub fast_speed_px_per_ms: f64,
    pub track_direction: bool,
    pub track_position: bool,
}

impl Default for ScrollTrackerConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 16,
            end_delay_ms: 150,
            fast_end_delay_ms: 300,
            fast_speed_px_per_ms: 2.0,
            track_direction: true,
            track_position: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    pub scrolling: bool,
    pub direction: Option<ScrollDirection>,
    pub position: ScrollPosition,
    pub is_scrolling_fast: bool,
}

/// What a single scroll event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollUpdate {
    /// The event started a new scroll gesture.
    pub started: bool,
    /// The event passed the throttle and updated position/direction/speed.
    /// Throttled events are kept and applied by `on_tick` when the window
    /// closes.
    pub sampled: bool,
}

/// Deterministic scroll state machine driven by host timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollTracker {
    config: ScrollTrackerConfig,
    state: ScrollState,
    last: Option<(ScrollPosition, u64)>,
    trailing: Option<ScrollPosition>,
    end_deadline_ms: Option<u64>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(config: ScrollTrackerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Feeds a scroll event with the container offsets at `now_ms`.
    pub fn on_scroll(&mut self, x: f64, y: f64, now_ms: u64) -> ScrollUpdate {
        let started = !self.state.scrolling;
        self.state.scrolling = true;

        let sampled = match self.last {
            Some((_, at)) => now_ms.saturating_sub(at) >= self.config.throttle_ms,
            None => true,
        };
        let position = ScrollPosition { x, y };
        if sampled {
            self.trailing = None;
            self.sample(position, now_ms);
        } else {
            self.trailing = Some(position);
        }

        let delay = if self.state.is_scrolling_fast {
            self.config.fast_end_delay_ms
        } else {
            self.config.end_delay_ms
        };
        self.end_deadline_ms = Some(now_ms.saturating_add(delay));

        ScrollUpdate { started, sampled }
    }

    /// Advances the timers. A throttled event is applied once its window
    /// closes, before the scroll may end. Returns `true` when this call ended
    /// a scroll.
    pub fn on_tick(&mut self, now_ms: u64) -> bool {
        self.flush_trailing(now_ms);

        match self.end_deadline_ms {
            Some(deadline) if self.state.scrolling && now_ms >= deadline => {
                self.state.scrolling = false;
                self.state.direction = None;
                self.state.is_scrolling_fast = false;
                self.end_deadline_ms = None;
                trace!(now_ms, "scroll ended");
                true
            }
            _ => false,
        }
    }

    fn flush_trailing(&mut self, now_ms: u64) {
        let Some((_, at)) = self.last else {
            return;
        };
        let window_end = at.saturating_add(self.config.throttle_ms);
        if now_ms < window_end {
            return;
        }
        if let Some(position) = self.trailing.take() {
            trace!(window_end, "applying trailing scroll sample");
            self.sample(position, window_end);
        }
    }

    fn sample(&mut self, position: ScrollPosition, now_ms: u64) {
        if self.config.track_position {
            self.state.position = position;
        }

        if let Some((previous, at)) = self.last {
            if self.config.track_direction && position.y != previous.y {
                self.state.direction = Some(if position.y > previous.y {
                    ScrollDirection::Down
                } else {
                    ScrollDirection::Up
                });
            }

            let elapsed_ms = now_ms.saturating_sub(at);
            if elapsed_ms > 0 {
                let speed = (position.y - previous.y).abs() / elapsed_ms as f64;
                self.state.is_scrolling_fast = speed > self.config.fast_speed_px_per_ms;
            }
        }

        self.last = Some((position, now_ms));
    }
}
