use std::fmt;

use tracing::trace;

type ChangeListener = Box<dyn FnMut(&[String]) + Send>;

/// Set of legend items the user switched off.
///
/// The chart's legend `selected` map is the complement of this set.
#[derive(Default)]
pub struct LegendFilter {
    disabled: Vec<String>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for LegendFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegendFilter")
            .field("disabled", &self.disabled)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

impl LegendFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback invoked after every click and reset.
    #[must_use]
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&[String]) + Send + 'static,
    {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Applies a legend click. `disabled` is the state the item moves to.
    pub fn handle_click(&mut self, name: &str, disabled: bool) {
        if disabled {
            if !self.is_disabled(name) {
                self.disabled.push(name.to_owned());
            }
        } else {
            self.disabled.retain(|item| item != name);
        }
        trace!(name, disabled, disabled_count = self.disabled.len(), "legend click");
        self.notify();
    }

    /// Flips an item between enabled and disabled.
    pub fn toggle(&mut self, name: &str) {
        let disabled = !self.is_disabled(name);
        self.handle_click(name, disabled);
    }

    /// Re-enables every item, e.g. after the chart data changed.
    pub fn reset(&mut self) {
        self.disabled.clear();
        self.notify();
    }

    #[must_use]
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|item| item == name)
    }

    #[must_use]
    pub fn disabled_items(&self) -> &[String] {
        &self.disabled
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.disabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn click_adds_and_removes_without_duplicates() {
        let mut filter = LegendFilter::new();
        filter.handle_click("a", true);
        filter.handle_click("a", true);
        filter.handle_click("b", true);
        assert_eq!(filter.disabled_items(), ["a", "b"]);

        filter.handle_click("a", false);
        assert!(!filter.is_disabled("a"));
        assert!(filter.is_disabled("b"));
    }

    #[test]
    fn listener_runs_on_click_and_reset() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut filter = LegendFilter::new().with_listener(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        filter.toggle("a");
        filter.toggle("a");
        filter.reset();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(filter.disabled_items().is_empty());
    }
}
