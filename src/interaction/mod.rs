//! UI state machines that sit next to the chart and table.
//!
//! Everything here is driven by explicit host events and timestamps so it can
//! be exercised without a DOM.

mod legend_filter;
mod scroll;

pub use legend_filter::LegendFilter;
pub use scroll::{
    ScrollDirection, ScrollPosition, ScrollState, ScrollTracker, ScrollTrackerConfig,
    ScrollUpdate,
};
