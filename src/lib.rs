//! Monthly refueling reports.
//!
//! A refueling file is parsed into [`record::RefuelRecord`]s, filtered by
//! fuel type and aggregated into twelve monthly buckets. The buckets carry the
//! extremes a chart needs to highlight its largest and smallest bars.

pub mod args;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod record;
pub mod stats;
