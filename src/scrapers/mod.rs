//! HTML extraction helpers for the news tool.
//!
//! The scraping here is best-effort by design: an ordered cascade of
//! selectors is tried against each fetched page, candidate strings are run
//! through noise filters, and whatever survives is bucketed by script. All
//! functions operate on plain HTML strings so they are testable without a
//! network.

pub mod skku;
