//! Search Algorithms.

pub mod threshold_search;
