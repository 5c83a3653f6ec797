//! Monte-Carlo significance estimation for motif-match counts
//!
//! given a genomic window and an observed number of motif
//! matches, build a null distribution of match counts over
//! randomized sequences of matching composition and turn the
//! observation into an empirical p-value, plus a quantile table
//! for cross-checking an analytic p-value series.

pub mod commands;
pub mod dist;
pub mod error;
pub mod profile;
pub mod scanner;
pub mod seq;
pub mod sim;
pub mod stats;
pub mod utils;
