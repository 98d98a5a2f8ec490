//! Glider weight-and-balance engine.
//!
//! The calculation core lives in [`balance`] and works on the immutable [`model::Glider`]
//! snapshot. [`report`] turns its results into operator summaries, [`store`] loads and edits
//! the glider records and [`audit`] records who edited them.
#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub use chrono;

mod logger;
pub mod audit;
pub mod balance;
pub mod common;
pub mod config;
pub mod model;
pub mod report;
pub mod store;
