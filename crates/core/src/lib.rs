//! `billcraft-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod money;

pub use money::{MONEY_TOLERANCE, apply_percent, money_eq, round_display};
