//! Pricing engines
//!
//! Stateful engines that derive intermediates once per specification and
//! answer premium/Greek queries from them.

pub mod engine;

pub use engine::*;
