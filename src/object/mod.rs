//! Runtime value model.
//!
//! The values an evaluator produces from the tree. Every variant reports a
//! type tag and a display string; new variants implement the same trait.
//!
//! - object: the `Object` trait, its type tag and the shared wrapper
//! - values: the value variants and hash keys
//! - environment: the scope a function value captures

pub mod environment;
pub mod object;
pub mod values;
