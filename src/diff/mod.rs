//! Differencer - two-pass tree comparison

mod engine;

pub use engine::compare_trees;
