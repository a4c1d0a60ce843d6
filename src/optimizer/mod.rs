/// AstraPrep Gate Optimizer
///
/// Compacts a synthesized instruction stream without changing its order.
///
/// Current pass (single streaming scan):
///   1. Adjacent-duplicate fusion: `g·g → g` for field-identical neighbours
///
/// Non-adjacent repeats are left alone; the pass is not a global dedup.
pub mod fusion;

pub use fusion::{fuse, fuse_with_stats, FusionStats};
