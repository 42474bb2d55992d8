// src/factor/mod.rs

pub mod factor;

// Re-export main types for convenience
pub use factor::{Factor, FactorKind};
