// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, run_pipeline}.

mod copy;      // src/gui/actions/copy.rs
mod pipeline;  // src/gui/actions/pipeline.rs

pub use copy::copy;
pub use pipeline::run_pipeline;
