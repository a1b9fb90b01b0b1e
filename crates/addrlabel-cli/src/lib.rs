//! Library side of the `addrlabel` command: logging setup and the run
//! pipeline, kept out of `main.rs` so they can be tested.

pub mod logging;
pub mod pipeline;
pub mod types;
