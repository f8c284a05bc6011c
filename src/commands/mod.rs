//! Command implementations
//!
//! Each CLI subcommand has its own module; the binary wires them to clap.

mod benchmark;
mod play;
mod solve;

pub use benchmark::{BenchmarkResult, TRY_LIMIT, run_benchmark};
pub use play::run_player;
pub use solve::run_solver;
