//! CLI command handlers. Each command is in its own file for clarity.

mod cascade;
mod completions;
mod compose;
mod inspect;
mod network;
mod params;
mod validate;

pub use cascade::run_cascade;
pub use completions::run_completions;
pub use compose::run_compose;
pub use inspect::run_inspect;
pub use network::{network_source, run_network_set, run_network_show};
pub use params::run_params;
pub use validate::run_validate;
