pub mod host;
#[allow(clippy::module_inception)]
pub mod player;
pub mod scheduler;
pub mod state;
