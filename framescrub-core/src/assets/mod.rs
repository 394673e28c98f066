pub mod decode;
pub mod frame_set;
pub mod loader;
pub mod naming;
pub mod placeholder;
