pub mod config;
pub mod session;
pub mod sink;

pub use config::*;
pub use session::*;
pub use sink::*;
