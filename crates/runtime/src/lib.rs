pub mod event_bus;
pub mod gate;
pub mod monitor;
pub mod profile;

pub use event_bus::*;
pub use gate::*;
pub use monitor::*;
pub use profile::*;
