pub mod constants;
pub mod director;
pub mod input;
pub mod rings;
pub mod shots;
pub mod sim;
pub mod state;

pub use constants::*;
pub use director::*;
pub use input::*;
pub use rings::*;
pub use shots::*;
pub use state::*;
