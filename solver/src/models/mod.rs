pub mod observation;
pub mod solution;
pub mod state;

pub use observation::*;
pub use solution::*;
pub use state::*;
