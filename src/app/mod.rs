pub mod session;

pub use session::{OutputMode, SearchSession};
