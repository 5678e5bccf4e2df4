pub mod version;
pub mod chapter;

pub use version::*;
pub use chapter::*;
