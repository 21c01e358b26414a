pub mod stable;

pub use stable::*;
