pub mod mask;
pub mod options;
pub mod segments;
pub mod utils;

pub use mask::*;
pub use options::*;
pub use segments::*;
pub use utils::*;
