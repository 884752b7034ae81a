pub mod depth;
pub mod score;

pub use depth::*;
pub use score::*;
