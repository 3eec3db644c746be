pub mod category;
pub mod project;

pub use category::*;
pub use project::*;
