pub mod app;
pub mod factory;

#[allow(unused_imports)]
pub use app::*;
#[allow(unused_imports)]
pub use factory::*;
