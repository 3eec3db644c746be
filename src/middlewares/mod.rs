pub mod cors;

pub use cors::{cors, cors_headers};
