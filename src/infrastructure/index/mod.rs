pub mod linear;
pub mod snapshot;
