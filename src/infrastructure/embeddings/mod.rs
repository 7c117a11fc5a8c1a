pub mod hashing;
pub mod noop;
pub mod openai;
mod remote;
pub mod voyage;
