pub mod quickstart;

pub use quickstart::Quickstart;
