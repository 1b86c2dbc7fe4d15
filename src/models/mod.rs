pub mod notebook;

pub use notebook::*;
