pub mod assets;
pub mod tables;
