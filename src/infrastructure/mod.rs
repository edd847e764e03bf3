pub mod assets;
pub mod audio;
pub mod compute;
pub mod inference;
pub mod observability;
pub mod persistence;
