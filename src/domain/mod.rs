//! Domain entities and value objects shared by the repository and service layers.

pub mod category;
pub mod types;
pub mod video;
