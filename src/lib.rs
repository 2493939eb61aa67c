pub mod config;
pub mod error;
pub mod load;
pub mod pipeline;
pub mod transform;
pub mod write;
