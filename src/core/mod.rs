pub mod animator;
pub mod config;
pub mod error;
pub mod export;
pub mod mapping;
pub mod quadratic;
pub mod readout;
pub mod scene;
pub mod session;
pub mod surface;
pub mod target;
