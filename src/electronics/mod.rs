// src/electronics/mod.rs
//! Preshower front-end electronics

pub mod traits;
pub mod types;
pub mod simulator;


pub use traits::*;
pub use types::*;
pub use simulator::{ElectronicsConfig, ElectronicsSim};
