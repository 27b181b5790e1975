//! Product-specific store logic: patches, stock fulfilment actions, and the
//! `Entity` binding that lets the resource actor own products.

mod actions;
mod dtos;
pub mod entity;

pub use actions::*;
pub use dtos::*;
