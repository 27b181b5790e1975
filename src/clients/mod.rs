//! Typed client handles over the resource actor.

#[macro_use]
mod macros;

pub mod order_client;
pub mod product_client;

pub use order_client::*;
pub use product_client::*;
