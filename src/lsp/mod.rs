//! Language Server Protocol host for the batch language core.

pub mod convert;
pub mod error;
pub mod server;

pub use convert::PositionEncoding;
pub use error::{Result, ServerError};
pub use server::{serve, server_capabilities, Server};
