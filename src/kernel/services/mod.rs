//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used by the kernel engines.
//! - `adapters`: OS specific implementations (process environment, settings/log files).

pub mod adapters;
pub mod ports;
