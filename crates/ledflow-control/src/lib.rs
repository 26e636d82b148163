//! LedFlow Control - Art-Net LED strip control
//!
//! This crate converts per-light color data into DMX512 universe payloads
//! and delivers them to Art-Net nodes:
//! - **Frame packing**: width-aware packing of colors into 512-byte
//!   universe buffers with a persistent write cursor
//! - **Devices**: one configured strip (light count, first universe,
//!   channel order, host) bound to a transport
//! - **Registry**: name-keyed fan-out of one update to many devices
//! - **Art-Net output**: UDP OpDmx transport
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ledflow_control::{ArtNetOutput, ChannelOrder, Color, Device, DeviceConfig};
//!
//! # fn main() -> ledflow_control::Result<()> {
//! let config = DeviceConfig::new(500, "192.168.68.178").with_order(ChannelOrder::Grb);
//! let mut strip = Device::new(config, ArtNetOutput::new()?)?;
//!
//! let frame = vec![Color::rgb(8, 226, 97); 500];
//! strip.add_to_queue(&frame)?;
//! strip.send()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`dmx`] - frame packing, devices, registry, Art-Net output
//! - [`color`] - color value type
//! - [`error`] - error types

#![allow(missing_docs)]

/// Color value type
pub mod color;
/// DMX frame packing and output
pub mod dmx;
/// Error types
pub mod error;

// Re-exports
pub use color::{Channel, Color};
pub use dmx::{
    ArtNetOutput, ChannelOrder, Device, DeviceConfig, FrameBuffer, Registry, Transport,
    UNIVERSE_SIZE,
};
pub use error::{ControlError, Result};
