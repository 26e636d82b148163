//! DMX frame packing and Art-Net output
//!
//! This module turns per-light colors into DMX512 universe payloads and
//! hands them to a [`Transport`].
//!
//! ## Frame packing
//!
//! A [`FrameBuffer`] owns the 512-byte universe buffers for one strip and
//! a write cursor. Colors are packed at the configured [`ChannelOrder`]'s
//! slot width; a light never straddles a universe boundary, so when fewer
//! than `width` slots remain the cursor rolls to the next universe.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ledflow_control::dmx::{ArtNetOutput, ChannelOrder, Device, DeviceConfig};
//! use ledflow_control::Color;
//!
//! # fn main() -> ledflow_control::Result<()> {
//! let output = ArtNetOutput::new()?;
//! let config = DeviceConfig::new(100, "192.168.1.40").with_order(ChannelOrder::Grb);
//! let mut strip = Device::new(config, output)?;
//!
//! let frame = vec![Color::rgb(8, 226, 97); 100];
//! strip.send_colors(&frame)?;
//! # Ok(())
//! # }
//! ```

pub mod artnet;
pub mod device;
pub mod frame;
pub mod order;
pub mod registry;
pub mod transport;

pub use artnet::{ArtNetOutput, ARTNET_PORT};
pub use device::{Device, DeviceConfig};
pub use frame::{FrameBuffer, UNIVERSE_SIZE};
pub use order::ChannelOrder;
pub use registry::Registry;
pub use transport::Transport;
