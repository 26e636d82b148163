//! A configured LED strip bound to a transport

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::dmx::frame::FrameBuffer;
use crate::dmx::order::ChannelOrder;
use crate::dmx::transport::Transport;
use crate::error::{ControlError, Result};

/// Static configuration for one LED strip device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Number of lights on the strip; every full-strip update must carry
    /// exactly this many colors. Must be greater than zero.
    pub light_count: usize,
    /// Hostname or IP address of the Art-Net node.
    pub host: String,
    /// Absolute universe number of the strip's first universe.
    #[serde(default)]
    pub first_universe: u16,
    /// Slot order the fixture expects.
    #[serde(default)]
    pub order: ChannelOrder,
}

impl DeviceConfig {
    /// Configuration with the usual defaults: first universe 0, RGB order.
    pub fn new(light_count: usize, host: impl Into<String>) -> Self {
        Self {
            light_count,
            host: host.into(),
            first_universe: 0,
            order: ChannelOrder::default(),
        }
    }

    /// Set the absolute number of the strip's first universe.
    pub fn with_first_universe(mut self, first_universe: u16) -> Self {
        self.first_universe = first_universe;
        self
    }

    /// Set the slot order the fixture expects.
    pub fn with_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }
}

/// One LED strip: configuration, queued frame data, and its transport.
///
/// The device owns its [`FrameBuffer`] exclusively. The transport is
/// whatever implements [`Transport`]; pass `&mut output` or a
/// `Box<dyn Transport>` to share one socket across devices.
pub struct Device<T> {
    config: DeviceConfig,
    frame: FrameBuffer,
    transport: T,
}

impl<T: Transport> Device<T> {
    /// Create a device; the frame buffer is sized from the configuration.
    pub fn new(config: DeviceConfig, transport: T) -> Result<Self> {
        if config.light_count == 0 {
            return Err(ControlError::InvalidParameter(
                "light_count must be greater than zero".into(),
            ));
        }

        let frame = FrameBuffer::new(config.light_count, config.order);

        tracing::debug!(
            lights = config.light_count,
            host = %config.host,
            first_universe = config.first_universe,
            order = ?config.order,
            universes = frame.universe_count(),
            "device configured"
        );

        Ok(Self {
            config,
            frame,
            transport,
        })
    }

    /// Queue one full-strip update.
    ///
    /// `colors` must hold exactly one color per configured light; on a
    /// mismatch nothing is written. Queued updates accumulate until
    /// [`Device::send`] transmits them.
    pub fn add_to_queue(&mut self, colors: &[Color]) -> Result<()> {
        if colors.len() != self.config.light_count {
            return Err(ControlError::LengthMismatch {
                expected: self.config.light_count,
                actual: colors.len(),
            });
        }
        self.frame.append(colors)
    }

    /// Transmit the queued frame and clear the queue.
    pub fn send(&mut self) -> Result<()> {
        self.frame.drain(
            &mut self.transport,
            &self.config.host,
            self.config.first_universe,
        )
    }

    /// Queue `colors` and transmit in one step.
    ///
    /// Nothing is sent if the queueing fails.
    pub fn send_colors(&mut self, colors: &[Color]) -> Result<()> {
        self.add_to_queue(colors)?;
        self.send()
    }

    /// The device's static configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Read-only view of the queued frame data.
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}
