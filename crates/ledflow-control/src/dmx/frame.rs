//! Universe frame packing
//!
//! Converts an ordered run of colors into 512-byte DMX universe buffers.
//! The write cursor survives across partial updates, so a strip can be
//! filled in several appends before the frame is drained to a transport.

use crate::color::Color;
use crate::dmx::order::ChannelOrder;
use crate::dmx::transport::Transport;
use crate::error::{ControlError, Result};

/// Number of 8-bit slots in one DMX universe.
pub const UNIVERSE_SIZE: usize = 512;

/// Queued DMX data for one device: universe buffers plus the write cursor.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    order: ChannelOrder,
    light_count: usize,
    universes: Vec<[u8; UNIVERSE_SIZE]>,
    cursor: Cursor,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    universe: usize,
    slot: usize,
}

impl FrameBuffer {
    /// Allocate buffers for `light_count` lights at `order`'s slot width.
    ///
    /// At least one universe is allocated even for an empty strip, so a
    /// drain stays well-defined.
    pub fn new(light_count: usize, order: ChannelOrder) -> Self {
        let bytes = light_count * order.width();
        let universe_count = bytes.div_ceil(UNIVERSE_SIZE).max(1);
        Self {
            order,
            light_count,
            universes: vec![[0; UNIVERSE_SIZE]; universe_count],
            cursor: Cursor::default(),
        }
    }

    /// Queue colors at the cursor, one `width()`-slot run per light.
    ///
    /// A light never spans two universes: when fewer than `width()` slots
    /// remain in the current universe, the cursor advances to the next one
    /// at slot 0. Capacity is checked up front against the allocated
    /// universes, so a failing append writes nothing.
    pub fn append(&mut self, colors: &[Color]) -> Result<()> {
        let width = self.order.width();
        if colors.len() > self.remaining_lights() {
            return Err(ControlError::CapacityExceeded {
                universe: self.cursor.universe,
                slot: self.cursor.slot,
                lights: colors.len(),
            });
        }
        for color in colors {
            if UNIVERSE_SIZE - self.cursor.slot < width {
                self.cursor.universe += 1;
                self.cursor.slot = 0;
                debug_assert!(self.cursor.universe < self.universes.len());
            }
            let universe = &mut self.universes[self.cursor.universe];
            for (offset, channel) in self.order.slots().iter().enumerate() {
                universe[self.cursor.slot + offset] = color.channel(*channel);
            }
            self.cursor.slot += width;
        }
        Ok(())
    }

    /// Send every universe in index order, then clear the queue.
    ///
    /// Universe `i` goes out as absolute universe `first_universe + i`.
    /// The buffers are zeroed and the cursor rewound only once every send
    /// has succeeded; a transport failure propagates immediately and
    /// leaves the queue intact, so the same frame can be retried.
    pub fn drain<T>(&mut self, transport: &mut T, host: &str, first_universe: u16) -> Result<()>
    where
        T: Transport + ?Sized,
    {
        for (index, universe) in self.universes.iter().enumerate() {
            transport.send(host, 0, first_universe + index as u16, universe)?;
        }
        tracing::trace!(
            universes = self.universes.len(),
            host,
            first_universe,
            "frame drained"
        );
        for universe in &mut self.universes {
            universe.fill(0);
        }
        self.cursor = Cursor::default();
        Ok(())
    }

    /// How many more lights fit before the allocation runs out.
    ///
    /// Each universe holds `512 / width` whole lights; slack bytes at the
    /// end of a universe are never split across the boundary.
    fn remaining_lights(&self) -> usize {
        let width = self.order.width();
        let in_current = (UNIVERSE_SIZE - self.cursor.slot) / width;
        let after_current = self.universes.len() - self.cursor.universe - 1;
        in_current + after_current * (UNIVERSE_SIZE / width)
    }

    /// Number of allocated universes.
    pub fn universe_count(&self) -> usize {
        self.universes.len()
    }

    /// The universe payloads, in sequence order.
    pub fn universes(&self) -> &[[u8; UNIVERSE_SIZE]] {
        &self.universes
    }

    /// Write cursor as `(universe index, slot offset)`.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor.universe, self.cursor.slot)
    }

    /// Channel order the buffer packs with.
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Light count the buffer was sized for.
    pub fn light_count(&self) -> usize {
        self.light_count
    }
}
