//! Transport seam between frame packing and the network

use crate::dmx::frame::UNIVERSE_SIZE;
use crate::error::Result;

/// Delivers one finished universe payload to an Art-Net node.
///
/// Implementations own all wire concerns (packet framing, sockets,
/// pacing); the packing engine only hands over the destination host, the
/// net/universe address, and the 512 payload bytes.
pub trait Transport {
    /// Unicast one DMX universe to `universe` (within `net`) at `host`.
    fn send(
        &mut self,
        host: &str,
        net: u8,
        universe: u16,
        payload: &[u8; UNIVERSE_SIZE],
    ) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(
        &mut self,
        host: &str,
        net: u8,
        universe: u16,
        payload: &[u8; UNIVERSE_SIZE],
    ) -> Result<()> {
        (**self).send(host, net, universe, payload)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(
        &mut self,
        host: &str,
        net: u8,
        universe: u16,
        payload: &[u8; UNIVERSE_SIZE],
    ) -> Result<()> {
        (**self).send(host, net, universe, payload)
    }
}
