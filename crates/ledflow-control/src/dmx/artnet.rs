//! Art-Net output transport (Art-Net 4)
//!
//! Art-Net is a UDP-based protocol for transmitting DMX512 over Ethernet,
//! addressed by a 15-bit port-address per universe.

use std::net::UdpSocket;

use crate::dmx::frame::UNIVERSE_SIZE;
use crate::dmx::transport::Transport;
use crate::error::Result;

/// UDP port reserved for Art-Net.
pub const ARTNET_PORT: u16 = 6454;

const HEADER_SIZE: usize = 18;

/// Art-Net transport: one UDP socket usable by any number of devices.
pub struct ArtNetOutput {
    socket: UdpSocket,
    sequence: u8,
}

impl ArtNetOutput {
    /// Bind an ephemeral UDP socket for Art-Net output.
    pub fn new() -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_broadcast(true)?;

        tracing::info!("Art-Net output bound on {}", socket.local_addr()?);

        Ok(Self {
            socket,
            sequence: 0,
        })
    }

    /// Build an Art-Net DMX packet (OpDmx).
    fn build_packet(&self, net: u8, universe: u16, channels: &[u8; UNIVERSE_SIZE]) -> Vec<u8> {
        let mut packet = vec![0u8; HEADER_SIZE + UNIVERSE_SIZE];

        // Header: "Art-Net\0"
        packet[0..8].copy_from_slice(b"Art-Net\0");

        // OpCode: OpDmx (0x5000)
        packet[8..10].copy_from_slice(&0x5000u16.to_le_bytes());

        // Protocol version (14)
        packet[10..12].copy_from_slice(&14u16.to_be_bytes());

        // Sequence
        packet[12] = self.sequence;

        // Physical (0)
        packet[13] = 0;

        // Port-Address: 15-bit, `net` in bits 8..15
        let port_address = ((net as u16) << 8) | universe;
        packet[14..16].copy_from_slice(&port_address.to_le_bytes());

        // Length (512 channels, big-endian)
        packet[16..18].copy_from_slice(&(UNIVERSE_SIZE as u16).to_be_bytes());

        // DMX data
        packet[HEADER_SIZE..].copy_from_slice(channels);

        packet
    }
}

impl Transport for ArtNetOutput {
    fn send(
        &mut self,
        host: &str,
        net: u8,
        universe: u16,
        payload: &[u8; UNIVERSE_SIZE],
    ) -> Result<()> {
        let packet = self.build_packet(net, universe, payload);

        self.socket.send_to(&packet, (host, ARTNET_PORT))?;
        self.sequence = self.sequence.wrapping_add(1);

        tracing::trace!(host, net, universe, "sent Art-Net DMX packet");

        Ok(())
    }
}
