//! Drives one 500-light GRB pixel strip spread over three universes.

use anyhow::Result;
use ledflow_control::{ArtNetOutput, ChannelOrder, Color, Device, DeviceConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let num_of_lights = 500;

    let config = DeviceConfig::new(num_of_lights, "192.168.68.178").with_order(ChannelOrder::Grb);
    let mut device = Device::new(config, ArtNetOutput::new()?)?;

    // One solid-green frame across the whole strip
    let frame = vec![Color::rgb(8, 226, 97); num_of_lights];

    device.add_to_queue(&frame)?;
    device.send()?;

    Ok(())
}
