//! Registers two strips and broadcasts one frame to both.

use anyhow::Result;
use ledflow_control::{ArtNetOutput, Color, Device, DeviceConfig, Registry};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let num_of_lights = 100;

    let mut registry = Registry::new();
    registry.add(
        "window",
        Device::new(
            DeviceConfig::new(num_of_lights, "192.168.68.178"),
            ArtNetOutput::new()?,
        )?,
    );
    registry.add(
        "shelf",
        Device::new(
            DeviceConfig::new(num_of_lights, "192.168.68.179").with_first_universe(4),
            ArtNetOutput::new()?,
        )?,
    );

    let frame = vec![Color::rgb(1, 49, 20); num_of_lights];

    for (name, err) in registry.broadcast_send(&frame) {
        eprintln!("{name}: {err}");
    }

    Ok(())
}
