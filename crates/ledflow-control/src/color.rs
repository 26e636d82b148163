//! Color value type shared by all devices

use serde::{Deserialize, Serialize};

/// A single light's color: red, green, blue, and a fourth white channel.
///
/// Plain value type with no identity beyond its fields. The white channel
/// only reaches the wire for four-channel orders; three-channel orders
/// ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Fourth channel for RGBW fixtures
    #[serde(default)]
    pub white: u8,
}

impl Color {
    /// Three-channel color; the white channel stays off.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white: 0,
        }
    }

    /// Four-channel color for RGBW strips.
    pub const fn rgbw(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Value of one logical channel.
    pub const fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::White => self.white,
        }
    }
}

/// One logical color component of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    White,
}
