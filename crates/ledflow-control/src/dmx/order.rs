//! Channel-order permutation tables

use serde::{Deserialize, Serialize};

use crate::color::Channel;

/// The order in which a light's channels occupy its DMX slots.
///
/// Three-channel orders take 3 slots per light; [`ChannelOrder::Rgbw`]
/// takes 4. Serialized with uppercase names (`"GRB"`, `"RGBW"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Brg,
    Grb,
    Rbg,
    Gbr,
    Bgr,
    Rgbw,
}

impl ChannelOrder {
    /// Every supported order.
    pub const ALL: [ChannelOrder; 7] = [
        ChannelOrder::Rgb,
        ChannelOrder::Brg,
        ChannelOrder::Grb,
        ChannelOrder::Rbg,
        ChannelOrder::Gbr,
        ChannelOrder::Bgr,
        ChannelOrder::Rgbw,
    ];

    /// Number of DMX slots one light occupies.
    pub const fn width(self) -> usize {
        self.slots().len()
    }

    /// Slot-by-slot channel assignment for one light.
    pub const fn slots(self) -> &'static [Channel] {
        use Channel::{Blue, Green, Red, White};
        match self {
            ChannelOrder::Rgb => &[Red, Green, Blue],
            ChannelOrder::Brg => &[Blue, Red, Green],
            ChannelOrder::Grb => &[Green, Red, Blue],
            ChannelOrder::Rbg => &[Red, Blue, Green],
            ChannelOrder::Gbr => &[Green, Blue, Red],
            ChannelOrder::Bgr => &[Blue, Green, Red],
            ChannelOrder::Rgbw => &[Red, Green, Blue, White],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        for order in ChannelOrder::ALL {
            let expected = if order == ChannelOrder::Rgbw { 4 } else { 3 };
            assert_eq!(order.width(), expected, "{order:?}");
        }
    }

    #[test]
    fn test_slot_tables() {
        use Channel::{Blue, Green, Red, White};
        assert_eq!(ChannelOrder::Grb.slots(), &[Green, Red, Blue]);
        assert_eq!(ChannelOrder::Bgr.slots(), &[Blue, Green, Red]);
        assert_eq!(ChannelOrder::Rgbw.slots(), &[Red, Green, Blue, White]);
    }

    #[test]
    fn test_every_order_covers_rgb() {
        use Channel::{Blue, Green, Red};
        for order in ChannelOrder::ALL {
            let slots = order.slots();
            assert!(slots.contains(&Red), "{order:?}");
            assert!(slots.contains(&Green), "{order:?}");
            assert!(slots.contains(&Blue), "{order:?}");
        }
    }

    #[test]
    fn test_serde_uppercase_names() {
        let json = serde_json::to_string(&ChannelOrder::Grb).unwrap();
        assert_eq!(json, "\"GRB\"");

        let order: ChannelOrder = serde_json::from_str("\"RGBW\"").unwrap();
        assert_eq!(order, ChannelOrder::Rgbw);
    }

    #[test]
    fn test_default_is_rgb() {
        assert_eq!(ChannelOrder::default(), ChannelOrder::Rgb);
    }
}
