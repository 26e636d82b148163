//! Packing invariants exercised through the public API.

use ledflow_control::{ChannelOrder, Color, ControlError, FrameBuffer, UNIVERSE_SIZE};
use proptest::prelude::*;

#[test]
fn oversized_second_append_is_rejected_atomically() {
    // 100 RGB lights leave room for 70 more in the single universe
    let mut frame = FrameBuffer::new(100, ChannelOrder::Rgb);
    frame.append(&vec![Color::rgb(1, 2, 3); 100]).unwrap();
    let snapshot = frame.universes().to_vec();

    let err = frame.append(&vec![Color::rgb(4, 5, 6); 100]).unwrap_err();
    assert!(matches!(err, ControlError::CapacityExceeded { .. }));
    assert_eq!(frame.universes(), &snapshot[..]);
    assert_eq!(frame.cursor(), (0, 300));

    // exactly 70 more do fit
    frame.append(&vec![Color::rgb(4, 5, 6); 70]).unwrap();
    assert_eq!(frame.cursor(), (0, 510));
}

#[test]
fn queue_accumulates_across_appends() {
    let mut frame = FrameBuffer::new(6, ChannelOrder::Rgb);
    frame.append(&[Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)]).unwrap();
    assert_eq!(frame.cursor(), (0, 6));

    frame.append(&[Color::rgb(3, 3, 3)]).unwrap();
    assert_eq!(frame.cursor(), (0, 9));
    assert_eq!(&frame.universes()[0][6..9], &[3, 3, 3]);
}

fn any_order() -> impl Strategy<Value = ChannelOrder> {
    prop::sample::select(ChannelOrder::ALL.to_vec())
}

proptest! {
    #[test]
    fn allocation_never_undersizes(lights in 0usize..2000, order in any_order()) {
        let frame = FrameBuffer::new(lights, order);
        prop_assert!(frame.universe_count() * UNIVERSE_SIZE >= lights * order.width());
        prop_assert_eq!(
            frame.universe_count(),
            (lights * order.width()).div_ceil(UNIVERSE_SIZE).max(1)
        );
    }

    #[test]
    fn split_appends_match_one_append(
        lights in 1usize..600,
        order in any_order(),
        cut_seed in prop::collection::vec(0usize..600, 0..6),
    ) {
        let colors: Vec<Color> = (0..lights)
            .map(|i| Color::rgbw(i as u8, (i >> 1) as u8, (i >> 2) as u8, (i % 7) as u8))
            .collect();

        let mut whole = FrameBuffer::new(lights, order);
        whole.append(&colors).unwrap();

        let mut cuts: Vec<usize> = cut_seed.iter().map(|c| c % lights).collect();
        cuts.push(0);
        cuts.push(lights);
        cuts.sort_unstable();
        cuts.dedup();

        let mut split = FrameBuffer::new(lights, order);
        for pair in cuts.windows(2) {
            split.append(&colors[pair[0]..pair[1]]).unwrap();
        }

        prop_assert_eq!(whole.cursor(), split.cursor());
        prop_assert_eq!(whole.universes(), split.universes());
    }

    #[test]
    fn packed_bytes_follow_the_permutation(
        order in any_order(),
        bytes in prop::array::uniform4(any::<u8>()),
    ) {
        let color = Color::rgbw(bytes[0], bytes[1], bytes[2], bytes[3]);
        let mut frame = FrameBuffer::new(1, order);
        frame.append(&[color]).unwrap();

        let slots = order.slots();
        for (offset, channel) in slots.iter().enumerate() {
            prop_assert_eq!(frame.universes()[0][offset], color.channel(*channel));
        }
        // nothing past the light's width is touched
        for byte in &frame.universes()[0][slots.len()..] {
            prop_assert_eq!(*byte, 0u8);
        }
    }
}
