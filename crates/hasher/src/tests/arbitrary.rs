use alloc::vec::Vec;

use quickcheck::{Arbitrary, Gen};

/// Lengths at which padding changes shape: one short of the length field,
/// the length field boundary itself, and whole blocks.
const PADDING_EDGES: [usize; 9] = [0, 1, 55, 56, 57, 63, 64, 119, 128];

/// A message whose length sits on or next to a padding edge.
#[derive(Debug, Clone)]
pub(crate) struct EdgeMessage(pub Vec<u8>);

impl Arbitrary for EdgeMessage {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = *g.choose(&PADDING_EDGES).unwrap_or(&0);
        Self((0..len).map(|_| u8::arbitrary(g)).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrinking would move the length off the edge.
        quickcheck::empty_shrinker()
    }
}

/// UTF-16 code units, including unpaired surrogates.
#[derive(Debug, Clone)]
pub(crate) struct Utf16Units(pub Vec<u16>);

impl Arbitrary for Utf16Units {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 32;
        let units = (0..len)
            .map(|_| match u8::arbitrary(g) % 4 {
                0 => 0xD800 + u16::arbitrary(g) % 0x400,
                1 => 0xDC00 + u16::arbitrary(g) % 0x400,
                _ => u16::arbitrary(g),
            })
            .collect();
        Self(units)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}
