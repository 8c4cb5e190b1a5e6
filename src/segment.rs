//! Segmented mixing: the generalized exclusive-or used at both combination
//! points of the round function.
//!
//! A `Segments` value splits its operands into three contiguous pieces,
//! most significant first, and combines the pieces independently. Each piece
//! is exclusive-ored, so the overall bit values match a plain exclusive-or;
//! the segmentation is the seam at which a variant could substitute a
//! different per-segment combinator without touching the round logic.

use std::cmp;
use std::error::Error;
use std::fmt;

/// The operand width the primary segmentation covers.
pub const SEGMENT_WIDTH: usize = 48;

const MASK48: u64 = (1 << 48) - 1;

/// Error returned when a segment triple does not cover exactly 48 bits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidSegmentation {
    s1: usize,
    s2: usize,
    s3: usize,
}

impl fmt::Display for InvalidSegmentation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "segment lengths ({}, {}, {}) must sum to {}",
            self.s1, self.s2, self.s3, SEGMENT_WIDTH
        )
    }
}

impl Error for InvalidSegmentation {}

/// A validated triple of segment lengths covering a 48-bit operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segments {
    s1: usize,
    s2: usize,
    s3: usize,
}

impl Segments {
    /// Creates a new segmentation. The three lengths must sum to exactly 48;
    /// anything else is rejected before any cipher computation can use it.
    pub fn new(s1: usize, s2: usize, s3: usize) -> Result<Segments, InvalidSegmentation> {
        if s1 + s2 + s3 != SEGMENT_WIDTH {
            return Err(InvalidSegmentation { s1, s2, s3 });
        }

        Ok(Segments { s1, s2, s3 })
    }

    /// Combines two 48-bit operands segment by segment: the top `s1` bits,
    /// the middle `s2` bits and the bottom `s3` bits of each operand are
    /// exclusive-ored independently and reassembled in the same order.
    pub fn mix48(&self, a: u64, b: u64) -> u64 {
        segment_xor(a, b, (self.s1, self.s2, self.s3)) & MASK48
    }

    /// Combines two 32-bit half-block operands under the scaled segmentation.
    pub fn mix32(&self, a: u32, b: u32) -> u32 {
        segment_xor(u64::from(a), u64::from(b), self.scaled()) as u32
    }

    /// Derives the 32-bit segmentation by proportional scaling. The first two
    /// lengths are floor-scaled by 32/48 and clamped up to at least one bit;
    /// the third absorbs whatever remainder keeps the total at 32, with the
    /// second recomputed downward if the forced third segment would overflow
    /// the total.
    pub fn scaled(&self) -> (usize, usize, usize) {
        let s1 = cmp::max(1, self.s1 * 32 / 48);
        let mut s2 = cmp::max(1, self.s2 * 32 / 48);
        let mut s3 = 32 as isize - s1 as isize - s2 as isize;

        if s3 < 1 {
            s3 = 1;
            s2 = cmp::max(32 - s1 as isize - s3, 0) as usize;
        }

        (s1, s2, s3 as usize)
    }
}

/// Exclusive-ors two right-aligned operands piecewise under a segmentation
/// whose lengths are each below 64. Grouping does not change any bit value;
/// the split is kept explicit so each segment runs through its own combiner.
fn segment_xor(a: u64, b: u64, (s1, s2, s3): (usize, usize, usize)) -> u64 {
    let m1 = mask(s1);
    let m2 = mask(s2);
    let m3 = mask(s3);

    let r1 = ((a >> (s2 + s3)) & m1) ^ ((b >> (s2 + s3)) & m1);
    let r2 = ((a >> s3) & m2) ^ ((b >> s3) & m2);
    let r3 = (a & m3) ^ (b & m3);

    (r1 << (s2 + s3)) | (r2 << s3) | r3
}

fn mask(len: usize) -> u64 {
    if len == 0 {
        0
    } else {
        (1 << len) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn valid_triples() -> impl Strategy<Value = (usize, usize, usize)> {
        (1usize..=46)
            .prop_flat_map(|s1| (Just(s1), 1usize..=(47 - s1)))
            .prop_map(|(s1, s2)| (s1, s2, 48 - s1 - s2))
    }

    proptest! {
        #[test]
        fn mixing_is_commutative((s1, s2, s3) in valid_triples(), a: u64, b: u64) {
            let segments = Segments::new(s1, s2, s3).unwrap();
            let (a, b) = (a & MASK48, b & MASK48);

            prop_assert_eq!(segments.mix48(a, b), segments.mix48(b, a));
        }

        #[test]
        fn mixing_is_self_inverse((s1, s2, s3) in valid_triples(), a: u64, b: u64) {
            let segments = Segments::new(s1, s2, s3).unwrap();
            let (a, b) = (a & MASK48, b & MASK48);

            prop_assert_eq!(segments.mix48(segments.mix48(a, b), b), a);
        }

        #[test]
        fn grouping_never_changes_bit_values((s1, s2, s3) in valid_triples(), a: u64, b: u64) {
            let segments = Segments::new(s1, s2, s3).unwrap();
            let (a, b) = (a & MASK48, b & MASK48);

            prop_assert_eq!(segments.mix48(a, b), a ^ b);
        }

        #[test]
        fn half_block_mixing_matches_plain_xor((s1, s2, s3) in valid_triples(), a: u32, b: u32) {
            let segments = Segments::new(s1, s2, s3).unwrap();

            prop_assert_eq!(segments.mix32(a, b), a ^ b);
        }

        #[test]
        fn scaled_triples_cover_32_bits((s1, s2, s3) in valid_triples()) {
            let (t1, t2, t3) = Segments::new(s1, s2, s3).unwrap().scaled();

            prop_assert_eq!(t1 + t2 + t3, 32);
            prop_assert!(t1 >= 1 && t2 >= 1 && t3 >= 1);
        }
    }

    #[test]
    fn degenerate_single_segment_is_plain_xor() {
        let segments = Segments::new(48, 0, 0).unwrap();

        assert_eq!(segments.mix48(0xdead_beef_cafe, 0x0123_4567_89ab),
                   0xdead_beef_cafe ^ 0x0123_4567_89ab);
    }

    #[test]
    fn uniform_triple_scales_to_10_10_12() {
        let segments = Segments::new(16, 16, 16).unwrap();

        assert_eq!(segments.scaled(), (10, 10, 12));
    }

    #[test]
    fn scaling_clamps_zero_lengths_up_to_one() {
        assert_eq!(Segments::new(46, 1, 1).unwrap().scaled(), (30, 1, 1));
        assert_eq!(Segments::new(1, 1, 46).unwrap().scaled(), (1, 1, 30));
    }

    #[test]
    fn non_conforming_triples_are_rejected() {
        assert!(Segments::new(16, 16, 15).is_err());
        assert!(Segments::new(0, 0, 0).is_err());
        assert!(Segments::new(48, 48, 48).is_err());

        let message = Segments::new(1, 2, 3).unwrap_err().to_string();
        assert!(message.contains("sum to 48"));
    }
}
