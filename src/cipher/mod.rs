//! The modified-DES block cipher: a 16-round Feistel network in which both
//! exclusive-or combination points are replaced by segmented mixing.

use crate::sbox::Sbox;
use crate::segment::Segments;
use crate::utility::permute;

mod tables;

/*****************************************************************
                            ModDes
******************************************************************/

const MASK28: u32 = (1 << 28) - 1;

/// A structure representing the modified-DES cipher.
///
/// The cipher is stateless across calls: the subkey sequence is recomputed
/// for every encryption and nothing is cached, so a single instance may be
/// shared freely between threads.
#[derive(Clone)]
pub struct ModDes {
    sboxes: Vec<Sbox>,
}

impl ModDes {
    /// The number of Feistel rounds.
    pub const ROUNDS: usize = 16;

    /// Create a new instance of the cipher.
    pub fn new() -> ModDes {
        let sboxes = tables::SBOXES
            .iter()
            .map(|table| Sbox::new(6, 4, table.to_vec()))
            .collect();

        ModDes { sboxes }
    }

    /// Returns the block size of the cipher in bits.
    pub fn size(&self) -> usize {
        64
    }

    /// Returns the key size in bits.
    pub fn key_size(&self) -> usize {
        64
    }

    /// Computes the 16 round subkeys from a 64-bit key. Each subkey occupies
    /// the low 48 bits of its word and is a pure function of the key.
    pub fn key_schedule(&self, key: u64) -> Vec<u64> {
        let state = permute(key, &tables::PC1);
        let mut c = (state >> 28) as u32 & MASK28;
        let mut d = state as u32 & MASK28;

        let mut subkeys = Vec::with_capacity(ModDes::ROUNDS);

        for &shift in tables::SHIFTS.iter() {
            c = ((c << shift) | (c >> (28 - shift))) & MASK28;
            d = ((d << shift) | (d >> (28 - shift))) & MASK28;

            // left-align the rotated 56-bit pair before indexing with PC2
            let cd = ((u64::from(c) << 28) | u64::from(d)) << 8;
            subkeys.push(permute(cd, &tables::PC2));
        }

        subkeys
    }

    /// Encrypts a single 64-bit block under a 64-bit key.
    ///
    /// `subkey_segments` parameterizes the 48-bit mixing of the expanded
    /// half-block with the round subkey; `half_segments` parameterizes, via
    /// its 32-bit scaled derivative, the mixing of the round function output
    /// with the opposite half-block. With the uniform (16, 16, 16)
    /// segmentation both sites degenerate to plain exclusive-or and the
    /// cipher coincides with standard DES.
    pub fn encrypt(
        &self,
        plaintext: u64,
        key: u64,
        subkey_segments: &Segments,
        half_segments: &Segments,
    ) -> u64 {
        let subkeys = self.key_schedule(key);

        let permuted = permute(plaintext, &tables::IP);
        let mut left = (permuted >> 32) as u32;
        let mut right = permuted as u32;

        // the swap is unconditional, the 16th round included
        for &subkey in &subkeys {
            let output = self.f(right, subkey, subkey_segments);
            let next = half_segments.mix32(left, output);
            left = right;
            right = next;
        }

        // preoutput swap: the halves are recombined as (R, L)
        let preoutput = (u64::from(right) << 32) | u64::from(left);
        permute(preoutput, &tables::FP)
    }

    /// The round function: expansion, subkey mixing, substitution and the
    /// straight permutation.
    fn f(&self, half: u32, subkey: u64, segments: &Segments) -> u32 {
        let expanded = permute(u64::from(half) << 32, &tables::E);
        let mixed = segments.mix48(expanded, subkey);
        let substituted = self.substitute(mixed);

        permute(u64::from(substituted) << 32, &tables::P) as u32
    }

    /// Applies the eight S-boxes to a 48-bit word, most significant 6-bit
    /// group first. The outer two bits of each group select the row, the
    /// inner four the column.
    fn substitute(&self, input: u64) -> u32 {
        let mut output = 0;

        for (i, sbox) in self.sboxes.iter().enumerate() {
            let group = (input >> ((7 - i) * 6)) & 0x3f;
            let row = ((group & 0x20) >> 4) | (group & 0x1);
            let column = (group >> 1) & 0xf;

            output = (output << 4) | u32::from(sbox.apply(row * 16 + column));
        }

        output
    }
}

impl Default for ModDes {
    fn default() -> Self {
        ModDes::new()
    }
}
