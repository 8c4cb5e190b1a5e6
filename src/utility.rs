//! Bit-order helpers shared by the permutation tables and the key schedule.
//!
//! Every fixed table in the cipher addresses bits by 1-based position counted
//! from the most significant bit of a left-aligned word. That convention is
//! confined to this module; no other component reasons about raw shifts.

/// Reads the bit at the 1-based position `pos`, counted from the most
/// significant bit of a 64-bit word.
pub fn get_bit(word: u64, pos: usize) -> u64 {
    (word >> (64 - pos)) & 1
}

/// Returns `word` with the bit at the 1-based position `pos`, counted from
/// the most significant bit, set to the low bit of `bit`.
pub fn set_bit(word: u64, pos: usize, bit: u64) -> u64 {
    if bit & 1 != 0 {
        word | (1 << (64 - pos))
    } else {
        word & !(1 << (64 - pos))
    }
}

/// Applies a permutation table to a left-aligned input word. Output bit `i`
/// is the input bit at the 1-based position `table[i]`. The result occupies
/// the low `table.len()` bits of the returned word.
///
/// Operands narrower than 64 bits are left-aligned by the caller before the
/// lookup (`<< 32` for half-blocks, `<< 8` for the 56-bit key state).
pub fn permute(input: u64, table: &[usize]) -> u64 {
    let mut output = 0;

    for &pos in table {
        output = (output << 1) | get_bit(input, pos);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_count_from_the_msb() {
        let word = 0x8000_0000_0000_0001;
        assert_eq!(get_bit(word, 1), 1);
        assert_eq!(get_bit(word, 2), 0);
        assert_eq!(get_bit(word, 63), 0);
        assert_eq!(get_bit(word, 64), 1);
    }

    #[test]
    fn set_bit_round_trips() {
        let word = set_bit(0, 17, 1);
        assert_eq!(get_bit(word, 17), 1);
        assert_eq!(set_bit(word, 17, 0), 0);
    }

    #[test]
    fn identity_table_preserves_the_word() {
        let table: Vec<usize> = (1..=64).collect();
        assert_eq!(permute(0x0123_4567_89ab_cdef, &table), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn short_tables_right_align_their_output() {
        assert_eq!(permute(0xa000_0000_0000_0000, &[1, 2, 3, 4]), 0xa);
        assert_eq!(permute(0xa000_0000_0000_0000, &[4, 3, 2, 1]), 0x5);
    }
}
