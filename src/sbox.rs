//! Type representing an S-box.

use std::convert::TryInto;

/// A structure that represents an S-box.
#[derive(Clone, Debug)]
pub struct Sbox {
    size_in: usize,
    size_out: usize,
    table: Vec<u8>,
}

impl Sbox {
    /// Creates a new S-box from its table description. `size_in` and
    /// `size_out` are the bit sizes of the S-box input and output.
    ///
    /// # Panics
    /// The function panics if the length of `table` is not equal to
    /// 2<sup>`size_in`</sup>.
    pub fn new(size_in: usize, size_out: usize, table: Vec<u8>) -> Sbox {
        assert_eq!(1 << size_in, table.len());

        Sbox {
            size_in,
            size_out,
            table,
        }
    }

    /// Applies the S-box to the input.
    pub fn apply<T: TryInto<usize>>(&self, x: T) -> u8 {
        let x = match x.try_into() {
            Ok(x) => x,
            Err(_) => panic!("Conversion error"),
        };

        self.table[x]
    }

    /// Returns a bitmask that corresponds to the S-box input size.
    pub fn mask_in(&self) -> u64 {
        (1 << self.size_in) - 1
    }

    /// Returns a bitmask that corresponds to the S-box output size.
    pub fn mask_out(&self) -> u64 {
        (1 << self.size_out) - 1
    }

    /// Returns the input size of the S-box in bits.
    pub fn size_in(&self) -> usize {
        self.size_in
    }

    /// Returns the output size of the S-box in bits.
    pub fn size_out(&self) -> usize {
        self.size_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_reads_the_table() {
        let sbox = Sbox::new(2, 2, vec![3, 0, 2, 1]);

        assert_eq!(sbox.apply(0u64), 3);
        assert_eq!(sbox.apply(3u64), 1);
        assert_eq!(sbox.mask_in(), 0x3);
    }

    #[test]
    #[should_panic]
    fn table_length_must_match_the_input_size() {
        Sbox::new(4, 4, vec![0; 8]);
    }
}
