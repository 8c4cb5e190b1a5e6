//! A single-block implementation of modified DES: the classical 16-round
//! Feistel network with both of its exclusive-or combination points replaced
//! by a segment-parameterized mixing operation.
//!
//! The cipher encrypts one 64-bit block under a 64-bit key:
//!
//! ```
//! use moddes::{ModDes, Segments};
//!
//! let cipher = ModDes::new();
//! let segments = Segments::new(16, 16, 16).unwrap();
//!
//! let ciphertext = cipher.encrypt(
//!     0x0123_4567_89ab_cdef,
//!     0x1334_5779_9bbc_dff1,
//!     &segments,
//!     &segments,
//! );
//! assert_eq!(ciphertext, 0x85e8_1354_0f0a_b405);
//! ```

pub mod cipher;
pub mod sbox;
pub mod segment;
pub mod utility;

pub use crate::cipher::ModDes;
pub use crate::segment::{InvalidSegmentation, Segments};
