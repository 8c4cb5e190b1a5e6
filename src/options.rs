use std::num::ParseIntError;

use structopt::StructOpt;

fn parse_hex64(src: &str) -> Result<u64, ParseIntError> {
    u64::from_str_radix(src.trim_start_matches("0x"), 16)
}

#[derive(Clone, StructOpt)]
#[structopt(
    name = "moddes",
    about = "Encrypt a single 64-bit block with modified DES, \
             a Feistel network whose exclusive-or points are replaced by \
             segmented mixing."
)]
pub struct ModDesOptions {
    /// Top segment length for the subkey mixing.
    #[structopt(default_value = "16")]
    pub s1: usize,

    /// Middle segment length for the subkey mixing.
    #[structopt(default_value = "16")]
    pub s2: usize,

    /// Bottom segment length for the subkey mixing.
    #[structopt(default_value = "16")]
    pub s3: usize,

    /// Top segment length for the half-block mixing.
    #[structopt(default_value = "16")]
    pub s1p: usize,

    /// Middle segment length for the half-block mixing.
    #[structopt(default_value = "16")]
    pub s2p: usize,

    /// Bottom segment length for the half-block mixing.
    #[structopt(default_value = "16")]
    pub s3p: usize,

    /// The 64-bit plaintext block, in hexadecimal.
    #[structopt(
        short = "p",
        long = "plaintext",
        parse(try_from_str = parse_hex64),
        default_value = "0123456789ABCDEF"
    )]
    pub plaintext: u64,

    /// The 64-bit key, in hexadecimal.
    #[structopt(
        short = "k",
        long = "key",
        parse(try_from_str = parse_hex64),
        default_value = "133457799BBCDFF1"
    )]
    pub key: u64,
}
