mod options;

use structopt::StructOpt;

use moddes::{ModDes, Segments};
use options::ModDesOptions;

fn main() {
    let options = ModDesOptions::from_args();

    let subkey_segments = match Segments::new(options.s1, options.s2, options.s3) {
        Ok(segments) => segments,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let half_segments = match Segments::new(options.s1p, options.s2p, options.s3p) {
        Ok(segments) => segments,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let cipher = ModDes::new();
    let ciphertext = cipher.encrypt(
        options.plaintext,
        options.key,
        &subkey_segments,
        &half_segments,
    );

    println!("Plain : {:016X}", options.plaintext);
    println!("Key   : {:016X}", options.key);
    println!("Cipher: {:016X}", ciphertext);
}
