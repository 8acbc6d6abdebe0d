//! Demo command: prints the MD5 hex digest of each file named on the
//! command line, one per line. With no arguments it prints usage and exits
//! successfully.

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage:");
        println!("\t{} <file-to-hash>", args[0]);
        return;
    }

    for path in &args[1..] {
        match quickdigest::file_to_hash(path) {
            Ok(hash) => println!("{}", hash),
            Err(err) => eprintln!("{}: {}", path, err),
        }
    }
}
