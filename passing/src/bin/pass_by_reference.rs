//! Pass by reference: the swap's parameters are `&mut` borrows of `a` and `b`.
//!
//! Declares `a = 5`, `b = 2`, swaps them and prints both views.

use std::io;

use passing::core::types::{Mechanism, Pair};
use passing::{demo, exit_codes, logging, render};

fn main() {
    logging::init();
    let demo = demo::run(Mechanism::Reference, Pair::default());
    let code = match render::write_transcript(&mut io::stdout().lock(), &demo) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}
