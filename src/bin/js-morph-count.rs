//! Count the morphemes on stdin that would be counted by an analysis
//!
//! Only valid morphemes count: anything longer than one character, and lone kanji.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate jstats;

use std::process;

use jstats::errors::*;
use jstats::coverage::is_valid_morpheme;
use jstats::input::{read_lines, InputFormat};
use jstats::tokenize::{tokenize_lines, LineTokenizer, WordBoundTokenizer};

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        eprintln!("Could not recover: {}", err);
        process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("--pretokenized 'stdin is already one morpheme per line'")
        .get_matches();

    let lines = read_lines(None, InputFormat::Text, "stdin")?;
    let tokens = if args.is_present("pretokenized") {
        tokenize_lines(&LineTokenizer, &lines)
    } else {
        tokenize_lines(&WordBoundTokenizer, &lines)
    };
    let morph_count = tokens.iter()
        .filter(|token| is_valid_morpheme(token))
        .count();
    debug!("{} of {} tokens are valid morphemes", morph_count, tokens.len());

    println!("{}", morph_count);
    Ok(())
}
