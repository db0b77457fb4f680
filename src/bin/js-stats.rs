//! Rank the morphemes of a text you don't know yet, and how many to learn for each level of
//! comprehension
//!
//! The input is a text or HTML file, or stdin. Morphemes come from Unicode word boundaries
//! unless `--pretokenized` says the input is already one morpheme per line, which is what
//! `mecab -F'%m\n' -E ''` produces and is much more accurate for Japanese.
//!
//! Known vocabulary is given as another text (`--knowfile`), tokenized the same way. Since
//! that can be large, `--cache` keeps its morphemes in a plain text file that is reused until
//! the known text changes.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate jstats;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process;
use clap::Arg;

use jstats::errors::*;
use jstats::coverage::{analyze, no_known};
use jstats::input::{read_lines, InputFormat};
use jstats::known::{load_known, KnownCache};
use jstats::report::{write_report, ReportOptions};
use jstats::tokenize::{tokenize_lines, LineTokenizer, Tokenizer, WordBoundTokenizer};

const DEFAULT_OUTFILE: &str = "stats.txt";

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
        .arg_from_usage("[input] 'text or HTML file to analyze (stdin if absent or -)'")
        .arg_from_usage("-k, --knowfile=[FILE] 'text containing morphemes you already know'")
        .arg(Arg::with_name("outfile")
            .short("o")
            .long("outfile")
            .value_name("FILE")
            .takes_value(true)
            .min_values(0)
            .require_equals(true)
            .help("write the report to FILE instead of stdout (stats.txt if just -o)"))
        .arg_from_usage("-f, --format=[FORMAT] 'text or html (guessed from the extension otherwise)'")
        .arg_from_usage("--pretokenized 'inputs are already one morpheme per line'")
        .arg_from_usage("-c, --cache=[FILE] 'keep the known morphemes here between runs'")
        .arg_from_usage("-n, --top=[N] 'only list the N most frequent unknown morphemes'")
        .get_matches();

    let tokenizer: Box<dyn Tokenizer> = if args.is_present("pretokenized") {
        Box::new(LineTokenizer)
    } else {
        Box::new(WordBoundTokenizer)
    };
    let forced_format = match args.value_of("format") {
        Some(name) => Some(name.parse::<InputFormat>()?),
        None => None,
    };
    let format_of = |path: &Path| match forced_format {
        Some(format) => Ok(format),
        None => InputFormat::from_path(path),
    };
    let top = if args.is_present("top") {
        Some(value_t!(args, "top", usize).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    // Known morphemes first, so a bad knowfile fails before the slow part
    let known = match args.value_of("knowfile") {
        None => no_known(),
        Some(knowfile) => {
            let knowpath = Path::new(knowfile);
            let format = format_of(knowpath)?;
            let build = || load_known(knowpath, format, &*tokenizer);
            match args.value_of("cache") {
                Some(cache) => KnownCache::new(cache).load_or_build(knowpath, build)?,
                None => build()?,
            }
        }
    };

    let (inpath, format) = match args.value_of("input") {
        None | Some("-") => (None, forced_format.unwrap_or(InputFormat::Text)),
        Some(infile) => {
            let inpath = Path::new(infile);
            (Some(inpath), format_of(inpath)?)
        }
    };
    match inpath {
        Some(path) => info!("Analyzing {}...", path.display()),
        None => info!("Analyzing stdin..."),
    }
    let lines = read_lines(inpath, format, "input file")?;
    let tokens = tokenize_lines(&*tokenizer, &lines);

    info!("Generating frequency list and comprehension cutoffs...");
    let result = analyze(&tokens, &known);

    let options = ReportOptions { top: top };
    if args.occurrences_of("outfile") > 0 {
        let outname = args.value_of("outfile").unwrap_or(DEFAULT_OUTFILE);
        info!("Writing results to {}...", outname);
        let mut out = BufWriter::new(File::create(outname)?);
        write_report(&result, &options, &mut out)?;
        out.flush()?;
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_report(&result, &options, &mut out)?;
    }
    Ok(())
}
