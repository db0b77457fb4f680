//! Vocabulary coverage statistics for tokenized Japanese text
//!
//! The heart of the crate is [`coverage::analyze`], a pure function that ranks the morphemes a
//! reader doesn't know yet and says how many of them must be learned to reach each
//! comprehension cutoff. The other modules are the glue the binaries need around it: turning
//! raw text into morphemes, stripping markup, loading known vocabulary, and printing reports.


#[macro_use] extern crate log;
extern crate farmhash;
extern crate rayon;
extern crate regex;
extern crate tempfile;
extern crate unicode_segmentation;
pub mod errors;
pub mod farm;
pub mod coverage;
pub mod tokenize;
pub mod markup;
pub mod input;
pub mod known;
pub mod report;
