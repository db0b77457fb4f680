//! The reader's known vocabulary
//!
//! Known morphemes come from a text the reader already understands, tokenized the same way
//! as the text being analyzed. Tokenizing a big text every run is slow, so [`KnownCache`]
//! can keep the resulting set on disk next to it. Nothing here is global; callers decide
//! whether a cache exists and where.
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use coverage::{no_known, KnownSet};
use input::{read_lines, InputFormat};
use tokenize::{tokenize_lines, Tokenizer};
use errors::*;

/// Tokenize lines of known text into a (deduplicated) known set
pub fn known_from_lines<T, S>(tokenizer: &T, lines: &[S]) -> KnownSet
    where T: Tokenizer + ?Sized, S: AsRef<str> + Sync
{
    let mut known = no_known();
    known.extend(tokenize_lines(tokenizer, lines));
    known
}

/// Read and tokenize a file of known text
pub fn load_known<T>(path: &Path, format: InputFormat, tokenizer: &T) -> Result<KnownSet>
    where T: Tokenizer + ?Sized
{
    info!("Parsing known morphemes from {}...", path.display());
    let lines = read_lines(Some(path), format, "known vocabulary file")?;
    let known = known_from_lines(tokenizer, &lines);
    debug!("{} distinct known morphemes", known.len());
    Ok(known)
}

/// A known set saved as plain text, one morpheme per line
pub struct KnownCache {
    path: PathBuf,
}

impl KnownCache {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        KnownCache { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached set
    pub fn read(&self) -> Result<KnownSet> {
        let file = File::open(&self.path)
            .map_err(|err| Error::MissingFile("known vocabulary cache", Some(err)))?;
        let mut known = no_known();
        for line in BufReader::new(file).lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() {
                known.insert(line.to_string());
            }
        }
        Ok(known)
    }

    /// Replace the cache with `known`
    ///
    /// Morphemes are sorted so the same set always makes the same file. The file is written
    /// beside the destination and moved over it, so a crash never leaves half a cache.
    pub fn write(&self, known: &KnownSet) -> Result<()> {
        let mut sorted: Vec<&String> = known.iter().collect();
        sorted.sort();
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let temp_file = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            for morph in sorted {
                writeln!(writer, "{}", morph)?;
            }
            writer.flush()?;
        }
        temp_file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    /// Whether the cache exists and is no older than `source`
    pub fn is_fresh_for(&self, source: &Path) -> bool {
        let modified = |path: &Path| fs::metadata(path).and_then(|meta| meta.modified());
        match (modified(&self.path), modified(source)) {
            (Ok(cached), Ok(original)) => cached >= original,
            _ => false,
        }
    }

    /// Use the cache if it is fresh for `source`, otherwise `build` the set and cache it
    ///
    /// Failing to write the cache only costs time next run, so it is logged and ignored.
    pub fn load_or_build<F>(&self, source: &Path, build: F) -> Result<KnownSet>
        where F: FnOnce() -> Result<KnownSet>
    {
        if self.is_fresh_for(source) {
            match self.read() {
                Ok(known) => {
                    info!("Using cached known morphemes from {}", self.path.display());
                    return Ok(known);
                },
                Err(err) => warn!("Ignoring unreadable cache {}: {}", self.path.display(), err),
            }
        } else {
            debug!("Cache {} is missing or stale", self.path.display());
        }
        let known = build()?;
        if let Err(err) = self.write(&known) {
            warn!("Could not write cache {}: {}", self.path.display(), err);
        }
        Ok(known)
    }
}
