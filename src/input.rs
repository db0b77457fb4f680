//! Reading text and HTML inputs into lines
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str;
use std::str::FromStr;
use markup::MarkupStripper;
use errors::*;

/// How an input's bytes should be turned into lines of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Html,
}

impl InputFormat {
    /// Guess from the extension: `.html`/`.htm` are HTML, `.txt` or no extension are text
    pub fn from_path(path: &Path) -> Result<InputFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(InputFormat::Text),
            Some(ext) => match ext.to_lowercase().as_ref() {
                "txt" => Ok(InputFormat::Text),
                "html" | "htm" => Ok(InputFormat::Html),
                _ => Err(Error::UnsupportedInput(format!(
                    "don't know how to read {}; use --format to say", path.display()))),
            },
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<InputFormat> {
        match s {
            "text" | "txt" => Ok(InputFormat::Text),
            "html" => Ok(InputFormat::Html),
            _ => Err(Error::UnsupportedInput(format!("no format called {:?}", s))),
        }
    }
}

/// Decode bytes as UTF-8, dropping whatever isn't
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return text,
        Err(err) => err.into_bytes(),
    };
    warn!("Input isn't valid UTF-8; dropping the bad bytes");
    let mut text = String::with_capacity(bytes.len());
    let mut rest = &bytes[..];
    loop {
        match str::from_utf8(rest) {
            Ok(valid) => {
                text.push_str(valid);
                return text;
            },
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(valid) = str::from_utf8(valid) {
                    text.push_str(valid);
                }
                // No error_len means the input stops partway through a character
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip..];
            }
        }
    }
}

/// Split already-read text into lines according to its format
pub fn to_lines(text: &str, format: InputFormat, stripper: &MarkupStripper) -> Vec<String> {
    match format {
        InputFormat::Text => text.lines().map(|line| line.to_string()).collect(),
        InputFormat::Html => {
            info!("Removing markup and furigana...");
            stripper.strip(text)
        }
    }
}

/// Read a whole file (or stdin, for `None`) as lines
///
/// `what` names the file in the error if it can't be opened.
pub fn read_lines(path: Option<&Path>, format: InputFormat, what: &'static str) -> Result<Vec<String>> {
    let mut bytes = vec![];
    match path {
        Some(path) => {
            let mut file = File::open(path)
                .map_err(|err| Error::MissingFile(what, Some(err)))?;
            file.read_to_end(&mut bytes)?;
        },
        None => {
            let stdin = io::stdin();
            let mut handle = stdin.lock();
            handle.read_to_end(&mut bytes)?;
        }
    }
    let text = decode_lossy(bytes);
    let stripper = MarkupStripper::new()?;
    Ok(to_lines(&text, format, &stripper))
}
