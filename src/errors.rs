//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;
use regex;

/// Type alias for jstats errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for many kinds of errors occuring around an analysis
///
/// The coverage computation itself never fails; these all come from reading inputs.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    RegexError(regex::Error),
    MissingFile(&'static str, Option<io::Error>),
    UnsupportedInput(String),
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::RegexError(ref err) => write!(f, "Regex error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? Typo? The OS error was: ",
                    info)?;
                if let &Some(ref err) = opt_err { write!(f, "{}", err) }
                else { write!(f, "Unknown") }
            },
            Error::UnsupportedInput(ref info) => write!(f, "Unsupported input: {}", info),
            Error::Other(ref info) => write!(f, "{}", info),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::RegexError(ref err) => Some(err),
            Error::MissingFile(_, Some(ref err)) => Some(err),
            Error::MissingFile(_, None) => None,
            Error::UnsupportedInput(_) => None,
            Error::Other(_) => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::RegexError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::IOError(err) => err,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
