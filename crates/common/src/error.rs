use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A record family name that matches none of the benchmarked shapes.
    UnknownFamily(String),

    /// An operation name that matches none of the measured access patterns.
    UnknownOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownFamily(name) => write!(f, "Unknown record family '{}'.", name),

            Error::UnknownOperation(name) => write!(f, "Unknown benchmark operation '{}'.", name),
        }
    }
}

impl std::error::Error for Error {}
