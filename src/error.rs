use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// No template registered under the given id.
    UnknownTemplate(String),
    /// A required template field was left blank.
    MissingField { template: String, field: String },
    /// Date string was not YYYY-MM-DD or named an impossible date.
    BadDate(String),
    /// Skin selector did not match any known form revision.
    UnknownSkin(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::UnknownTemplate(id) => write!(f, "unknown template '{id}'"),
            Error::MissingField { template, field } => {
                write!(f, "template '{template}' requires field '{field}'")
            }
            Error::BadDate(s) => write!(f, "invalid date '{s}' (expected YYYY-MM-DD)"),
            Error::UnknownSkin(s) => write!(f, "unknown form revision '{s}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
