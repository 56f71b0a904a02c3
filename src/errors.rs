use std::{error::Error, fmt, io, num::ParseFloatError};

#[derive(Debug)]
pub enum HysteresisErrors {
    IoError(std::io::Error),
    CsvError(csv::Error),
    ParseFloatError(ParseFloatError),
    InvalidParameter { name: &'static str, value: f64 },
    InvalidVolume(f64),
    ZeroOrientation,
    StateLengthMismatch { expected: usize, found: usize },
    InvalidCase(String),
    InvalidVector(String),
    MissingParameters,
}

impl fmt::Display for HysteresisErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HysteresisErrors::IoError(e) => write!(f, "I/O error: {}", e),
            HysteresisErrors::CsvError(e) => write!(f, "CSV parsing error: {}", e),
            HysteresisErrors::ParseFloatError(e) => write!(f, "Float parsing error: {}", e),
            HysteresisErrors::InvalidParameter { name, value } => {
                write!(f, "Invalid J-A parameter {} = {}", name, value)
            }
            HysteresisErrors::InvalidVolume(v) => write!(f, "Rod volume must be positive, got {}", v),
            HysteresisErrors::ZeroOrientation => write!(f, "Rod orientation must not be the zero vector"),
            HysteresisErrors::StateLengthMismatch { expected, found } => write!(
                f,
                "Expected {} rod magnetizations, found {}",
                expected, found
            ),
            HysteresisErrors::InvalidCase(name) => {
                write!(f, "Case '{}' needs either h/dh_dt or all three vectors", name)
            }
            HysteresisErrors::InvalidVector(text) => {
                write!(f, "Invalid vector '{}', expected 3 components (x,y,z)", text)
            }
            HysteresisErrors::MissingParameters => write!(f, "Parameter file has no data row"),
        }
    }
}

impl Error for HysteresisErrors {}

impl From<io::Error> for HysteresisErrors {
    fn from(err: io::Error) -> Self {
        HysteresisErrors::IoError(err)
    }
}

impl From<csv::Error> for HysteresisErrors {
    fn from(err: csv::Error) -> Self {
        HysteresisErrors::CsvError(err)
    }
}

impl From<ParseFloatError> for HysteresisErrors {
    fn from(err: ParseFloatError) -> Self {
        HysteresisErrors::ParseFloatError(err)
    }
}
