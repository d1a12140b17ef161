use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyAlphabet,
    SymbolNotInTable(String),
    TruncatedCode,
    InvalidBit(char),
    DecodeFromSingleLeafTree,
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadInputFile(std::io::Error),
    FailedToWriteOutputFile(std::io::Error),
    VerificationFailed,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => {
                write!(f, "Can not build a code tree from an empty frequency table")
            }
            Self::SymbolNotInTable(symbol) => {
                write!(f, "Symbol {} has no entry in the code table", symbol)
            }
            Self::TruncatedCode => {
                write!(f, "Bit string ended in the middle of a code word")
            }
            Self::InvalidBit(token) => {
                write!(f, "Bit string token '{}' is neither '0' nor '1'", token)
            }
            Self::DecodeFromSingleLeafTree => {
                write!(
                    f,
                    "A tree consisting of a single leaf can not consume a '1' bit"
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(error) => {
                write!(f, "Failed to read input file: {}", error)
            }
            Self::FailedToWriteOutputFile(error) => {
                write!(f, "Failed to write output file: {}", error)
            }
            Self::VerificationFailed => {
                write!(f, "Decoded symbol sequence does not match the input")
            }
        }
    }
}

impl std::error::Error for Error {}
