use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("source contains no symbols")]
    EmptyInput,
    #[error("source has more than {limit} symbols")]
    Oversize { limit: u32 },
    #[error("not a valid compressed file: {0}")]
    Format(&'static str),
    #[error("invalid utf-8 sequence starting with byte {0:#04x}")]
    InvalidEncoding(u8),
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),
    #[error("source changed while compressing, expected {expected} symbols but read {actual}")]
    SourceChanged { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, HuffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HuffError::EmptyInput.to_string(), "source contains no symbols");
        assert_eq!(
            HuffError::Format("missing magic byte").to_string(),
            "not a valid compressed file: missing magic byte"
        );
        assert_eq!(
            HuffError::InvalidEncoding(0xff).to_string(),
            "invalid utf-8 sequence starting with byte 0xff"
        );
        assert_eq!(
            HuffError::Oversize { limit: 10 }.to_string(),
            "source has more than 10 symbols"
        );
    }

    #[test]
    fn test_io_conversion() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(HuffError::Io(_))));
    }
}
