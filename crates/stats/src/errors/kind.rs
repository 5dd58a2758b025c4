/// Classification of pipeline errors.
///
/// | Kind | Status | Meaning |
/// |------|--------|---------|
/// | `Validation` | 400 | Missing or malformed query parameters |
/// | `Resolution` | 400 | Player identifier not found |
/// | `Extraction` | 400 | Expected page structure absent |
/// | `Parse` | 400 | Embedded data blob malformed |
/// | `Network` | 500 | Fetch failed |
/// | `Internal` | 500 | Unexpected failure |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Validation,
    Resolution,
    Network,
    Extraction,
    Parse,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            Self::Validation | Self::Resolution | Self::Extraction | Self::Parse => 400,
            Self::Network | Self::Internal => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Resolution => "resolution",
            Self::Network => "network",
            Self::Extraction => "extraction",
            Self::Parse => "parse",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
