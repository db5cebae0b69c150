use std::fmt;
use std::str::FromStr;

/// Which embedding backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Hashing,
    Tei,
    OpenAi,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Hashing => write!(f, "hashing"),
            ProviderKind::Tei => write!(f, "tei"),
            ProviderKind::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hashing" => Ok(ProviderKind::Hashing),
            "tei" => Ok(ProviderKind::Tei),
            "openai" => Ok(ProviderKind::OpenAi),
            _ => Err(format!("Unknown embedding provider: {s}")),
        }
    }
}
