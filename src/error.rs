#[derive(Debug)]
pub enum ContractViolation {
    MissingProperty(&'static str),
    InvalidOptions(serde_json::Error),
}

impl std::error::Error for ContractViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingProperty(_) => None,
            Self::InvalidOptions(err) => Some(err),
        }
    }
}

impl std::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::MissingProperty(name) => write!(f, "Required property is missing: {name}",),
            Self::InvalidOptions(err) => write!(f, "Invalid component options: {err}",),
        }
    }
}

impl From<serde_json::Error> for ContractViolation {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err)
    }
}
