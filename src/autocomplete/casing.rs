use crate::*;
use std::str::FromStr;

/// How keyword suggestions are cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum KeywordCasing {
    #[display("upper")]
    Upper,
    #[display("lower")]
    Lower,
    /// Follow the casing of the word being typed: upper when it is empty or
    /// already upper-case, lower otherwise.
    #[default]
    #[display("auto")]
    Auto,
}

impl KeywordCasing {
    pub fn apply(self, keyword: &str, typed: &str) -> String {
        let upper = match self {
            KeywordCasing::Upper => true,
            KeywordCasing::Lower => false,
            KeywordCasing::Auto => typed.is_empty() || typed == typed.to_uppercase(),
        };
        if upper {
            keyword.to_uppercase()
        } else {
            keyword.to_lowercase()
        }
    }
}

impl FromStr for KeywordCasing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upper" => Ok(KeywordCasing::Upper),
            "lower" => Ok(KeywordCasing::Lower),
            "auto" => Ok(KeywordCasing::Auto),
            other => Err(Error::Config(format!(
                "unknown keyword casing {other:?}, expected upper, lower or auto"
            ))),
        }
    }
}
