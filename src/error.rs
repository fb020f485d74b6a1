use thiserror::Error;

/// The main error type for particlekit lookups.
///
/// These two kinds are the *expected* outcomes for malformed or unknown
/// particle symbols. The fuzz targets discard them; anything else a lookup
/// does wrong must surface as a panic so the fuzzer records it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParticleError {
    /// The input does not name a particle this library knows about, or asks
    /// for an element-level property of a particle that has no element.
    #[error("invalid particle {symbol:?}: {reason}")]
    InvalidParticle { symbol: String, reason: String },

    /// The particle is valid but the requested attribute has no tabulated
    /// value (e.g. the mass of a neutrino, or the standard atomic weight of
    /// a synthetic element).
    #[error("no {attribute} is tabulated for {symbol:?}")]
    MissingData {
        symbol: String,
        attribute: &'static str,
    },
}

impl ParticleError {
    pub(crate) fn invalid(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParticle {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(symbol: impl Into<String>, attribute: &'static str) -> Self {
        Self::MissingData {
            symbol: symbol.into(),
            attribute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_particle_message() {
        let err = ParticleError::invalid("xyz", "unknown symbol");
        assert_eq!(err.to_string(), "invalid particle \"xyz\": unknown symbol");
    }

    #[test]
    fn test_missing_data_message() {
        let err = ParticleError::missing("nu_e", "mass");
        assert_eq!(err.to_string(), "no mass is tabulated for \"nu_e\"");
    }
}
