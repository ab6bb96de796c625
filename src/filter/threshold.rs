use std::fmt;
use std::str::FromStr;

use crate::error::FilterTokenError;

/// The closed vocabulary offered by the threshold selector.
pub const THRESHOLD_TOKENS: [&str; 4] = ["", ">10", ">100", ">200"];

/// Numeric lower bound on item ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThresholdFilter {
    #[default]
    None,
    GreaterThan(u64),
}

impl ThresholdFilter {
    pub fn admits(self, id: u64) -> bool {
        match self {
            Self::None => true,
            Self::GreaterThan(bound) => id > bound,
        }
    }

    /// The selector options, in display order.
    pub fn choices() -> impl Iterator<Item = ThresholdFilter> {
        THRESHOLD_TOKENS
            .iter()
            .filter_map(|token| token.parse::<ThresholdFilter>().ok())
    }

    /// The option after this one in the selector, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// The option before this one in the selector, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        self.step(THRESHOLD_TOKENS.len() - 1)
    }

    fn step(self, offset: usize) -> Self {
        let choices: Vec<_> = Self::choices().collect();
        let current = choices.iter().position(|choice| *choice == self).unwrap_or(0);
        choices[(current + offset) % choices.len()]
    }

    /// Human-readable label for the selector.
    pub fn label(self) -> String {
        match self {
            Self::None => "No filter".to_string(),
            Self::GreaterThan(bound) => format!(">{bound}"),
        }
    }
}

impl FromStr for ThresholdFilter {
    type Err = FilterTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(Self::None);
        }
        let digits = token
            .strip_prefix('>')
            .ok_or_else(|| FilterTokenError::MissingOperator(token.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(FilterTokenError::InvalidBound(token.to_string()));
        }
        let bound = digits
            .parse()
            .map_err(|_| FilterTokenError::InvalidBound(token.to_string()))?;
        if !THRESHOLD_TOKENS.contains(&token) {
            return Err(FilterTokenError::Unsupported(token.to_string()));
        }
        Ok(Self::GreaterThan(bound))
    }
}

impl fmt::Display for ThresholdFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::GreaterThan(bound) => write!(f, ">{bound}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_vocabulary_tokens() {
        assert_eq!("".parse::<ThresholdFilter>(), Ok(ThresholdFilter::None));
        assert_eq!(">10".parse::<ThresholdFilter>(), Ok(ThresholdFilter::GreaterThan(10)));
        assert_eq!(" >200 ".parse::<ThresholdFilter>(), Ok(ThresholdFilter::GreaterThan(200)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(
            "10".parse::<ThresholdFilter>(),
            Err(FilterTokenError::MissingOperator("10".into()))
        );
        assert_eq!(
            ">".parse::<ThresholdFilter>(),
            Err(FilterTokenError::InvalidBound(">".into()))
        );
        assert_eq!(
            ">-5".parse::<ThresholdFilter>(),
            Err(FilterTokenError::InvalidBound(">-5".into()))
        );
    }

    #[test]
    fn rejects_bounds_outside_the_selector() {
        assert_eq!(
            ">5".parse::<ThresholdFilter>(),
            Err(FilterTokenError::Unsupported(">5".into()))
        );
        assert_eq!(
            ">0010".parse::<ThresholdFilter>(),
            Err(FilterTokenError::Unsupported(">0010".into()))
        );
        assert_eq!(ThresholdFilter::choices().count(), THRESHOLD_TOKENS.len());
    }

    #[test]
    fn selector_cycles_through_closed_set() {
        let mut filter = ThresholdFilter::None;
        let mut seen = Vec::new();
        for _ in 0..THRESHOLD_TOKENS.len() {
            filter = filter.next();
            seen.push(filter.to_string());
        }
        assert_eq!(seen, vec![">10", ">100", ">200", ""]);
        assert_eq!(ThresholdFilter::None.previous(), ThresholdFilter::GreaterThan(200));
    }

    #[test]
    fn admits_strictly_greater_ids() {
        let filter = ThresholdFilter::GreaterThan(100);
        assert!(!filter.admits(100));
        assert!(filter.admits(101));
        assert!(ThresholdFilter::None.admits(0));
    }
}
