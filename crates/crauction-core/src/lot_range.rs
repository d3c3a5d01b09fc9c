use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Inclusive window of lot numbers to keep, parsed from `"A-B"` or `"A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotRange {
    start: i64,
    end: i64,
}

impl LotRange {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLotRange`] if `start > end`.
    pub fn new(start: i64, end: i64) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidLotRange {
                input: format!("{start}-{end}"),
                reason: "start is greater than end".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn contains(&self, lot_number: i64) -> bool {
        (self.start..=self.end).contains(&lot_number)
    }

    #[must_use]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i64 {
        self.end
    }
}

impl fmt::Display for LotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for LotRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ConfigError::InvalidLotRange {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let parse = |part: &str| -> Result<i64, ConfigError> {
            part.trim()
                .parse::<i64>()
                .map_err(|e| invalid(&format!("\"{}\" is not a lot number: {e}", part.trim())))
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("empty range"));
        }

        // Split on the first '-' after position 0 so a leading minus sign is
        // not mistaken for the separator.
        let separator = trimmed
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(i, _)| i);
        match separator {
            Some(sep) => {
                let start = parse(&trimmed[..sep])?;
                let end = parse(&trimmed[sep + 1..])?;
                Self::new(start, end).map_err(|_| invalid("start is greater than end"))
            }
            None => {
                let single = parse(trimmed)?;
                Ok(Self {
                    start: single,
                    end: single,
                })
            }
        }
    }
}
