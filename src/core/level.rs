//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity. Higher numeric value means more severe; an event
/// meets a threshold when `level >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    Unknown = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Fatal = 5,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Unknown => "UNKNOWN",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Map a raw integer to a level. Values outside the enumerated range
    /// come back as `Unknown`.
    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Fatal,
            _ => Level::Unknown,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Unknown => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Warn => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNKNOWN" => Ok(Level::Unknown),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total() {
        assert!(Level::Unknown < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_from_i32_in_range() {
        assert_eq!(Level::from_i32(1), Level::Debug);
        assert_eq!(Level::from_i32(3), Level::Warn);
        assert_eq!(Level::from_i32(5), Level::Fatal);
    }

    #[test]
    fn test_from_i32_out_of_range_is_unknown() {
        assert_eq!(Level::from_i32(-1), Level::Unknown);
        assert_eq!(Level::from_i32(0), Level::Unknown);
        assert_eq!(Level::from_i32(42), Level::Unknown);
        assert_eq!(Level::from_i32(42).as_str(), "UNKNOWN");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Fatal.to_string(), "FATAL");
        assert_eq!(Level::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!("WARNING".parse::<Level>(), Ok(Level::Warn));
        assert!("verbose".parse::<Level>().is_err());
    }
}
