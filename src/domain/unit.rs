//! Size units for byte quantities

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary size unit used to present `JobBytes`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[value(rename_all = "UPPER")]
pub enum SizeUnit {
    Mb,
    Gb,
    #[default]
    Tb,
    Pb,
    Eb,
}

impl SizeUnit {
    /// Number of bytes in one unit
    pub const fn factor(self) -> u64 {
        match self {
            Self::Mb => 1 << 20,
            Self::Gb => 1 << 30,
            Self::Tb => 1 << 40,
            Self::Pb => 1 << 50,
            Self::Eb => 1 << 60,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mb => write!(f, "MB"),
            Self::Gb => write!(f, "GB"),
            Self::Tb => write!(f, "TB"),
            Self::Pb => write!(f, "PB"),
            Self::Eb => write!(f, "EB"),
        }
    }
}
