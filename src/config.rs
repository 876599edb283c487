// src/config.rs
//! 走査設定

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use classify_lines_shared_kernel::ClassifyError;

/// 対象言語 (方言)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ruby,
    /// C / C++ (非ネストの `/* */` と `//`)
    CFamily,
}

impl Language {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ruby => "ruby",
            Self::CFamily => "c",
        }
    }
}

impl FromStr for Language {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ruby" | "rb" => Ok(Self::Ruby),
            "c" | "cpp" | "c++" | "cc" | "cxx" => Ok(Self::CFamily),
            other => Err(ClassifyError::UnknownLanguage {
                name: other.to_string(),
            }),
        }
    }
}

/// 走査設定
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub language: Language,
}

impl ScanConfig {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self { language }
    }
}
