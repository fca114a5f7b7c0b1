use serde::{Deserialize, Serialize};
use std::fmt;

/// Buyer channel a price is resolved for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Individual retail buyers
    Personalized,
    /// Bulk / B2B buyers
    Corporate,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Personalized => "personalized",
            Platform::Corporate => "corporate",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Platform scope of a discount program
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PromotionPlatform {
    Personalized,
    Corporate,
    Both,
}

impl PromotionPlatform {
    /// Whether a program with this scope applies to a resolution on `platform`
    pub fn covers(&self, platform: Platform) -> bool {
        matches!(
            (self, platform),
            (PromotionPlatform::Both, _)
                | (PromotionPlatform::Personalized, Platform::Personalized)
                | (PromotionPlatform::Corporate, Platform::Corporate)
        )
    }
}

impl From<Platform> for PromotionPlatform {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Personalized => PromotionPlatform::Personalized,
            Platform::Corporate => PromotionPlatform::Corporate,
        }
    }
}
