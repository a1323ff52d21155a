//! Complaint categories
//!
//! The category table is fixed: eight categories in a stable declaration
//! order plus the `Other` sentinel. Declaration order is the tie-break when
//! two categories match the same number of keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PriceIssues,
    QualityIssues,
    WeightQuantity,
    ExpiredProducts,
    HealthIssues,
    Packaging,
    Service,
    Fraud,
    /// No category keyword matched
    Other,
}

impl Category {
    /// The eight scored categories, in declaration order
    pub const SCORED: [Category; 8] = [
        Category::PriceIssues,
        Category::QualityIssues,
        Category::WeightQuantity,
        Category::ExpiredProducts,
        Category::HealthIssues,
        Category::Packaging,
        Category::Service,
        Category::Fraud,
    ];

    /// English display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::PriceIssues => "Price Issues",
            Self::QualityIssues => "Quality Issues",
            Self::WeightQuantity => "Weight/Quantity",
            Self::ExpiredProducts => "Expired Products",
            Self::HealthIssues => "Health Issues",
            Self::Packaging => "Packaging",
            Self::Service => "Service",
            Self::Fraud => "Fraud",
            Self::Other => "Other",
        }
    }

    /// Bengali display label, as shown to complaint officers
    pub fn bengali_label(&self) -> &'static str {
        match self {
            Self::PriceIssues => "মূল্য সংক্রান্ত",
            Self::QualityIssues => "গুণগত মান",
            Self::WeightQuantity => "ওজন/পরিমাণ",
            Self::ExpiredProducts => "মেয়াদোত্তীর্ণ",
            Self::HealthIssues => "স্বাস্থ্য সমস্যা",
            Self::Packaging => "প্যাকেজিং",
            Self::Service => "পরিষেবা",
            Self::Fraud => "প্রতারণা",
            Self::Other => "অন্যান্য",
        }
    }

    /// Categories that raise complaint priority
    pub fn is_high_priority(&self) -> bool {
        matches!(
            self,
            Self::HealthIssues | Self::ExpiredProducts | Self::Fraud
        )
    }

    /// Stable identifier used in config files
    pub fn id(&self) -> &'static str {
        match self {
            Self::PriceIssues => "price_issues",
            Self::QualityIssues => "quality_issues",
            Self::WeightQuantity => "weight_quantity",
            Self::ExpiredProducts => "expired_products",
            Self::HealthIssues => "health_issues",
            Self::Packaging => "packaging",
            Self::Service => "service",
            Self::Fraud => "fraud",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts the id, the English label, or the Bengali label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::SCORED
            .iter()
            .chain(std::iter::once(&Self::Other))
            .find(|c| {
                c.id() == needle
                    || c.label().eq_ignore_ascii_case(needle)
                    || c.bengali_label() == needle
            })
            .copied()
            .ok_or_else(|| Error::UnknownLabel {
                kind: "category",
                value: s.to_string(),
            })
    }
}
