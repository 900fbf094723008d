use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Reason a submitted product field was rejected.
///
/// The code name doubles as its string form and as the lookup key used by
/// translators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ErrorCode {
    MissingName,
    MissingPrice,
    PriceNotANumber,
    PriceNotGreaterThanZero,
    MissingQuantity,
    StockNotAnInteger,
    StockNotGreaterThanZero,
}

/// Ordered list of error codes produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ErrorCode>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failed rule. A rule already recorded is not added twice.
    pub fn push(&mut self, code: ErrorCode) {
        if !self.0.contains(&code) {
            self.0.push(code);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, code: ErrorCode) -> bool {
        self.0.contains(&code)
    }

    pub fn codes(&self) -> &[ErrorCode] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<ErrorCode> {
        self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<&'static str> = self.0.iter().map(|c| c.into()).collect();
        write!(f, "{}", codes.join(", "))
    }
}

impl From<Vec<ErrorCode>> for ValidationErrors {
    fn from(codes: Vec<ErrorCode>) -> Self {
        let mut errors = Self::new();
        for code in codes {
            errors.push(code);
        }
        errors
    }
}
