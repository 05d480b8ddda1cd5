//! Credited-hours result type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The regular/overtime hour credits produced for one completed session.
///
/// Both fields are non-negative and rounded to 2 decimal places at
/// construction. This is the calculator's only output type.
///
/// # Example
///
/// ```
/// use attendance_engine::models::HoursResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = HoursResult::new(
///     Decimal::from_str("3.5").unwrap(),
///     Decimal::from_str("1.5833").unwrap(),
/// );
/// assert_eq!(hours.overtime.to_string(), "1.58");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursResult {
    /// Hours credited toward the 8-hour daily requirement.
    pub regular: Decimal,
    /// Hours never counted toward the 8-hour requirement.
    pub overtime: Decimal,
}

impl HoursResult {
    /// Creates a result, clamping negatives to zero and rounding to 2 dp.
    pub fn new(regular: Decimal, overtime: Decimal) -> Self {
        Self {
            regular: regular.max(Decimal::ZERO).round_dp(2),
            overtime: overtime.max(Decimal::ZERO).round_dp(2),
        }
    }

    /// A result with zero regular and zero overtime hours.
    pub fn zero() -> Self {
        Self {
            regular: Decimal::ZERO,
            overtime: Decimal::ZERO,
        }
    }

    /// The sum of regular and overtime hours.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime
    }
}
