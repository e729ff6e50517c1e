//! Body Mass Index calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::WellnessError;

/// Heights above this are assumed to be centimeters rather than meters.
const CENTIMETER_THRESHOLD: Decimal = dec!(10);

/// Calculate BMI from weight in kilograms and height in meters.
///
/// Heights above 10 are treated as centimeters and converted. The result
/// is rounded to 2 decimal places.
pub fn calculate_bmi(weight: Decimal, height: Decimal) -> Result<Decimal, WellnessError> {
    if weight <= Decimal::ZERO {
        return Err(WellnessError::NotPositive("weight"));
    }
    if height <= Decimal::ZERO {
        return Err(WellnessError::NotPositive("height"));
    }

    let meters = if height > CENTIMETER_THRESHOLD {
        height / dec!(100)
    } else {
        height
    };

    Ok((weight / (meters * meters)).round_dp(2))
}
