//! Calorie-burn estimation from MET values.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::{Display, EnumString};

use super::WellnessError;

/// Exercise intensity, keyed by the `activity_level` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ActivityLevel {
    Light,
    Moderate,
    Vigorous,
}

impl ActivityLevel {
    /// Metabolic Equivalent of Task for this intensity.
    pub fn met(self) -> Decimal {
        match self {
            Self::Light => dec!(3.5),
            Self::Moderate => dec!(5.0),
            Self::Vigorous => dec!(8.0),
        }
    }
}

/// Estimate calories burned: met × weight × duration / 60, rounded to
/// 2 decimal places. Weight is kilograms, duration minutes.
pub fn calories_burned(
    weight: Decimal,
    duration: Decimal,
    activity_level: &str,
) -> Result<Decimal, WellnessError> {
    if weight <= Decimal::ZERO {
        return Err(WellnessError::NotPositive("weight"));
    }
    if duration <= Decimal::ZERO {
        return Err(WellnessError::NotPositive("duration"));
    }

    let level: ActivityLevel = activity_level
        .parse()
        .map_err(|_| WellnessError::UnknownActivityLevel(activity_level.to_string()))?;

    Ok((level.met() * weight * duration / dec!(60)).round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn met_table_matches_intensities() {
        assert_eq!(ActivityLevel::Light.met(), dec!(3.5));
        assert_eq!(ActivityLevel::Moderate.met(), dec!(5.0));
        assert_eq!(ActivityLevel::Vigorous.met(), dec!(8.0));
    }

    #[test]
    fn parses_lowercase_level_names() {
        assert_eq!("light".parse::<ActivityLevel>(), Ok(ActivityLevel::Light));
        assert_eq!(
            "vigorous".parse::<ActivityLevel>(),
            Ok(ActivityLevel::Vigorous)
        );
        assert!("extreme".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn computes_calories_for_each_level() {
        // 5.0 * 70 * 45 / 60 = 262.5
        assert_eq!(
            calories_burned(dec!(70), dec!(45), "moderate").expect("calories"),
            dec!(262.5)
        );
        // 8.0 * 80 * 30 / 60 = 320
        assert_eq!(
            calories_burned(dec!(80), dec!(30), "vigorous").expect("calories"),
            dec!(320)
        );
        // 3.5 * 60 * 20 / 60 = 70
        assert_eq!(
            calories_burned(dec!(60), dec!(20), "light").expect("calories"),
            dec!(70)
        );
    }

    #[test]
    fn rejects_unknown_activity_level() {
        assert_eq!(
            calories_burned(dec!(70), dec!(45), "extreme"),
            Err(WellnessError::UnknownActivityLevel("extreme".to_string()))
        );
    }

    #[test]
    fn rejects_non_positive_inputs_before_level_lookup() {
        assert_eq!(
            calories_burned(dec!(0), dec!(45), "extreme"),
            Err(WellnessError::NotPositive("weight"))
        );
        assert_eq!(
            calories_burned(dec!(70), dec!(-1), "moderate"),
            Err(WellnessError::NotPositive("duration"))
        );
    }
}
