//! Sleep-score thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Score and status for a night's sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepAssessment {
    /// Score out of 100.
    pub score: u32,
    /// Short status line.
    pub status: &'static str,
}

/// Score hours of sleep.
///
/// Under 6 hours scores 50, 6-8 hours inclusive scores 90, more than
/// 8 hours scores 70.
pub fn assess_sleep(hours: Decimal) -> SleepAssessment {
    if hours < dec!(6) {
        SleepAssessment {
            score: 50,
            status: "Too little sleep",
        }
    } else if hours <= dec!(8) {
        SleepAssessment {
            score: 90,
            status: "Healthy sleep",
        }
    } else {
        SleepAssessment {
            score: 70,
            status: "Too much sleep",
        }
    }
}
