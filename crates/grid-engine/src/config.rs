//! Grid configuration.
//!
//! Every field has a default, so an empty TOML document (or no document at all)
//! produces the layout of the original month view: Monday-first, six-week blocks,
//! 42 days appended per scroll, grey events, Greenwich local time.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Weeks shown in a month block.
pub const MONTH_BLOCK_WEEKS: usize = 6;

/// Days appended to the month view when the user scrolls past its end.
pub const ADD_DAYS_ON_SCROLL: usize = 42;

/// Color of events that do not carry one.
pub const DEFAULT_COLOR: &str = "grey";

/// Timezone used to decide which date is "today".
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First column of the month view.
    pub week_start: Weekday,
    pub month_block_weeks: usize,
    pub scroll_days: usize,
    pub default_color: String,
    /// IANA timezone name.
    pub timezone: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            week_start: Weekday::Mon,
            month_block_weeks: MONTH_BLOCK_WEEKS,
            scroll_days: ADD_DAYS_ON_SCROLL,
            default_color: DEFAULT_COLOR.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl GridConfig {
    /// Check the values a deserialized config cannot enforce by type alone.
    ///
    /// # Errors
    /// Returns `GridError::Config` for zero-sized blocks or scrolls, an empty
    /// default color, or an unknown timezone.
    pub fn validate(&self) -> Result<()> {
        if self.month_block_weeks == 0 {
            return Err(GridError::Config(
                "month_block_weeks must be at least 1".to_string(),
            ));
        }
        if self.scroll_days == 0 {
            return Err(GridError::Config(
                "scroll_days must be at least 1".to_string(),
            ));
        }
        if self.default_color.trim().is_empty() {
            return Err(GridError::Config("default_color is empty".to_string()));
        }
        self.tz()?;
        tracing::debug!(
            week_start = %self.week_start,
            weeks = self.month_block_weeks,
            timezone = %self.timezone,
            "grid config validated"
        );
        Ok(())
    }

    /// The civil date of `now` in the configured timezone.
    ///
    /// # Errors
    /// Returns `GridError::Config` if the timezone is not a valid IANA identifier.
    pub fn today_at(&self, now: DateTime<Utc>) -> Result<NaiveDate> {
        Ok(now.with_timezone(&self.tz()?).date_naive())
    }

    fn tz(&self) -> Result<chrono_tz::Tz> {
        self.timezone
            .parse()
            .map_err(|_| GridError::Config(format!("unknown timezone: {}", self.timezone)))
    }
}
