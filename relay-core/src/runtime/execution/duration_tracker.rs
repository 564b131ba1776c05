use chrono::{DateTime, Duration, Utc};
use relay_common::prelude::*;

use crate::config::Locale;
use crate::model::CirculationHistory;

pub struct DurationTracker;

impl DurationTracker {
    /// Time spent since the most recent record left from another node, or since the work order
    /// was created when there is none.
    pub fn cost_duration(
        history: &[CirculationHistory],
        source_id: &str,
        created_at: DateTime<Utc>,
        now: DateTime<Utc>,
        locale: Locale,
    ) -> InlineStr {
        let since = history
            .iter()
            .find(|x| !x.source.eq(source_id))
            .map(|x| x.created_at)
            .unwrap_or(created_at);
        Self::format(now - since, locale)
    }

    /// Rounded to the nearest minute, half a minute rounds up. Negative spans count as zero.
    pub fn format(elapsed: Duration, locale: Locale) -> InlineStr {
        let minutes = (elapsed.num_milliseconds().max(0) + 30_000) / 60_000;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        match locale {
            Locale::En => format!("{} hours {} minutes", hours, minutes),
            Locale::Zh => format!("{:02}小时 {:02}分钟", hours, minutes),
        }
        .into()
    }
}
