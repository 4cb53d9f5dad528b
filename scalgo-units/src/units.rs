//! Unit alias tables, one per category

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::TimeUnit;

/// Global time alias table
pub static TIME_UNITS: LazyLock<HashMap<&'static str, TimeUnit>> = LazyLock::new(time_aliases);

/// Look up a time unit by any of its spellings
pub(crate) fn lookup_time_unit(input: &str) -> Option<TimeUnit> {
    TIME_UNITS.get(input.trim().to_lowercase().as_str()).copied()
}

fn time_aliases() -> HashMap<&'static str, TimeUnit> {
    let table: [(&'static str, TimeUnit); 32] = [
        // Second
        ("second", TimeUnit::Second),
        ("seconds", TimeUnit::Second),
        ("sec", TimeUnit::Second),
        ("s", TimeUnit::Second),
        // Minute
        ("minute", TimeUnit::Minute),
        ("minutes", TimeUnit::Minute),
        ("min", TimeUnit::Minute),
        ("m", TimeUnit::Minute),
        // Hour
        ("hour", TimeUnit::Hour),
        ("hours", TimeUnit::Hour),
        ("hr", TimeUnit::Hour),
        ("h", TimeUnit::Hour),
        // Day
        ("day", TimeUnit::Day),
        ("days", TimeUnit::Day),
        ("d", TimeUnit::Day),
        // Week
        ("week", TimeUnit::Week),
        ("weeks", TimeUnit::Week),
        ("wk", TimeUnit::Week),
        ("w", TimeUnit::Week),
        // Month
        ("month", TimeUnit::Month),
        ("months", TimeUnit::Month),
        ("mo", TimeUnit::Month),
        // Year
        ("year", TimeUnit::Year),
        ("years", TimeUnit::Year),
        ("yr", TimeUnit::Year),
        ("y", TimeUnit::Year),
        // Longer spans
        ("decade", TimeUnit::Decade),
        ("decades", TimeUnit::Decade),
        ("century", TimeUnit::Century),
        ("centuries", TimeUnit::Century),
        ("millennium", TimeUnit::Millennium),
        ("millennia", TimeUnit::Millennium),
    ];
    table.into_iter().collect()
}
