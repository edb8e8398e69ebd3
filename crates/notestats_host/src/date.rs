use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("invalid date format pattern: {0:?}")]
    InvalidPattern(String),
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Formats the clock's current date with a chrono `strftime` pattern.
///
/// The pattern is validated up front; chrono would otherwise panic while
/// rendering an unknown specifier. Specifiers that need a timezone (`%z`,
/// `%Z`) fail at render time and are reported the same way.
pub fn format_date(format: &str, clock: &dyn Clock) -> Result<String, DateFormatError> {
    if format.trim().is_empty() {
        return Err(DateFormatError::InvalidPattern(format.to_string()));
    }
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError::InvalidPattern(format.to_string()));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", clock.now().format_with_items(items.into_iter()))
        .map_err(|_| DateFormatError::InvalidPattern(format.to_string()))?;
    Ok(rendered)
}
