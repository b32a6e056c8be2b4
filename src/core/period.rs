//! Calendar periods - the (year, month) granularity of obligation checks.
//!
//! Every recurring obligation (rent, mortgage) is owed once per [`Period`].
//! All period math lives here so the evaluator and the generator agree on
//! what "this month" means, including short months and leap years.

use chrono::{Datelike, NaiveDate};

/// French month names, indexed by `month - 1`. Labels produced by the
/// legacy system used the fr-FR locale and existing transaction
/// descriptions embed them, so they are kept verbatim.
const MONTH_NAMES_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// A calendar month: the unit at which recurring obligations are owed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    /// Calendar year
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
}

impl Period {
    /// Returns the period the given date falls in.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns true if the date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the period.
    ///
    /// # Panics
    /// If the period's month is outside 1-12. Periods built via
    /// [`Period::from_date`] / [`Period::pred`] are always valid.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| panic!("invalid period {}-{}", self.year, self.month))
    }

    /// Last day of the period, correct across month lengths and leap years.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self {
            year: next_year,
            month: next_month,
        }
        .first_day()
        .pred_opt()
        .unwrap_or_else(|| panic!("invalid period {}-{}", self.year, self.month))
    }

    /// Number of days in the period.
    #[must_use]
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    /// The date of the given day-of-month within this period, clamped to
    /// the month's length (billing day 31 in June resolves to June 30).
    ///
    /// The legacy implementation let out-of-range days overflow into the
    /// next month; clamping keeps the obligation inside its own period.
    #[must_use]
    pub fn day_clamped(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days());
        // Day is within the month by construction
        self.first_day().with_day(day).unwrap_or_else(|| {
            panic!("invalid day {day} in period {}-{}", self.year, self.month)
        })
    }

    /// Sortable period key, `"2024-06"`. Stored on automatic transactions
    /// as the uniqueness key.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Human-readable French label, `"juin 2024"`.
    #[must_use]
    pub fn label(&self) -> String {
        let name = MONTH_NAMES_FR
            .get(self.month as usize - 1)
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }

    /// The preceding period.
    #[must_use]
    pub fn pred(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The trailing `n` periods ending with this one, oldest first.
    /// Used by the cash-flow aggregation to bucket recent months.
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<Self> {
        let mut periods = Vec::with_capacity(n);
        let mut current = *self;
        for _ in 0..n {
            periods.push(current);
            current = current.pred();
        }
        periods.reverse();
        periods
    }
}
