//! Pay categories, raw minute counts and the rounded hour breakdown.
//!
//! A shift is split into eight statutory categories along three axes:
//! regular vs overtime, day vs night, and ordinary vs special day
//! (Sunday or holiday). [`MinuteCounts`] holds the exact per-category
//! minutes and [`Breakdown`] the rounded hours derived from them.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places kept for each breakdown field.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// One of the eight statutory pay categories.
///
/// The serialized form is the statutory code (`"RDO"`, `"HENDF"`, ...).
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::PayCategory;
/// use rust_decimal::Decimal;
///
/// let category = PayCategory::Rndf;
/// assert_eq!(category.code(), "RNDF");
/// assert_eq!(category.multiplier(), Decimal::new(210, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayCategory {
    /// Regular time, day, ordinary day.
    Rdo,
    /// Regular time, night, ordinary day.
    Rno,
    /// Regular time, day, Sunday or holiday.
    Rddf,
    /// Regular time, night, Sunday or holiday.
    Rndf,
    /// Overtime, day, ordinary day.
    Hedo,
    /// Overtime, night, ordinary day.
    Heno,
    /// Overtime, day, Sunday or holiday.
    Heddf,
    /// Overtime, night, Sunday or holiday.
    Hendf,
}

impl PayCategory {
    /// All categories in breakdown order.
    pub const ALL: [PayCategory; 8] = [
        PayCategory::Rdo,
        PayCategory::Rno,
        PayCategory::Rddf,
        PayCategory::Rndf,
        PayCategory::Hedo,
        PayCategory::Heno,
        PayCategory::Heddf,
        PayCategory::Hendf,
    ];

    /// Returns the surcharge multiplier applied to the base rate.
    pub const fn multiplier(self) -> Decimal {
        match self {
            PayCategory::Rdo => Decimal::from_parts(100, 0, 0, false, 2),
            PayCategory::Rno => Decimal::from_parts(135, 0, 0, false, 2),
            PayCategory::Rddf => Decimal::from_parts(175, 0, 0, false, 2),
            PayCategory::Rndf => Decimal::from_parts(210, 0, 0, false, 2),
            PayCategory::Hedo => Decimal::from_parts(125, 0, 0, false, 2),
            PayCategory::Heno => Decimal::from_parts(175, 0, 0, false, 2),
            PayCategory::Heddf => Decimal::from_parts(200, 0, 0, false, 2),
            PayCategory::Hendf => Decimal::from_parts(250, 0, 0, false, 2),
        }
    }

    /// Returns the statutory code, e.g. `"RNDF"`.
    pub const fn code(self) -> &'static str {
        match self {
            PayCategory::Rdo => "RDO",
            PayCategory::Rno => "RNO",
            PayCategory::Rddf => "RDDF",
            PayCategory::Rndf => "RNDF",
            PayCategory::Hedo => "HEDO",
            PayCategory::Heno => "HENO",
            PayCategory::Heddf => "HEDDF",
            PayCategory::Hendf => "HENDF",
        }
    }

    /// Returns a human-readable description of the category.
    pub const fn description(self) -> &'static str {
        match self {
            PayCategory::Rdo => "Regular day hours on an ordinary day",
            PayCategory::Rno => "Regular night hours on an ordinary day",
            PayCategory::Rddf => "Regular day hours on a Sunday or holiday",
            PayCategory::Rndf => "Regular night hours on a Sunday or holiday",
            PayCategory::Hedo => "Overtime day hours on an ordinary day",
            PayCategory::Heno => "Overtime night hours on an ordinary day",
            PayCategory::Heddf => "Overtime day hours on a Sunday or holiday",
            PayCategory::Hendf => "Overtime night hours on a Sunday or holiday",
        }
    }

    /// Whether the category covers overtime minutes.
    pub const fn is_overtime(self) -> bool {
        matches!(
            self,
            PayCategory::Hedo | PayCategory::Heno | PayCategory::Heddf | PayCategory::Hendf
        )
    }

    /// Whether the category covers night-window minutes.
    pub const fn is_night(self) -> bool {
        matches!(
            self,
            PayCategory::Rno | PayCategory::Rndf | PayCategory::Heno | PayCategory::Hendf
        )
    }

    /// Whether the category covers minutes on a Sunday or holiday.
    pub const fn is_special_day(self) -> bool {
        matches!(
            self,
            PayCategory::Rddf | PayCategory::Rndf | PayCategory::Heddf | PayCategory::Hendf
        )
    }
}

impl std::fmt::Display for PayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Exact per-category minute counters for one shift.
///
/// These are the pre-rounding values; their sum always equals the
/// number of whole minutes in the shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MinuteCounts {
    /// Regular day minutes on an ordinary day.
    pub rdo: u64,
    /// Regular night minutes on an ordinary day.
    pub rno: u64,
    /// Regular day minutes on a special day.
    pub rddf: u64,
    /// Regular night minutes on a special day.
    pub rndf: u64,
    /// Overtime day minutes on an ordinary day.
    pub hedo: u64,
    /// Overtime night minutes on an ordinary day.
    pub heno: u64,
    /// Overtime day minutes on a special day.
    pub heddf: u64,
    /// Overtime night minutes on a special day.
    pub hendf: u64,
}

impl MinuteCounts {
    /// Returns the minute count for a category.
    pub fn get(&self, category: PayCategory) -> u64 {
        match category {
            PayCategory::Rdo => self.rdo,
            PayCategory::Rno => self.rno,
            PayCategory::Rddf => self.rddf,
            PayCategory::Rndf => self.rndf,
            PayCategory::Hedo => self.hedo,
            PayCategory::Heno => self.heno,
            PayCategory::Heddf => self.heddf,
            PayCategory::Hendf => self.hendf,
        }
    }

    fn slot_mut(&mut self, category: PayCategory) -> &mut u64 {
        match category {
            PayCategory::Rdo => &mut self.rdo,
            PayCategory::Rno => &mut self.rno,
            PayCategory::Rddf => &mut self.rddf,
            PayCategory::Rndf => &mut self.rndf,
            PayCategory::Hedo => &mut self.hedo,
            PayCategory::Heno => &mut self.heno,
            PayCategory::Heddf => &mut self.heddf,
            PayCategory::Hendf => &mut self.hendf,
        }
    }

    /// Adds one minute to a category.
    pub fn increment(&mut self, category: PayCategory) {
        self.add(category, 1);
    }

    /// Adds `minutes` to a category.
    pub fn add(&mut self, category: PayCategory, minutes: u64) {
        *self.slot_mut(category) += minutes;
    }

    /// Total minutes across all categories.
    pub fn total(&self) -> u64 {
        PayCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Iterates over `(category, minutes)` pairs in breakdown order.
    pub fn iter(&self) -> impl Iterator<Item = (PayCategory, u64)> + '_ {
        PayCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Converts the counters into rounded hours.
    ///
    /// Each field is divided by 60 and rounded to two decimal places
    /// (midpoint away from zero) independently of the others.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay_engine::models::{MinuteCounts, PayCategory};
    /// use rust_decimal::Decimal;
    ///
    /// let mut counts = MinuteCounts::default();
    /// counts.add(PayCategory::Rdo, 480);
    /// counts.add(PayCategory::Hedo, 10);
    ///
    /// let breakdown = counts.to_breakdown();
    /// assert_eq!(breakdown.rdo, Decimal::new(800, 2));
    /// assert_eq!(breakdown.hedo, Decimal::new(17, 2)); // 0.1666... -> 0.17
    /// ```
    pub fn to_breakdown(&self) -> Breakdown {
        Breakdown {
            rdo: minutes_to_hours(self.rdo),
            rno: minutes_to_hours(self.rno),
            rddf: minutes_to_hours(self.rddf),
            rndf: minutes_to_hours(self.rndf),
            hedo: minutes_to_hours(self.hedo),
            heno: minutes_to_hours(self.heno),
            heddf: minutes_to_hours(self.heddf),
            hendf: minutes_to_hours(self.hendf),
        }
    }
}

/// Converts a minute count to hours rounded to two decimal places.
pub fn minutes_to_hours(minutes: u64) -> Decimal {
    let mut hours = (Decimal::from(minutes) / MINUTES_PER_HOUR)
        .round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    hours.rescale(HOURS_DECIMAL_PLACES);
    hours
}

/// Hours worked per pay category, each rounded to two decimal places.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{Breakdown, PayCategory};
/// use rust_decimal::Decimal;
///
/// let breakdown = Breakdown {
///     rdo: Decimal::new(800, 2),
///     hedo: Decimal::new(200, 2),
///     ..Breakdown::default()
/// };
/// assert_eq!(breakdown.get(PayCategory::Hedo), Decimal::new(2, 0));
/// assert_eq!(breakdown.total_hours(), Decimal::new(10, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Breakdown {
    /// Regular day hours on an ordinary day.
    pub rdo: Decimal,
    /// Regular night hours on an ordinary day.
    pub rno: Decimal,
    /// Regular day hours on a special day.
    pub rddf: Decimal,
    /// Regular night hours on a special day.
    pub rndf: Decimal,
    /// Overtime day hours on an ordinary day.
    pub hedo: Decimal,
    /// Overtime night hours on an ordinary day.
    pub heno: Decimal,
    /// Overtime day hours on a special day.
    pub heddf: Decimal,
    /// Overtime night hours on a special day.
    pub hendf: Decimal,
}

impl Breakdown {
    /// Returns the hours recorded for a category.
    pub fn get(&self, category: PayCategory) -> Decimal {
        match category {
            PayCategory::Rdo => self.rdo,
            PayCategory::Rno => self.rno,
            PayCategory::Rddf => self.rddf,
            PayCategory::Rndf => self.rndf,
            PayCategory::Hedo => self.hedo,
            PayCategory::Heno => self.heno,
            PayCategory::Heddf => self.heddf,
            PayCategory::Hendf => self.hendf,
        }
    }

    /// Iterates over `(category, hours)` pairs in breakdown order.
    pub fn iter(&self) -> impl Iterator<Item = (PayCategory, Decimal)> + '_ {
        PayCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of the rounded hours of all categories.
    ///
    /// Because each field is rounded on its own, this may differ from the
    /// exact shift length by a few hundredths of an hour.
    pub fn total_hours(&self) -> Decimal {
        self.iter().map(|(_, hours)| hours).sum()
    }

    /// Sum of the rounded overtime hours.
    pub fn overtime_hours(&self) -> Decimal {
        self.iter()
            .filter(|(category, _)| category.is_overtime())
            .map(|(_, hours)| hours)
            .sum()
    }
}
