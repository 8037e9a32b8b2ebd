use std::{collections::BTreeMap, fmt, str::FromStr};

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Slot key to assigned recipe id. `None` and `""` both mean "nothing planned".
pub type ScheduleMap = BTreeMap<String, Option<String>>;

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// Address of one schedule assignment: `Monday-Breakfast` or `W2-Monday-Breakfast`.
///
/// Ordering is chronological: week, then day, then meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub week: Option<u8>,
    pub day: Day,
    pub meal: MealType,
}

impl SlotKey {
    pub fn new(day: Day, meal: MealType) -> Self {
        Self {
            week: None,
            day,
            meal,
        }
    }

    pub fn in_week(week: u8, day: Day, meal: MealType) -> Self {
        Self {
            week: Some(week),
            day,
            meal,
        }
    }

    /// Every slot of the planner grid. A single week uses unprefixed keys.
    pub fn grid(weeks: u8) -> Vec<SlotKey> {
        let weeks = if weeks > 1 {
            (1..=weeks).map(Some).collect::<Vec<_>>()
        } else {
            vec![None]
        };

        weeks
            .into_iter()
            .flat_map(|week| {
                Day::VARIANTS.iter().flat_map(move |day| {
                    MealType::VARIANTS.iter().map(move |meal| SlotKey {
                        week,
                        day: *day,
                        meal: *meal,
                    })
                })
            })
            .collect()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(week) = self.week {
            write!(f, "W{week}-")?;
        }

        write!(f, "{}-{}", self.day, self.meal)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid slot key `{0}`")]
pub struct ParseSlotKeyError(String);

impl FromStr for SlotKey {
    type Err = ParseSlotKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseSlotKeyError(s.to_owned());
        let parts = s.split('-').collect::<Vec<_>>();

        let (week, day, meal) = match parts.as_slice() {
            [day, meal] => (None, day, meal),
            [week, day, meal] => {
                let week = week
                    .strip_prefix('W')
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| *n > 0)
                    .ok_or_else(invalid)?;
                (Some(week), day, meal)
            }
            _ => return Err(invalid()),
        };

        Ok(SlotKey {
            week,
            day: Day::from_str(day).map_err(|_| invalid())?,
            meal: MealType::from_str(meal).map_err(|_| invalid())?,
        })
    }
}
