//! Meal-type selection for time-of-day recipe suggestions.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The meal slot a given hour of the day falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealType {
    /// Meal slot for an hour in 0..24. Evening onwards counts as dinner.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..=10 => Self::Breakfast,
            11..=14 => Self::Lunch,
            15..=17 => Self::Snack,
            _ => Self::Dinner,
        }
    }

    /// Meal slot for the local clock right now.
    pub fn current() -> Self {
        Self::for_hour(Local::now().hour())
    }

    /// Capitalized form for headings ("Today's Lunch Suggestions").
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Snack => "snack",
            Self::Dinner => "dinner",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_boundaries() {
        assert_eq!(MealType::for_hour(4), MealType::Dinner);
        assert_eq!(MealType::for_hour(5), MealType::Breakfast);
        assert_eq!(MealType::for_hour(10), MealType::Breakfast);
        assert_eq!(MealType::for_hour(11), MealType::Lunch);
        assert_eq!(MealType::for_hour(14), MealType::Lunch);
        assert_eq!(MealType::for_hour(15), MealType::Snack);
        assert_eq!(MealType::for_hour(17), MealType::Snack);
        assert_eq!(MealType::for_hour(18), MealType::Dinner);
        assert_eq!(MealType::for_hour(23), MealType::Dinner);
    }

    #[test]
    fn display_and_heading() {
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
        assert_eq!(MealType::Breakfast.heading(), "Breakfast");
    }
}
