use std::collections::BTreeMap;

use super::{MealPeriod, MenuEntry, RecipeMap};

/// A loaded record set: day → meal period → recipes.
///
/// Inserting an entry for a (day, meal period) pair that already exists
/// replaces the earlier recipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuBook {
    days: BTreeMap<String, BTreeMap<MealPeriod, RecipeMap>>,
}

impl MenuBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Returns the recipes it replaced, if any.
    pub fn insert(&mut self, entry: MenuEntry) -> Option<RecipeMap> {
        self.days
            .entry(entry.day)
            .or_default()
            .insert(entry.meal_period, entry.recipes)
    }

    /// Distinct days in ascending lexicographic order.
    pub fn days(&self) -> Vec<String> {
        self.days.keys().cloned().collect()
    }

    /// Meal periods recorded for `day`, in chronological order.
    pub fn meal_periods(&self, day: &str) -> Vec<MealPeriod> {
        self.days
            .get(day)
            .map(|meals| meals.keys().copied().collect())
            .unwrap_or_default()
    }

    pub fn recipes(&self, day: &str, meal_period: MealPeriod) -> Option<&RecipeMap> {
        self.days.get(day)?.get(&meal_period)
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<MenuEntry> for MenuBook {
    fn from_iter<I: IntoIterator<Item = MenuEntry>>(iter: I) -> Self {
        let mut book = Self::new();
        for entry in iter {
            book.insert(entry);
        }
        book
    }
}
