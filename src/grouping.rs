//! Partitioning of the expense collection into trip sections.

use indexmap::IndexMap;

use crate::model::Expense;

#[derive(Clone, Debug, PartialEq)]
pub struct TripGroup {
    pub trip: String,
    pub expenses: Vec<Expense>,
}

impl TripGroup {
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }
}

/// Everything the list view needs for one render.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseListing {
    pub groups: Vec<TripGroup>,
    pub count: usize,
}

impl ExpenseListing {
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let count = expenses.len();
        Self {
            groups: group_by_trip(expenses),
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Groups expenses by trip. Sections keep the order in which each trip
/// first appears, and rows keep their order within a section.
pub fn group_by_trip(expenses: Vec<Expense>) -> Vec<TripGroup> {
    let mut by_trip: IndexMap<String, Vec<Expense>> = IndexMap::new();
    for expense in expenses {
        by_trip
            .entry(expense.trip_key().to_string())
            .or_default()
            .push(expense);
    }
    by_trip
        .into_iter()
        .map(|(trip, expenses)| TripGroup { trip, expenses })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Payer, DEFAULT_TRIP};
    use chrono::NaiveDate;

    fn expense(description: &str, amount: f64, trip: Option<&str>) -> Expense {
        Expense {
            description: description.to_string(),
            amount,
            paid_by: Payer::Me,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            split_between: vec![Payer::Me, Payer::Partner],
            trip: trip.map(str::to_string),
        }
    }

    #[test]
    fn sections_follow_first_appearance() {
        let groups = group_by_trip(vec![
            expense("Hotel", 200.0, Some("Rome")),
            expense("Milk", 2.0, None),
            expense("Pasta", 30.0, Some("Rome")),
            expense("Ferry", 45.0, Some("Capri")),
            expense("Bread", 3.0, Some("")),
        ]);

        let trips: Vec<&str> = groups.iter().map(|group| group.trip.as_str()).collect();
        assert_eq!(trips, vec!["Rome", DEFAULT_TRIP, "Capri"]);

        let rome: Vec<&str> = groups[0]
            .expenses
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(rome, vec!["Hotel", "Pasta"]);
        assert_eq!(groups[1].expenses.len(), 2);
        assert_eq!(groups[0].total(), 230.0);
    }

    #[test]
    fn listing_counts_every_expense() {
        let listing = ExpenseListing::from_expenses(vec![
            expense("A", 1.0, Some("x")),
            expense("B", 1.0, Some("y")),
            expense("C", 1.0, Some("x")),
        ]);
        assert_eq!(listing.count, 3);
        assert_eq!(listing.groups.len(), 2);

        let empty = ExpenseListing::from_expenses(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.groups.is_empty());
    }
}
