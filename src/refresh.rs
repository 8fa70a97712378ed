//! Submission and refresh flow, kept apart from the components so it can run
//! against any `ExpenseApi` and any view.

use chrono::NaiveDate;

use crate::api::ExpenseApi;
use crate::balance::BalanceDisplay;
use crate::grouping::ExpenseListing;
use crate::model::{NewExpense, Payer, DEFAULT_TRIP};

pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to add expense. Please try again.";

/// The parts of the page the flow writes to.
pub trait DashboardView {
    fn show_expenses(&self, listing: ExpenseListing);
    fn show_balance(&self, balance: BalanceDisplay);
    fn set_submitting(&self, submitting: bool);
    fn reset_form(&self);
    fn alert(&self, message: &str);
}

/// Raw field values of the add-expense form.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub paid_by: Payer,
    pub date: String,
    pub trip: String,
}

impl ExpenseForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            paid_by: Payer::Me,
            date: today.format("%Y-%m-%d").to_string(),
            trip: String::new(),
        }
    }

    pub fn to_new_expense(&self) -> NewExpense {
        let trip = self.trip.trim();
        NewExpense {
            description: self.description.clone(),
            amount: self.amount.clone(),
            paid_by: self.paid_by,
            date: self.date.clone(),
            trip: if trip.is_empty() {
                DEFAULT_TRIP.to_string()
            } else {
                trip.to_string()
            },
        }
    }
}

/// Submitting needs the initial load finished and no submission in flight.
pub fn can_submit(initial_load_done: bool, submitting: bool) -> bool {
    initial_load_done && !submitting
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Replaces the list. On failure the previous list stays on screen.
pub async fn refresh_expenses<A, V>(api: &A, view: &V)
where
    A: ExpenseApi + ?Sized,
    V: DashboardView + ?Sized,
{
    match api.list_expenses().await {
        Ok(expenses) => view.show_expenses(ExpenseListing::from_expenses(expenses)),
        Err(err) => log::error!("Error fetching expenses: {}", err),
    }
}

pub async fn refresh_balance<A, V>(api: &A, view: &V)
where
    A: ExpenseApi + ?Sized,
    V: DashboardView + ?Sized,
{
    let display = match api.fetch_balance().await {
        Ok(balance) => BalanceDisplay::from_verdict(balance.verdict),
        Err(err) => {
            log::error!("Error fetching balance: {}", err);
            BalanceDisplay::failed()
        }
    };
    view.show_balance(display);
}

/// List first, then balance. Never issues the two requests concurrently.
pub async fn refresh_all<A, V>(api: &A, view: &V)
where
    A: ExpenseApi + ?Sized,
    V: DashboardView + ?Sized,
{
    refresh_expenses(api, view).await;
    refresh_balance(api, view).await;
}

/// Posts the form. A success resets the form and refreshes everything; a
/// failure alerts and leaves the fields as they were.
pub async fn submit_expense<A, V>(api: &A, view: &V, form: &ExpenseForm)
where
    A: ExpenseApi + ?Sized,
    V: DashboardView + ?Sized,
{
    let body = form.to_new_expense();
    view.set_submitting(true);

    match api.add_expense(&body).await {
        Ok(()) => {
            log::info!("added expense {:?} to trip {:?}", body.description, body.trip);
            view.reset_form();
            refresh_all(api, view).await;
        }
        Err(err) => {
            log::error!("Error adding expense: {}", err);
            view.alert(SUBMIT_FAILED_MESSAGE);
        }
    }

    view.set_submitting(false);
}
