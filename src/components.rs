use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::HttpExpenseApi;
use crate::balance::BalanceDisplay;
use crate::config::API_BASE_URL;
use crate::format::{expense_count_label, format_amount, format_short_date, format_split};
use crate::grouping::{ExpenseListing, TripGroup};
use crate::model::{Expense, Payer};
use crate::refresh::{
    can_submit, refresh_all, submit_expense, today, DashboardView, ExpenseForm,
};

/// Writes flow results into the component state handles.
#[derive(Clone)]
struct StateView {
    listing: UseStateHandle<Option<ExpenseListing>>,
    balance: UseStateHandle<BalanceDisplay>,
    form: UseStateHandle<ExpenseForm>,
    submitting: UseStateHandle<bool>,
}

impl DashboardView for StateView {
    fn show_expenses(&self, listing: ExpenseListing) {
        self.listing.set(Some(listing));
    }

    fn show_balance(&self, balance: BalanceDisplay) {
        self.balance.set(balance);
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn reset_form(&self) {
        self.form.set(ExpenseForm::new(today()));
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let listing = use_state(|| None::<ExpenseListing>);
    let balance = use_state(BalanceDisplay::loading);
    let form = use_state(|| ExpenseForm::new(today()));
    let submitting = use_state(|| false);
    let loaded = use_state(|| false);
    let view = StateView {
        listing,
        balance,
        form,
        submitting,
    };
    let api = HttpExpenseApi::new(API_BASE_URL);

    {
        let view = view.clone();
        let api = api.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    refresh_all(&api, &view).await;
                    loaded.set(true);
                });
                || ()
            },
            (),
        );
    }

    let on_change = {
        let form = view.form.clone();
        Callback::from(move |next: ExpenseForm| form.set(next))
    };

    let submit_enabled = can_submit(*loaded, *view.submitting);

    let on_submit = {
        let view = view.clone();
        Callback::from(move |_| {
            if !submit_enabled {
                return;
            }
            let view = view.clone();
            let api = api.clone();
            let form = (*view.form).clone();
            spawn_local(async move {
                submit_expense(&api, &view, &form).await;
            });
        })
    };

    html! {
        <main class="container">
            <h1>{"Shared Expenses"}</h1>
            <BalancePanel balance={(*view.balance).clone()} />
            <ExpenseFormCard
                form={(*view.form).clone()}
                submitting={*view.submitting}
                enabled={submit_enabled}
                on_change={on_change}
                on_submit={on_submit}
            />
            <ExpenseList listing={(*view.listing).clone()} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct BalancePanelProps {
    balance: BalanceDisplay,
}

#[function_component(BalancePanel)]
fn balance_panel(props: &BalancePanelProps) -> Html {
    html! {
        <section class="balance-card">
            <h2>{"Balance"}</h2>
            <p id="balanceResult" class={props.balance.tone.class()}>{ props.balance.text.clone() }</p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseFormCardProps {
    form: ExpenseForm,
    submitting: bool,
    enabled: bool,
    on_change: Callback<ExpenseForm>,
    on_submit: Callback<()>,
}

fn text_input(
    form: &ExpenseForm,
    on_change: &Callback<ExpenseForm>,
    apply: fn(&mut ExpenseForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = form.clone();
        apply(&mut next, input.value());
        on_change.emit(next);
    })
}

#[function_component(ExpenseFormCard)]
fn expense_form_card(props: &ExpenseFormCardProps) -> Html {
    let form = &props.form;

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_payer = {
        let form = form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = form.clone();
            next.paid_by = Payer::from_id(&select.value());
            on_change.emit(next);
        })
    };

    html! {
        <form id="expenseForm" class="expense-form" {onsubmit}>
            <input id="desc" type="text" placeholder="Description" required=true
                value={form.description.clone()}
                oninput={text_input(form, &props.on_change, |f, v| f.description = v)} />
            <input id="amount" type="number" step="0.01" min="0" placeholder="0.00" required=true
                value={form.amount.clone()}
                oninput={text_input(form, &props.on_change, |f, v| f.amount = v)} />
            <select id="paidBy" onchange={on_payer}>
                { for Payer::ALL.iter().map(|payer| html! {
                    <option value={payer.id()} selected={*payer == form.paid_by}>
                        { payer.display_name() }
                    </option>
                }) }
            </select>
            <input id="date" type="date" required=true
                value={form.date.clone()}
                oninput={text_input(form, &props.on_change, |f, v| f.date = v)} />
            <input id="trip" type="text" placeholder="Trip (optional)"
                value={form.trip.clone()}
                oninput={text_input(form, &props.on_change, |f, v| f.trip = v)} />
            <button type="submit" disabled={!props.enabled}>
                { icon_plus() }
                { if props.submitting { "Adding..." } else { "Add Expense" } }
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct ExpenseListProps {
    listing: Option<ExpenseListing>,
}

#[function_component(ExpenseList)]
fn expense_list(props: &ExpenseListProps) -> Html {
    let body = match &props.listing {
        None => html! { <p class="muted">{"Loading..."}</p> },
        Some(listing) if listing.is_empty() => {
            html! { <p class="muted">{"No expenses yet."}</p> }
        }
        Some(listing) => html! {
            <div id="expensesList">
                { for listing.groups.iter().map(|group| html! {
                    <TripSection key={group.trip.clone()} group={group.clone()} />
                }) }
            </div>
        },
    };

    let count = props
        .listing
        .as_ref()
        .map(|listing| expense_count_label(listing.count))
        .unwrap_or_default();

    html! {
        <section class="expenses-card">
            <div class="expenses-header">
                <h2>{"Expenses"}</h2>
                <span id="expenseCount">{ count }</span>
            </div>
            { body }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TripSectionProps {
    group: TripGroup,
}

#[function_component(TripSection)]
fn trip_section(props: &TripSectionProps) -> Html {
    let collapsed = use_state(|| false);

    let on_toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };

    let group = &props.group;
    let state = section_state(*collapsed);

    html! {
        <div class="trip-section">
            <div class={classes!("trip-header", state)} onclick={on_toggle}>
                { icon_chevron_down() }
                <span class="trip-name">{ group.trip.clone() }</span>
                <span class="trip-meta">
                    { format!("{} · {}", expense_count_label(group.expenses.len()), format_amount(group.total())) }
                </span>
            </div>
            <ul class={classes!("trip-expenses", state)}>
                { for group.expenses.iter().map(expense_row) }
            </ul>
        </div>
    }
}

fn section_state(collapsed: bool) -> &'static str {
    if collapsed {
        "collapsed"
    } else {
        "expanded"
    }
}

fn expense_row(expense: &Expense) -> Html {
    html! {
        <li>
            <div class="exp-details">
                <div>{ expense.description.clone() }</div>
                <div class="paid-by">
                    { format!("Paid by {} · Split with {}", expense.paid_by.display_name(), format_split(&expense.split_between)) }
                </div>
                <div class="exp-date">{ format_short_date(expense.date) }</div>
            </div>
            <div class="exp-amount">{ format_amount(expense.amount) }</div>
        </li>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="icon">
            <path d={path}></path>
        </svg>
    }
}

fn icon_chevron_down() -> Html {
    icon_base("M6 9l6 6 6-6")
}

fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
