use async_trait::async_trait;
use gloo_net::http::{Request, Response};

use crate::error::ApiError;
use crate::model::{BalanceVerdict, Expense, NewExpense};

/// Operations the client consumes from the expense service.
#[async_trait(?Send)]
pub trait ExpenseApi {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError>;
    async fn fetch_balance(&self) -> Result<BalanceVerdict, ApiError>;
    async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError>;
}

/// `ExpenseApi` over HTTP using the browser fetch API.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpExpenseApi {
    base_url: String,
}

impl HttpExpenseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status: resp.status(),
            url: resp.url(),
        })
    }
}

#[async_trait(?Send)]
impl ExpenseApi for HttpExpenseApi {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let url = self.url("expenses");
        log::debug!("GET {}", url);
        let resp = Request::get(&url).send().await.map_err(ApiError::Network)?;
        ensure_ok(resp)?
            .json::<Vec<Expense>>()
            .await
            .map_err(ApiError::Decode)
    }

    async fn fetch_balance(&self) -> Result<BalanceVerdict, ApiError> {
        let url = self.url("balance");
        log::debug!("GET {}", url);
        let resp = Request::get(&url).send().await.map_err(ApiError::Network)?;
        ensure_ok(resp)?
            .json::<BalanceVerdict>()
            .await
            .map_err(ApiError::Decode)
    }

    async fn add_expense(&self, expense: &NewExpense) -> Result<(), ApiError> {
        let url = self.url("expenses");
        log::debug!("POST {} ({})", url, expense.description);
        let request = Request::post(&url).json(expense).map_err(ApiError::Encode)?;
        let resp = request.send().await.map_err(ApiError::Network)?;
        ensure_ok(resp)?;
        Ok(())
    }
}
