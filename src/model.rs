use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Trip label used when an expense carries no trip, or a blank one.
pub const DEFAULT_TRIP: &str = "default";

/// One of the two people sharing expenses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Payer {
    Me,
    Partner,
}

/// Wire identifiers accepted from the service.
const PAYER_IDS: [(&str, Payer); 2] = [("me", Payer::Me), ("partner", Payer::Partner)];

impl Payer {
    pub const ALL: [Payer; 2] = [Payer::Me, Payer::Partner];

    pub fn id(self) -> &'static str {
        match self {
            Payer::Me => "me",
            Payer::Partner => "partner",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Payer::Me => "Kevin",
            Payer::Partner => "Jackie",
        }
    }

    /// Resolves a wire identifier. Anything other than a known id is
    /// treated as the partner.
    pub fn from_id(id: &str) -> Payer {
        match PAYER_IDS.iter().find(|(known, _)| *known == id) {
            Some((_, payer)) => *payer,
            None => {
                log::warn!("unrecognised payer id {:?}, showing as partner", id);
                Payer::Partner
            }
        }
    }
}

impl Serialize for Payer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Payer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Payer::from_id(&raw))
    }
}

/// An expense as stored by the remote service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub description: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub paid_by: Payer,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub split_between: Vec<Payer>,
    #[serde(default)]
    pub trip: Option<String>,
}

impl Expense {
    pub fn trip_key(&self) -> &str {
        match self.trip.as_deref().map(str::trim) {
            Some(trip) if !trip.is_empty() => trip,
            _ => DEFAULT_TRIP,
        }
    }
}

/// Body of `POST /api/expenses`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub paid_by: Payer,
    pub date: String,
    pub trip: String,
}

/// Body of `GET /api/balance`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BalanceVerdict {
    pub verdict: String,
}

fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount {:?}", text))),
    }
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    // timestamps such as 2024-03-05T00:00:00.000Z keep only the date part
    let day = raw.split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| de::Error::custom(format!("invalid date {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expense_accepts_string_amount_and_timestamp_date() {
        let expense: Expense = serde_json::from_value(json!({
            "description": "Groceries",
            "amount": "42.10",
            "paid_by": "me",
            "date": "2024-03-05T00:00:00.000Z",
            "split_between": ["me", "partner"],
            "trip": "Lisbon"
        }))
        .unwrap();

        assert_eq!(expense.amount, 42.10);
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(expense.split_between, vec![Payer::Me, Payer::Partner]);
        assert_eq!(expense.trip_key(), "Lisbon");
    }

    #[test]
    fn missing_or_blank_trip_falls_back_to_default() {
        let without: Expense = serde_json::from_value(json!({
            "description": "Coffee",
            "amount": 3.5,
            "paid_by": "partner",
            "date": "2024-01-02"
        }))
        .unwrap();
        assert_eq!(without.trip_key(), DEFAULT_TRIP);
        assert!(without.split_between.is_empty());

        let blank = Expense {
            trip: Some("   ".to_string()),
            ..without
        };
        assert_eq!(blank.trip_key(), DEFAULT_TRIP);
    }

    #[test]
    fn unknown_payer_id_maps_to_partner() {
        let payer: Payer = serde_json::from_value(json!("jackie")).unwrap();
        assert_eq!(payer, Payer::Partner);
        assert_eq!(payer.display_name(), "Jackie");
        assert_eq!(Payer::from_id("me").display_name(), "Kevin");
    }

    #[test]
    fn ids_round_trip_through_lookup() {
        for payer in Payer::ALL {
            assert_eq!(Payer::from_id(payer.id()), payer);
        }
    }

    #[test]
    fn rejects_garbage_amount() {
        let result = serde_json::from_value::<Expense>(json!({
            "description": "Bad",
            "amount": "twelve",
            "paid_by": "me",
            "date": "2024-01-02"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn new_expense_serializes_payer_as_id() {
        let body = NewExpense {
            description: "Taxi".to_string(),
            amount: "18".to_string(),
            paid_by: Payer::Partner,
            date: "2024-06-01".to_string(),
            trip: DEFAULT_TRIP.to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["paid_by"], "partner");
        assert_eq!(value["amount"], "18");
    }
}
