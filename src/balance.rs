use crate::model::Payer;

pub const BALANCE_FAILURE_MESSAGE: &str = "Failed to load balance";

/// Visual style applied to the verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceTone {
    /// Kevin owes money.
    Negative,
    /// Jackie owes money.
    Positive,
    Zero,
    /// Nothing loaded yet, or the last fetch failed.
    Unknown,
}

impl BalanceTone {
    pub fn class(self) -> &'static str {
        match self {
            BalanceTone::Negative => "negative",
            BalanceTone::Positive => "positive",
            BalanceTone::Zero => "zero-balance",
            BalanceTone::Unknown => "balance-unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BalanceDisplay {
    pub text: String,
    pub tone: BalanceTone,
}

impl BalanceDisplay {
    pub fn loading() -> Self {
        Self {
            text: "Loading balance...".to_string(),
            tone: BalanceTone::Unknown,
        }
    }

    pub fn failed() -> Self {
        Self {
            text: BALANCE_FAILURE_MESSAGE.to_string(),
            tone: BalanceTone::Unknown,
        }
    }

    pub fn from_verdict(verdict: String) -> Self {
        let tone = classify_verdict(&verdict);
        Self {
            text: verdict,
            tone,
        }
    }
}

/// Picks a style from the verdict text. Matching ignores case.
pub fn classify_verdict(verdict: &str) -> BalanceTone {
    let lowered = verdict.to_lowercase();
    let owes = |payer: Payer| format!("{} owes", payer.display_name().to_lowercase());

    if lowered.contains(&owes(Payer::Me)) {
        BalanceTone::Negative
    } else if lowered.contains(&owes(Payer::Partner)) {
        BalanceTone::Positive
    } else {
        if lowered.contains("owes") {
            log::warn!("verdict names an unknown payer: {:?}", verdict);
        }
        BalanceTone::Zero
    }
}
