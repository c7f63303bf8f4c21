//! Navigation destinations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not one of the known tab ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tab '{0}' (expected one of: transactions, bias, logs, users)")]
pub struct UnknownTab(pub String);

/// A navigation destination in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Transactions,
    Bias,
    Logs,
    Users,
}

impl Tab {
    /// All tabs in menu order.
    pub const ALL: [Tab; 4] = [Tab::Transactions, Tab::Bias, Tab::Logs, Tab::Users];

    /// Stable identifier, compared by exact equality.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Transactions => "transactions",
            Tab::Bias => "bias",
            Tab::Logs => "logs",
            Tab::Users => "users",
        }
    }

    /// Look up a tab by its exact id. No case normalization is applied.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }

    /// Tab at a zero-based menu position.
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Transactions => 0,
            Tab::Bias => 1,
            Tab::Logs => 2,
            Tab::Users => 3,
        }
    }

    /// Next tab in menu order, wrapping around.
    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Previous tab in menu order, wrapping around.
    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::from_id(s).ok_or_else(|| UnknownTab(s.to_string()))
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_exact_match() {
        assert_eq!(Tab::from_id("transactions"), Some(Tab::Transactions));
        assert_eq!(Tab::from_id("bias"), Some(Tab::Bias));
        assert_eq!(Tab::from_id("logs"), Some(Tab::Logs));
        assert_eq!(Tab::from_id("users"), Some(Tab::Users));
    }

    #[test]
    fn test_from_id_is_case_sensitive() {
        assert_eq!(Tab::from_id("Bias"), None);
        assert_eq!(Tab::from_id("USERS"), None);
        assert_eq!(Tab::from_id(" bias"), None);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "reports".parse::<Tab>().unwrap_err();
        assert_eq!(err, UnknownTab("reports".to_string()));
        assert!(err.to_string().contains("reports"));
    }

    #[test]
    fn test_ids_round_trip_through_display() {
        for tab in Tab::ALL {
            assert_eq!(tab.to_string().parse::<Tab>(), Ok(tab));
        }
    }

    #[test]
    fn test_next_and_prev_wrap() {
        assert_eq!(Tab::Users.next(), Tab::Transactions);
        assert_eq!(Tab::Transactions.prev(), Tab::Users);
        assert_eq!(Tab::Bias.next(), Tab::Logs);
        assert_eq!(Tab::Logs.prev(), Tab::Bias);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(Tab::from_index(i), Some(*tab));
        }
        assert_eq!(Tab::from_index(4), None);
    }
}
