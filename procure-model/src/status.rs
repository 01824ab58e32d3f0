//! Proposal approval and order fulfilment workflows.
//!
//! ```text
//! Proposal:  Pending ──► Approved
//!               └──────► Rejected
//!
//! Order:     Pending ──► Ordered ──► Shipped ──► Delivered
//!               │           ├──────────────────► Delivered
//!               └───────────┴──► Cancelled
//! ```

use crate::error::{ModelError, ModelResult};
use procure_sort::SortValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Approval status of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "approved")]
    Approved,
    #[serde(alias = "rejected")]
    Rejected,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!((self, to), (Self::Pending, Self::Approved | Self::Rejected))
    }

    /// Returns `to` if the workflow allows moving there from `self`.
    pub fn transition(self, to: Self) -> ModelResult<Self> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(ModelError::InvalidTransition {
                from: self.to_string(),
                to: to.to_string(),
            })
        }
    }
}

/// Fulfilment status of the order placed for an approved proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "ordered")]
    Ordered,
    #[serde(alias = "shipped")]
    Shipped,
    #[serde(alias = "delivered")]
    Delivered,
    #[serde(alias = "cancelled", alias = "Canceled", alias = "canceled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        Self::Pending,
        Self::Ordered,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ordered => "Ordered",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Ordered | Self::Cancelled)
                | (Self::Ordered, Self::Shipped | Self::Delivered | Self::Cancelled)
                | (Self::Shipped, Self::Delivered)
        )
    }

    /// The next step on the delivery path, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Ordered),
            Self::Ordered => Some(Self::Shipped),
            Self::Shipped => Some(Self::Delivered),
            Self::Delivered | Self::Cancelled => None,
        }
    }

    /// Returns `to` if the workflow allows moving there from `self`.
    pub fn transition(self, to: Self) -> ModelResult<Self> {
        if self.can_transition_to(to) {
            Ok(to)
        } else {
            Err(ModelError::InvalidTransition {
                from: self.to_string(),
                to: to.to_string(),
            })
        }
    }
}

macro_rules! status_text {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .into_iter()
                    .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
            }
        }

        impl From<$name> for SortValue<'_> {
            fn from(status: $name) -> Self {
                SortValue::from(status.as_str())
            }
        }
    };
}

status_text!(ProposalStatus);
status_text!(OrderStatus);
