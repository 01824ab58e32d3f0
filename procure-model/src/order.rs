use crate::error::{ModelError, ModelResult};
use crate::ids::{ProposalId, PurchaseOrderId};
use crate::proposal::Proposal;
use crate::status::{OrderStatus, ProposalStatus};
use chrono::{DateTime, NaiveDate, Utc};
use procure_sort::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

/// An order placed by a purchaser to fulfil an approved proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub proposal_id: ProposalId,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    /// Past its expected delivery date and still open.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_terminal() && self.expected_delivery.is_some_and(|due| due < today)
    }
}

impl Sortable for PurchaseOrder {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => self.id.into(),
            "proposal_id" => self.proposal_id.into(),
            "vendor" => self.vendor.as_str().into(),
            "order_number" => self.order_number.as_deref().into(),
            "total_amount" => self.total_amount.into(),
            "status" => self.status.into(),
            "ordered_at" => self.ordered_at.into(),
            "expected_delivery" => self.expected_delivery.into(),
            "delivered_at" => self.delivered_at.into(),
            _ => SortValue::Null,
        }
    }
}

/// Body of a purchase order creation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    pub proposal_id: ProposalId,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
}

impl NewPurchaseOrder {
    /// Builds an order for `proposal`, which must be approved and not yet ordered.
    pub fn from_proposal(proposal: &Proposal) -> ModelResult<Self> {
        if proposal.status != ProposalStatus::Approved {
            return Err(ModelError::invalid(
                "purchase order",
                format!("proposal {} is {}, not Approved", proposal.id, proposal.status),
            ));
        }
        if let Some(existing) = proposal.order_status {
            return Err(ModelError::invalid(
                "purchase order",
                format!("proposal {} already has an order ({existing})", proposal.id),
            ));
        }
        Ok(Self {
            proposal_id: proposal.id,
            vendor: proposal.vendor.clone(),
            order_number: None,
            total_amount: proposal.total_cost(),
            expected_delivery: None,
        })
    }
}

/// Body of an order status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
