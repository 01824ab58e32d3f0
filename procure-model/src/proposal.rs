use crate::error::{ModelError, ModelResult};
use crate::ids::{DepartmentId, FundingSourceId, ProposalId, UserId};
use crate::status::{OrderStatus, ProposalStatus};
use chrono::{DateTime, Utc};
use procure_sort::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

/// A purchase request submitted by a faculty member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vendor: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub department_id: DepartmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_source_id: Option<FundingSourceId>,
    pub requested_by: UserId,
    pub status: ProposalStatus,
    /// Set once a purchaser starts fulfilling an approved proposal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approver_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Proposal {
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    /// Approved and not yet handed to a purchaser.
    #[must_use]
    pub fn is_orderable(&self) -> bool {
        self.status == ProposalStatus::Approved && self.order_status.is_none()
    }
}

impl Sortable for Proposal {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => self.id.into(),
            "title" => self.title.as_str().into(),
            "description" => self.description.as_str().into(),
            "vendor" => self.vendor.as_str().into(),
            "quantity" => self.quantity.into(),
            "unit_price" => self.unit_price.into(),
            "total_cost" => self.total_cost().into(),
            "department_id" => self.department_id.into(),
            "funding_source_id" => self.funding_source_id.into(),
            "requested_by" => self.requested_by.into(),
            "status" => self.status.into(),
            "order_status" => self.order_status.into(),
            "approver_comment" => self.approver_comment.as_deref().into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => SortValue::Null,
        }
    }
}

/// Body of a proposal submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProposal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vendor: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub department_id: DepartmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_source_id: Option<FundingSourceId>,
}

impl NewProposal {
    /// Checks the fields the submission form requires.
    pub fn validate(&self) -> ModelResult<()> {
        if self.title.trim().is_empty() {
            return Err(ModelError::invalid("proposal", "title is required"));
        }
        if self.quantity == 0 {
            return Err(ModelError::invalid("proposal", "quantity must be at least 1"));
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(ModelError::invalid("proposal", "unit price must be a non-negative amount"));
        }
        Ok(())
    }
}

/// Body of an approve/reject request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ProposalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl StatusUpdate {
    #[must_use]
    pub fn approve(comment: Option<String>) -> Self {
        Self {
            status: ProposalStatus::Approved,
            comment,
        }
    }

    #[must_use]
    pub fn reject(comment: Option<String>) -> Self {
        Self {
            status: ProposalStatus::Rejected,
            comment,
        }
    }
}
