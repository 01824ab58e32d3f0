//! Procurement entity model for Procure.
//!
//! Defines the types exchanged with the procurement backend:
//! - [`Proposal`]: a faculty purchase request and its approval status
//! - [`PurchaseOrder`]: the order placed for an approved proposal
//! - [`User`], [`Role`], [`Department`], [`FundingSource`]: directory data
//! - [`BudgetPreference`]: per-department spending limits
//! - [`Record`]: a free-form JSON row for lists without a typed shape
//!
//! Every entity implements [`procure_sort::Sortable`] so list views can order
//! it by any column name. Status workflows are enforced by the backend; the
//! transition checks here are advisory and let callers refuse obviously
//! invalid requests before sending them.

mod budget;
mod directory;
mod error;
mod ids;
mod order;
mod proposal;
mod record;
mod role;
mod status;

pub use budget::BudgetPreference;
pub use directory::{Department, FundingSource, NewDepartment, NewFundingSource, NewUser, User};
pub use error::{ModelError, ModelResult};
pub use ids::{DepartmentId, FundingSourceId, ProposalId, PurchaseOrderId, UserId};
pub use order::{NewPurchaseOrder, OrderStatusUpdate, PurchaseOrder};
pub use proposal::{NewProposal, Proposal, StatusUpdate};
pub use record::Record;
pub use role::Role;
pub use status::{OrderStatus, ProposalStatus};
