use clap::{Args, Parser, Subcommand};
use procure_model::{OrderStatus, ProposalId, ProposalStatus, PurchaseOrderId};
use procure_sort::{ListView, Pagination, SortOrder, SortState, StatusTab, DEFAULT_ROWS_PER_PAGE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "procure", version)]
#[command(about = "Procure procurement command-line client")]
pub struct Cli {
    /// Base URL of the procurement API
    #[arg(long, env = "PROCURE_API_URL", default_value = "http://localhost:8080/api", global = true)]
    pub api_url: String,

    /// Session file (defaults to the platform config directory)
    #[arg(long, env = "PROCURE_SESSION", global = true)]
    pub session_file: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort a JSON array of records by one field
    Sort {
        /// Field to sort by (a leading `/` selects a JSON pointer)
        #[arg(short, long)]
        key: String,

        #[arg(short, long, default_value_t = SortOrder::Asc)]
        order: SortOrder,

        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
    },

    /// Log in and store the session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "PROCURE_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Purchase proposals
    #[command(subcommand)]
    Proposals(ProposalCommand),

    /// Purchase orders
    #[command(subcommand)]
    Orders(OrderCommand),
}

#[derive(Subcommand, Debug)]
pub enum ProposalCommand {
    /// List proposals
    List {
        #[arg(long)]
        status: Option<ProposalStatus>,

        /// Only proposals you submitted
        #[arg(long)]
        mine: bool,

        #[command(flatten)]
        view: ListArgs,
    },

    /// Approve a pending proposal
    Approve {
        id: ProposalId,

        #[arg(long)]
        comment: Option<String>,
    },

    /// Reject a pending proposal
    Reject {
        id: ProposalId,

        #[arg(long)]
        comment: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// List purchase orders
    List {
        #[arg(long)]
        status: Option<OrderStatus>,

        #[command(flatten)]
        view: ListArgs,
    },

    /// Place an order for an approved proposal
    Create { proposal_id: ProposalId },

    /// Move an order to a new status
    Advance { id: PurchaseOrderId, status: OrderStatus },
}

/// Sorting and paging flags shared by the list commands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    pub per_page: usize,
}

impl ListArgs {
    /// The list view these flags describe, filtered to `status` when given.
    #[must_use]
    pub fn list_view<S: PartialEq>(&self, status: Option<S>) -> ListView<S> {
        let mut view = ListView::new();
        view.tab = StatusTab::from(status);
        if let Some(key) = &self.sort {
            view.sort = SortState::by(key.clone(), self.order);
        }
        view.pagination = Pagination::new(self.page.saturating_sub(1), self.per_page);
        view
    }
}
