//! Procure command-line client.
//!
//! Sorts JSON record files offline and drives the procurement backend:
//! logging in, listing proposals and purchase orders with the same
//! filter/sort/page pipeline as the web list views, approving and rejecting
//! proposals, and advancing orders.
//!
//! Usage:
//!   procure sort --key created_at --order desc proposals.json
//!   procure login --email ada@example.edu
//!   procure proposals list --status pending --sort total_cost --order desc

mod cli;
mod commands;
mod render;

pub use cli::{Cli, Command, ListArgs, OrderCommand, ProposalCommand};
pub use commands::{run, sort_input, sort_json};
pub use render::{OrderTable, ProposalTable};
