use crate::cli::{Cli, Command, OrderCommand, ProposalCommand};
use crate::render::{OrderTable, ProposalTable};
use anyhow::{bail, Context, Result};
use procure_client::{ApiClient, ClientError};
use procure_session::SessionStore;
use procure_sort::{sort_records, SortOrder};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::{fs, io};
use tracing::{debug, info, warn};

/// Sorts a JSON array of records by `key`.
///
/// Fails when `input` is not JSON or not an array; the records themselves may
/// have any shape.
pub fn sort_json(input: &str, key: &str, order: SortOrder) -> Result<Value> {
    let value: Value = serde_json::from_str(input).context("input is not valid JSON")?;
    let Value::Array(records) = value else {
        bail!("expected a JSON array of records");
    };
    debug!("Sorting {} records by {} ({})", records.len(), key, order);
    Ok(Value::Array(sort_records(&records, key, order)))
}

/// Reads records from `file` (or stdin), sorts them and returns pretty JSON.
pub fn sort_input(file: Option<&Path>, key: &str, order: SortOrder) -> Result<String> {
    let input = match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read stdin")?,
    };
    let sorted = sort_json(&input, key, order)?;
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Runs one CLI invocation.
pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        api_url,
        session_file,
        command,
        ..
    } = cli;

    match command {
        Command::Sort { key, order, file } => {
            println!("{}", sort_input(file.as_deref(), &key, order)?);
            Ok(())
        }
        Command::Login { email, password } => {
            let store = session_store(session_file)?;
            let mut client = ApiClient::new(api_url).context("failed to build HTTP client")?;
            let session = client.login(&email, &password).await.context("login failed")?;
            store.save(&session)?;
            println!("Logged in as {}. Home: {}", session.name, session.landing_route());
            Ok(())
        }
        Command::Logout => {
            session_store(session_file)?.clear()?;
            println!("Logged out.");
            Ok(())
        }
        Command::Proposals(command) => {
            let store = session_store(session_file)?;
            let client = signed_in(api_url, &store)?;
            forget_rejected_session(&store, proposals(&client, command).await)
        }
        Command::Orders(command) => {
            let store = session_store(session_file)?;
            let client = signed_in(api_url, &store)?;
            forget_rejected_session(&store, orders(&client, command).await)
        }
    }
}

fn session_store(path: Option<PathBuf>) -> Result<SessionStore> {
    match path {
        Some(path) => Ok(SessionStore::new(path)),
        None => Ok(SessionStore::default_location()?),
    }
}

fn signed_in(api_url: String, store: &SessionStore) -> Result<ApiClient> {
    let session = store.require().context("run `procure login` first")?;
    let client = ApiClient::new(api_url).context("failed to build HTTP client")?;
    Ok(client.with_session(session))
}

/// Drops the stored session when the backend no longer accepts its token.
fn forget_rejected_session(store: &SessionStore, result: Result<()>) -> Result<()> {
    if let Err(err) = &result
        && err
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_auth_failure)
    {
        warn!("Session rejected by the backend, clearing {}", store.path().display());
        store.clear()?;
    }
    result
}

async fn proposals(client: &ApiClient, command: ProposalCommand) -> Result<()> {
    match command {
        ProposalCommand::List { status, mine, view } => {
            let proposals = if mine {
                client.my_proposals().await?
            } else {
                client.list_proposals().await?
            };
            let page = view.list_view(status).render(&proposals, |p| p.status);
            print!("{}", ProposalTable(&page));
        }
        ProposalCommand::Approve { id, comment } => {
            let proposal = client.get_proposal(id).await?;
            let updated = client.approve_proposal(&proposal, comment).await?;
            println!("Proposal {} is now {}.", updated.id, updated.status);
        }
        ProposalCommand::Reject { id, comment } => {
            let proposal = client.get_proposal(id).await?;
            let updated = client.reject_proposal(&proposal, comment).await?;
            println!("Proposal {} is now {}.", updated.id, updated.status);
        }
    }
    Ok(())
}

async fn orders(client: &ApiClient, command: OrderCommand) -> Result<()> {
    match command {
        OrderCommand::List { status, view } => {
            let orders = client.list_purchase_orders().await?;
            let page = view.list_view(status).render(&orders, |o| o.status);
            print!("{}", OrderTable(&page));
        }
        OrderCommand::Create { proposal_id } => {
            let proposal = client.get_proposal(proposal_id).await?;
            let order = client.create_purchase_order(&proposal).await?;
            info!("Order {} placed with {}", order.id, order.vendor);
            println!("Created purchase order {} for proposal {}.", order.id, proposal_id);
        }
        OrderCommand::Advance { id, status } => {
            let order = client.get_purchase_order(id).await?;
            let updated = client.set_order_status(&order, status).await?;
            println!("Purchase order {} is now {}.", updated.id, updated.status);
        }
    }
    Ok(())
}
