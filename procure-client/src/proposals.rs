use crate::client::ApiClient;
use crate::error::ClientResult;
use procure_model::{NewProposal, Proposal, ProposalId, ProposalStatus, Role, StatusUpdate};
use tracing::info;

impl ApiClient {
    /// All proposals visible to the signed-in user.
    pub async fn list_proposals(&self) -> ClientResult<Vec<Proposal>> {
        self.get("/proposals").await
    }

    /// Proposals submitted by the signed-in user.
    pub async fn my_proposals(&self) -> ClientResult<Vec<Proposal>> {
        let user_id = self.require_session()?.user_id;
        self.get(&format!("/proposals?requested_by={user_id}")).await
    }

    pub async fn get_proposal(&self, id: ProposalId) -> ClientResult<Proposal> {
        self.get(&format!("/proposals/{id}")).await
    }

    /// Validates and submits a new proposal.
    pub async fn submit_proposal(&self, proposal: &NewProposal) -> ClientResult<Proposal> {
        self.require_session()?;
        proposal.validate()?;
        let created: Proposal = self.post("/proposals", proposal).await?;
        info!("Submitted proposal {} ({})", created.id, created.title);
        Ok(created)
    }

    /// Sends a status change without local checks.
    pub async fn set_proposal_status(&self, id: ProposalId, update: &StatusUpdate) -> ClientResult<Proposal> {
        self.put(&format!("/proposals/{id}/status"), update).await
    }

    /// Approves a pending proposal. Requires the approver role.
    pub async fn approve_proposal(&self, proposal: &Proposal, comment: Option<String>) -> ClientResult<Proposal> {
        self.decide(proposal, StatusUpdate::approve(comment)).await
    }

    /// Rejects a pending proposal. Requires the approver role.
    pub async fn reject_proposal(&self, proposal: &Proposal, comment: Option<String>) -> ClientResult<Proposal> {
        self.decide(proposal, StatusUpdate::reject(comment)).await
    }

    async fn decide(&self, proposal: &Proposal, update: StatusUpdate) -> ClientResult<Proposal> {
        self.require_role(Role::Approver)?;
        proposal.status.transition(update.status)?;
        let updated = self.set_proposal_status(proposal.id, &update).await?;
        info!(
            "Proposal {} moved {} -> {}",
            proposal.id,
            proposal.status,
            updated.status
        );
        Ok(updated)
    }

    /// Pending proposals, the approver's work queue.
    pub async fn pending_proposals(&self) -> ClientResult<Vec<Proposal>> {
        let all = self.list_proposals().await?;
        Ok(all
            .into_iter()
            .filter(|p| p.status == ProposalStatus::Pending)
            .collect())
    }
}
