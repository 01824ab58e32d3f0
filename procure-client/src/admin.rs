//! Directory and budget administration endpoints.
//!
//! Reads are open to any signed-in user (the proposal form needs the
//! department and funding source lists); writes require the admin role.

use crate::client::ApiClient;
use crate::error::ClientResult;
use procure_model::{
    BudgetPreference, Department, DepartmentId, FundingSource, FundingSourceId, NewDepartment,
    NewFundingSource, NewUser, Role, User, UserId,
};
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
struct RolesUpdate<'a> {
    roles: &'a [Role],
}

impl ApiClient {
    // ── Users & roles ────────────────────────────────────────────

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get("/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> ClientResult<User> {
        self.require_role(Role::Admin)?;
        user.validate()?;
        let created: User = self.post("/users", user).await?;
        info!("Created user {} ({})", created.id, created.email);
        Ok(created)
    }

    pub async fn set_user_roles(&self, id: UserId, roles: &[Role]) -> ClientResult<User> {
        self.require_role(Role::Admin)?;
        self.put(&format!("/users/{id}/roles"), &RolesUpdate { roles }).await
    }

    pub async fn delete_user(&self, id: UserId) -> ClientResult<()> {
        self.require_role(Role::Admin)?;
        self.delete(&format!("/users/{id}")).await?;
        info!("Deleted user {}", id);
        Ok(())
    }

    /// Roles the backend knows about.
    pub async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        self.get("/roles").await
    }

    // ── Departments ──────────────────────────────────────────────

    pub async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get("/departments").await
    }

    pub async fn create_department(&self, department: &NewDepartment) -> ClientResult<Department> {
        self.require_role(Role::Admin)?;
        self.post("/departments", department).await
    }

    pub async fn update_department(&self, id: DepartmentId, department: &NewDepartment) -> ClientResult<Department> {
        self.require_role(Role::Admin)?;
        self.put(&format!("/departments/{id}"), department).await
    }

    pub async fn delete_department(&self, id: DepartmentId) -> ClientResult<()> {
        self.require_role(Role::Admin)?;
        self.delete(&format!("/departments/{id}")).await
    }

    // ── Funding sources ──────────────────────────────────────────

    pub async fn list_funding_sources(&self) -> ClientResult<Vec<FundingSource>> {
        self.get("/funding-sources").await
    }

    pub async fn create_funding_source(&self, source: &NewFundingSource) -> ClientResult<FundingSource> {
        self.require_role(Role::Admin)?;
        self.post("/funding-sources", source).await
    }

    pub async fn update_funding_source(
        &self,
        id: FundingSourceId,
        source: &NewFundingSource,
    ) -> ClientResult<FundingSource> {
        self.require_role(Role::Admin)?;
        self.put(&format!("/funding-sources/{id}"), source).await
    }

    pub async fn delete_funding_source(&self, id: FundingSourceId) -> ClientResult<()> {
        self.require_role(Role::Admin)?;
        self.delete(&format!("/funding-sources/{id}")).await
    }

    // ── Budget preferences ───────────────────────────────────────

    pub async fn list_budget_preferences(&self) -> ClientResult<Vec<BudgetPreference>> {
        self.get("/budget-preferences").await
    }

    pub async fn save_budget_preference(&self, preference: &BudgetPreference) -> ClientResult<BudgetPreference> {
        self.require_role(Role::Admin)?;
        preference.validate()?;
        self.put(
            &format!("/budget-preferences/{}", preference.department_id),
            preference,
        )
        .await
    }
}
