//! Users, departments and funding sources managed by admins.

use crate::error::{ModelError, ModelResult};
use crate::ids::{DepartmentId, FundingSourceId, UserId};
use crate::role::Role;
use procure_sort::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl Sortable for User {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "department_id" => self.department_id.into(),
            // Highest-precedence role, which is what the admin table shows first.
            "role" | "roles" => Role::PRECEDENCE
                .into_iter()
                .find(|role| self.has_role(*role))
                .map(Role::as_str)
                .into(),
            _ => SortValue::Null,
        }
    }
}

/// Body of a user creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl NewUser {
    pub fn validate(&self) -> ModelResult<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("user", "name is required"));
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
            _ => Err(ModelError::invalid("user", format!("'{email}' is not an email address"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Sortable for Department {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "code" => self.code.as_str().into(),
            _ => SortValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDepartment {
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingSource {
    pub id: FundingSourceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub balance: f64,
}

impl FundingSource {
    /// Whether the source still has `amount` available.
    #[must_use]
    pub fn covers(&self, amount: f64) -> bool {
        self.balance >= amount
    }
}

impl Sortable for FundingSource {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "department_id" => self.department_id.into(),
            "balance" => self.balance.into(),
            _ => SortValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFundingSource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub balance: f64,
}
