//! Caller privileges, passed explicitly to every operation that needs them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, Result};

/// Privilege level returned by the role lookup, lowest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Staff,
    HomeManager,
    CompanyAdmin,
}

impl Role {
    pub fn can_write_ledgers(self) -> bool {
        self >= Role::HomeManager
    }
}

impl TryFrom<&str> for Role {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "staff" => Ok(Self::Staff),
            "manager" | "home_manager" => Ok(Self::HomeManager),
            "company" | "admin" | "company_admin" => Ok(Self::CompanyAdmin),
            other => Err(LedgerError::InvalidInput(format!("unknown role `{other}`"))),
        }
    }
}

/// Who is calling and which homes they belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub level: Role,
    #[serde(default)]
    pub homes: Vec<Uuid>,
}

impl AuthContext {
    pub fn new(user_id: Uuid, level: Role, homes: Vec<Uuid>) -> Self {
        Self {
            user_id,
            level,
            homes,
        }
    }

    pub fn can_view_home(&self, home_id: Uuid) -> bool {
        self.level == Role::CompanyAdmin || self.homes.contains(&home_id)
    }

    pub fn require_home_view(&self, home_id: Uuid) -> Result<()> {
        if self.can_view_home(home_id) {
            Ok(())
        } else {
            Err(LedgerError::Forbidden(format!(
                "user {} cannot view home {home_id}",
                self.user_id
            )))
        }
    }

    pub fn require_ledger_write(&self, home_id: Uuid) -> Result<()> {
        if self.level.can_write_ledgers() && self.can_view_home(home_id) {
            Ok(())
        } else {
            Err(LedgerError::Forbidden(format!(
                "user {} cannot edit the ledger of home {home_id}",
                self.user_id
            )))
        }
    }

    pub fn require_company_review(&self) -> Result<()> {
        if self.level == Role::CompanyAdmin {
            Ok(())
        } else {
            Err(LedgerError::Forbidden(
                "company review requires company access".into(),
            ))
        }
    }
}
