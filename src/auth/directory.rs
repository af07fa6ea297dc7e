//! In-process identity provider and employee directory.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::policy::{Action, require};
use crate::error::CoreError;
use crate::model::identity::Identity;
use crate::model::role::Role;

/// Source of identities for login.
pub trait IdentityProvider {
    /// The identity whose email and password both match, if any.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<Identity>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<Identity> {
        (**self).find_by_credentials(email, password)
    }
}

struct Account {
    identity: Identity,
    password_hash: String,
}

/// Account entry of a directory file. The password is hashed on load.
#[derive(Deserialize)]
struct AccountSeed {
    #[serde(flatten)]
    identity: Identity,
    password: String,
}

pub struct Directory {
    accounts: Vec<Account>,
    /// Verified against when no account matches, so an unknown email costs
    /// the same argon2 work as a wrong password.
    decoy_hash: String,
}

impl Directory {
    pub fn new() -> Result<Self> {
        Ok(Self {
            accounts: Vec::new(),
            decoy_hash: hash_password(&uuid::Uuid::new_v4().to_string())?,
        })
    }

    /// The two accounts the application ships with.
    pub fn with_demo_accounts() -> Result<Self> {
        let mut directory = Self::new()?;
        directory.register(
            Identity {
                id: 1,
                email: "admin@example.com".into(),
                name: "Admin User".into(),
                role: Role::Admin,
                position: "HR Director".into(),
            },
            "admin123",
        )?;
        directory.register(
            Identity {
                id: 2,
                email: "employee@example.com".into(),
                name: "John Employee".into(),
                role: Role::Employee,
                position: "Software Developer".into(),
            },
            "employee123",
        )?;
        Ok(directory)
    }

    /// Loads a JSON array of identities, each with a plaintext `password`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading directory file {}", path.display()))?;
        let seeds: Vec<AccountSeed> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing directory file {}", path.display()))?;

        let mut directory = Self::new()?;
        for seed in seeds {
            directory.register(seed.identity, &seed.password)?;
        }
        info!(accounts = directory.accounts.len(), path = %path.display(), "Directory loaded");
        Ok(directory)
    }

    pub fn register(&mut self, identity: Identity, password: &str) -> Result<()> {
        if identity.email.trim().is_empty() || password.is_empty() {
            bail!("email and password must not be empty");
        }
        if self.accounts.iter().any(|a| {
            a.identity.email.eq_ignore_ascii_case(&identity.email) || a.identity.id == identity.id
        }) {
            bail!("account {} already registered", identity.email);
        }

        let password_hash = hash_password(password)?;
        self.accounts.push(Account {
            identity,
            password_hash,
        });
        Ok(())
    }

    /// Directory listing for callers allowed to browse employees.
    pub fn employees(&self, viewer: &Identity) -> Result<Vec<Identity>, CoreError> {
        require(Some(viewer.role), Action::ViewEmployeeDirectory)?;
        Ok(self.accounts.iter().map(|a| a.identity.clone()).collect())
    }

    /// Account for `email` (trimmed, case-insensitive) and the hash to verify
    /// against. The decoy hash stands in when nothing matches.
    fn credential_hash(&self, email: &str) -> (Option<&Account>, &str) {
        let email = email.trim();
        match self
            .accounts
            .iter()
            .find(|a| a.identity.email.eq_ignore_ascii_case(email))
        {
            Some(account) => (Some(account), account.password_hash.as_str()),
            None => (None, self.decoy_hash.as_str()),
        }
    }
}

impl IdentityProvider for Directory {
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<Identity> {
        let (account, hash) = self.credential_hash(email);
        debug!(known = account.is_some(), "Verifying password");
        let verified = verify_password(password, hash);
        account
            .filter(|_| verified)
            .map(|a| a.identity.clone())
    }
}
