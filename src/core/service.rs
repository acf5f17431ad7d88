use crate::config::app_config::Config;
use crate::core::adapters::OpCli;
use crate::core::matcher::matches;
use crate::core::ports::{FieldAssignment, ItemTemplate, VaultClient};
use crate::credential::attributes::AttributeRecord;
use crate::vault::error::OpError;
use crate::vault::filter::Filter;
use crate::vault::models::{Category, VaultItem};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Operation git asks the helper to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Get,
    Store,
    Erase,
    /// Anything else; accepted and ignored.
    Unknown(String),
}

impl From<&str> for Operation {
    fn from(s: &str) -> Self {
        match s {
            "get" => Operation::Get,
            "store" => Operation::Store,
            "erase" => Operation::Erase,
            other => Operation::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum HelperError {
    #[error("find item: {0}")]
    FindItem(#[source] OpError),
    #[error("create item: {0}")]
    CreateItem(#[source] OpError),
    #[error("update item: {0}")]
    UpdateItem(#[source] OpError),
    #[error("delete item: {0}")]
    DeleteItem(#[source] OpError),
}

/// Credentials are kept as API Credential items.
pub const CREDENTIAL_CATEGORY: Category = Category::ApiCredential;

pub struct CredentialHelper {
    client: Arc<dyn VaultClient>,
    vault: Option<String>,
}

impl CredentialHelper {
    pub fn new(client: Arc<dyn VaultClient>, vault: Option<String>) -> Self {
        Self { client, vault }
    }

    /// Compose the helper with the `op` command-line adapter.
    pub fn create(config: &Config) -> Self {
        let client: Arc<dyn VaultClient> = Arc::new(OpCli::from_config(config));
        Self::new(client, config.vault.clone())
    }

    /// Runs `op` against `attrs`.
    ///
    /// Returns the answer to write back to git, which only `get` produces.
    /// Non-https requests and unknown operations are silently ignored.
    pub fn run(
        &self,
        op: &Operation,
        mut attrs: AttributeRecord,
    ) -> Result<Option<AttributeRecord>, HelperError> {
        if !attrs.is_https() {
            debug!(protocol = ?attrs.protocol, "ignoring non-https request");
            return Ok(None);
        }
        match op {
            Operation::Get => {
                self.get(&mut attrs)?;
                Ok(Some(attrs))
            }
            Operation::Store => {
                self.store(&attrs)?;
                Ok(None)
            }
            Operation::Erase => {
                self.erase(&attrs)?;
                Ok(None)
            }
            Operation::Unknown(name) => {
                debug!(operation = %name, "ignoring unknown operation");
                Ok(None)
            }
        }
    }

    /// Fills username and password from the first matching item.
    pub fn get(&self, attrs: &mut AttributeRecord) -> Result<(), HelperError> {
        let Some(item) = self.find(attrs).map_err(HelperError::FindItem)? else {
            debug!(host = ?attrs.host, "no matching item");
            return Ok(());
        };
        if let Some(f) = item.field("username") {
            attrs.username = Some(f.value.clone());
        }
        if let Some(f) = item.field("credential") {
            attrs.password = Some(SecretString::new(f.value.clone().into()));
        }
        Ok(())
    }

    /// Creates an item for `attrs`, or updates the one that already matches.
    pub fn store(&self, attrs: &AttributeRecord) -> Result<(), HelperError> {
        let Some(password) = attrs.password.as_ref() else {
            debug!("no password to store");
            return Ok(());
        };
        let existing = self.find(attrs).map_err(HelperError::FindItem)?;

        let host = attrs.host.as_deref().unwrap_or_default();
        let username = attrs.username.as_deref().unwrap_or_default();
        let mut assignments = vec![
            FieldAssignment::text("username", username),
            FieldAssignment::concealed("credential", password.expose_secret()),
            FieldAssignment::text("hostname", host),
        ];
        if let Some(expiry) = attrs.password_expiry {
            assignments.push(FieldAssignment::date(
                "expires",
                expiry.format("%Y-%m-%d").to_string(),
            ));
        }

        let filters = self.vault_filters();
        match existing {
            None => {
                let template = ItemTemplate {
                    category: CREDENTIAL_CATEGORY,
                    title: format!("{host} ({username})"),
                    assignments,
                };
                let created = self
                    .client
                    .create_item(&template, &filters)
                    .map_err(HelperError::CreateItem)?;
                info!(id = %created.id, title = %template.title, "created item");
            }
            Some(item) => {
                self.client
                    .update_item(&item.id, &assignments, &filters)
                    .map_err(HelperError::UpdateItem)?;
                info!(id = %item.id, "updated item");
            }
        }
        Ok(())
    }

    /// Archives the first matching item, if any.
    pub fn erase(&self, attrs: &AttributeRecord) -> Result<(), HelperError> {
        if let Some(item) = self.find(attrs).map_err(HelperError::FindItem)? {
            self.client
                .archive_item(&item.id, &self.vault_filters())
                .map_err(HelperError::DeleteItem)?;
            info!(id = %item.id, "archived item");
        }
        Ok(())
    }

    /// Scans credential items in listing order and returns the first match.
    pub fn find(&self, attrs: &AttributeRecord) -> Result<Option<VaultItem>, OpError> {
        let vault = self.vault_filters();
        let mut list_filters = vault.clone();
        list_filters.push(Filter::Categories(vec![CREDENTIAL_CATEGORY]));

        let list = self.client.list_items(&list_filters)?;
        debug!(candidates = list.len(), "listed credential items");
        for entry in list {
            let item = self.client.get_item(&entry.id, &vault)?;
            if matches(attrs, &item) {
                debug!(id = %item.id, "matched item");
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn vault_filters(&self) -> Vec<Filter> {
        match self.vault.as_deref() {
            Some(v) if !v.is_empty() => vec![Filter::Vault(v.to_string())],
            _ => Vec::new(),
        }
    }
}
