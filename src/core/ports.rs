use crate::vault::error::OpError;
use crate::vault::filter::Filter;
use crate::vault::models::{Category, ItemSummary, VaultItem};
use std::fmt;

/// Access to the password-manager vault.
///
/// "Not found" is never an error at this layer; it is the caller's job to
/// decide what an empty listing means.
pub trait VaultClient: Send + Sync {
    fn list_items(&self, filters: &[Filter]) -> Result<Vec<ItemSummary>, OpError>;
    fn get_item(&self, id: &str, filters: &[Filter]) -> Result<VaultItem, OpError>;
    fn create_item(&self, template: &ItemTemplate, filters: &[Filter])
        -> Result<VaultItem, OpError>;
    fn update_item(
        &self,
        id: &str,
        assignments: &[FieldAssignment],
        filters: &[Filter],
    ) -> Result<(), OpError>;
    /// Moves the item to the archive.
    fn archive_item(&self, id: &str, filters: &[Filter]) -> Result<(), OpError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentType {
    Text,
    Concealed,
    Email,
    Url,
    Date,
    MonthYear,
    Phone,
}

impl AssignmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentType::Text => "text",
            AssignmentType::Concealed => "concealed",
            AssignmentType::Email => "email",
            AssignmentType::Url => "url",
            AssignmentType::Date => "date",
            AssignmentType::MonthYear => "monthYear",
            AssignmentType::Phone => "phone",
        }
    }
}

/// A `label[type]=value` field assignment for `op item create/edit`.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub label: String,
    pub kind: AssignmentType,
    pub value: String,
}

impl FieldAssignment {
    pub fn new(label: impl Into<String>, kind: AssignmentType, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            value: value.into(),
        }
    }

    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, AssignmentType::Text, value)
    }

    pub fn concealed(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, AssignmentType::Concealed, value)
    }

    pub fn date(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, AssignmentType::Date, value)
    }

    pub fn to_arg(&self) -> String {
        format!("{}[{}]={}", self.label, self.kind.as_str(), self.value)
    }
}

impl fmt::Debug for FieldAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.kind {
            AssignmentType::Concealed => "<REDACTED>",
            _ => self.value.as_str(),
        };
        f.debug_struct("FieldAssignment")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("value", &value)
            .finish()
    }
}

/// Everything needed to create a new item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    pub category: Category,
    pub title: String,
    pub assignments: Vec<FieldAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_renders_op_syntax() {
        assert_eq!(FieldAssignment::text("username", "qux").to_arg(), "username[text]=qux");
        assert_eq!(
            FieldAssignment::concealed("credential", "a=b").to_arg(),
            "credential[concealed]=a=b"
        );
        assert_eq!(
            FieldAssignment::new("exp", AssignmentType::MonthYear, "202501").to_arg(),
            "exp[monthYear]=202501"
        );
    }

    #[test]
    fn concealed_assignment_debug_is_redacted() {
        let dbg = format!("{:?}", FieldAssignment::concealed("credential", "hunter2"));
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<REDACTED>"));
    }
}
