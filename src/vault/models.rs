use serde::Deserialize;
use std::fmt;

/// Entry in the output of `op item list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemSummary {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub vault: Option<VaultRef>,
    #[serde(default)]
    pub category: Category,
}

/// Full item as returned by `op item get` and `op item create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VaultItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub vault: Option<VaultRef>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub fields: Vec<VaultField>,
    #[serde(default)]
    pub urls: Vec<ItemUrl>,
}

impl VaultItem {
    /// Looks a field up by id or label.
    ///
    /// When several fields share the key, the last one in item order wins.
    pub fn field(&self, key: &str) -> Option<&VaultField> {
        self.fields
            .iter()
            .rev()
            .find(|f| f.id == key || f.label == key)
    }

    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.field(key).map(|f| f.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VaultField {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub purpose: Option<FieldPurpose>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VaultRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemUrl {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub primary: bool,
    pub href: String,
}

/// Item category. Deserialized from op's JSON names (`API_CREDENTIAL`),
/// displayed as the names op accepts on the command line (`API Credential`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    ApiCredential,
    BankAccount,
    CreditCard,
    Database,
    Document,
    DriverLicense,
    EmailAccount,
    Identity,
    Login,
    MedicalRecord,
    Membership,
    OutdoorLicense,
    Passport,
    Password,
    RewardProgram,
    SecureNote,
    Server,
    SocialSecurityNumber,
    SoftwareLicense,
    SshKey,
    WirelessRouter,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ApiCredential => "API Credential",
            Category::BankAccount => "Bank Account",
            Category::CreditCard => "Credit Card",
            Category::Database => "Database",
            Category::Document => "Document",
            Category::DriverLicense => "Driver License",
            Category::EmailAccount => "Email Account",
            Category::Identity => "Identity",
            Category::Login => "Login",
            Category::MedicalRecord => "Medical Record",
            Category::Membership => "Membership",
            Category::OutdoorLicense => "Outdoor License",
            Category::Passport => "Passport",
            Category::Password => "Password",
            Category::RewardProgram => "Reward Program",
            Category::SecureNote => "Secure Note",
            Category::Server => "Server",
            Category::SocialSecurityNumber => "Social Security Number",
            Category::SoftwareLicense => "Software License",
            Category::SshKey => "SSH Key",
            Category::WirelessRouter => "Wireless Router",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Address,
    Concealed,
    CreditCardNumber,
    CreditCardType,
    Date,
    Email,
    File,
    Gender,
    Menu,
    MonthYear,
    Otp,
    Phone,
    Reference,
    #[serde(rename = "SSHKEY")]
    SshKey,
    String,
    Url,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldPurpose {
    Username,
    Password,
    Notes,
    #[serde(other)]
    Other,
}
