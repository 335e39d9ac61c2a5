// exaroton API response types
//
// Plain data holders deserialized from the unwrapped `data` payload. Each type
// also declares its rendering schema (see `render`), listing fields in the
// same order as the struct.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use strum::{EnumIter, FromRepr, IntoStaticStr};

use crate::render::{Render, display_via_render, field, list_value};

// ── Response Envelope ────────────────────────────────────────────────

/// Standard exaroton response envelope.
///
/// ```json
/// { "success": true, "error": null, "data": ... }
/// ```
///
/// Only used for error bodies; successful payloads are unwrapped by key so
/// that a missing `data` can be reported precisely.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<String>,
}

// ── Account ──────────────────────────────────────────────────────────

/// The authenticated account (`GET account`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub verified: bool,
    pub credits: i64,
}

impl Render for Account {
    const TYPE_NAME: &'static str = "Account";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("name", field(&self.name)),
            ("email", field(&self.email)),
            ("verified", field(&self.verified)),
            ("credits", field(&self.credits)),
        ]
    }
}

// ── Server ───────────────────────────────────────────────────────────

/// Server state, translated from the numeric wire code.
///
/// Code 9 is not assigned by the API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, EnumIter, FromRepr, IntoStaticStr,
)]
#[repr(u8)]
pub enum ServerStatus {
    Offline = 0,
    Online = 1,
    Starting = 2,
    Stopping = 3,
    Restarting = 4,
    Saving = 5,
    Loading = 6,
    Crashed = 7,
    Pending = 8,
    Preparing = 10,
}

impl ServerStatus {
    /// Look up a wire code. Unknown codes have no label.
    pub fn from_code(code: i64) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// The numeric wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable label, e.g. `"Online"`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Between stable states (neither online, offline, nor crashed).
    pub fn is_transitional(self) -> bool {
        !matches!(self, Self::Online | Self::Offline | Self::Crashed)
    }
}

fn status_from_code<'de, D>(deserializer: D) -> Result<Option<ServerStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<i64>::deserialize(deserializer)?;
    Ok(code.and_then(ServerStatus::from_code))
}

#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn status_to_code<S>(status: &Option<ServerStatus>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    status.map(ServerStatus::code).serialize(serializer)
}

/// A game server (`GET servers`, `GET servers/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub address: String,
    pub motd: String,
    /// Serialized back as the numeric wire code.
    #[serde(
        default,
        deserialize_with = "status_from_code",
        serialize_with = "status_to_code"
    )]
    pub status: Option<ServerStatus>,
    /// Only assigned while the server is running.
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    pub players: Players,
    #[serde(default)]
    pub software: Option<Software>,
    pub shared: bool,
}

impl Render for Server {
    const TYPE_NAME: &'static str = "Server";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", field(&self.id)),
            ("name", field(&self.name)),
            ("address", field(&self.address)),
            ("motd", field(&self.motd)),
            ("status", self.status.map(|s| Value::from(s.label()))),
            ("host", field(&self.host)),
            ("port", field(&self.port)),
            ("players", Some(self.players.to_render_value())),
            ("software", self.software.as_ref().map(Software::to_render_value)),
            ("shared", field(&self.shared)),
        ]
    }
}

/// Player counts and online names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub max: u32,
    pub count: u32,
    #[serde(default)]
    pub list: Vec<String>,
}

impl Render for Players {
    const TYPE_NAME: &'static str = "Players";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("max", field(&self.max)),
            ("count", field(&self.count)),
            ("list", field(&self.list)),
        ]
    }
}

/// Installed server software.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    pub id: String,
    pub name: String,
    pub version: String,
}

impl Render for Software {
    const TYPE_NAME: &'static str = "Software";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", field(&self.id)),
            ("name", field(&self.name)),
            ("version", field(&self.version)),
        ]
    }
}

// ── Logs ─────────────────────────────────────────────────────────────

/// A log uploaded to mclo.gs (`GET servers/{id}/logs/share`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logs {
    pub id: String,
    pub url: String,
    pub raw: String,
}

impl Render for Logs {
    const TYPE_NAME: &'static str = "Logs";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", field(&self.id)),
            ("url", field(&self.url)),
            ("raw", field(&self.raw)),
        ]
    }
}

// ── Files ────────────────────────────────────────────────────────────

/// File or directory metadata (`GET servers/{id}/files/info/{path}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub is_text_file: bool,
    #[serde(default)]
    pub is_config_file: bool,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub is_log: bool,
    #[serde(default)]
    pub is_readable: bool,
    #[serde(default)]
    pub is_writable: bool,
    #[serde(default)]
    pub size: u64,
    /// Directory entries; only present for directories.
    #[serde(default)]
    pub children: Option<Vec<FileInfo>>,
}

impl Render for FileInfo {
    const TYPE_NAME: &'static str = "FileInfo";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("path", field(&self.path)),
            ("name", field(&self.name)),
            ("isTextFile", field(&self.is_text_file)),
            ("isConfigFile", field(&self.is_config_file)),
            ("isDirectory", field(&self.is_directory)),
            ("isLog", field(&self.is_log)),
            ("isReadable", field(&self.is_readable)),
            ("isWritable", field(&self.is_writable)),
            ("size", field(&self.size)),
            ("children", self.children.as_deref().map(list_value)),
        ]
    }
}

// ── Billing ──────────────────────────────────────────────────────────

/// A credit pool (`GET billing/pools`, `GET billing/pools/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPool {
    pub id: String,
    pub name: String,
    pub credits: f64,
    pub servers: u32,
    pub owner: String,
    pub is_owner: bool,
    pub members: u32,
    pub own_share: f64,
    pub own_credits: f64,
}

impl Render for CreditPool {
    const TYPE_NAME: &'static str = "CreditPool";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("id", field(&self.id)),
            ("name", field(&self.name)),
            ("credits", field(&self.credits)),
            ("servers", field(&self.servers)),
            ("owner", field(&self.owner)),
            ("isOwner", field(&self.is_owner)),
            ("members", field(&self.members)),
            ("ownShare", field(&self.own_share)),
            ("ownCredits", field(&self.own_credits)),
        ]
    }
}

/// A member of a credit pool (`GET billing/pools/{id}/members`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPoolMember {
    pub account: String,
    pub name: String,
    pub share: f64,
    pub credits: f64,
    pub is_owner: bool,
}

impl Render for CreditPoolMember {
    const TYPE_NAME: &'static str = "CreditPoolMember";

    fn fields(&self) -> Vec<(&'static str, Option<Value>)> {
        vec![
            ("account", field(&self.account)),
            ("name", field(&self.name)),
            ("share", field(&self.share)),
            ("credits", field(&self.credits)),
            ("isOwner", field(&self.is_owner)),
        ]
    }
}

display_via_render!(
    Account,
    Server,
    Players,
    Software,
    Logs,
    FileInfo,
    CreditPool,
    CreditPoolMember,
);
