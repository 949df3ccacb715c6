//! Typed request payloads.
//!
//! Each struct serializes to the PascalCase parameter set its operation
//! expects. `None` fields are left out of the payload entirely.

use crate::errors::{Casino25Error, Casino25Result};
use crate::param_validator::Params;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Anything that can be turned into a parameter set for a remote call.
pub trait IntoParams {
    fn into_params(self) -> Casino25Result<Params>;
}

impl IntoParams for Params {
    fn into_params(self) -> Casino25Result<Params> {
        Ok(self)
    }
}

/// Accepts `json!({...})` literals; anything other than an object is refused.
impl IntoParams for Value {
    fn into_params(self) -> Casino25Result<Params> {
        match self {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Params::new()),
            other => Err(Casino25Error::invalid_params(format!(
                "parameters must be a JSON object, got {other}"
            ))),
        }
    }
}

fn to_params<T: Serialize>(request: &T, context: &str) -> Casino25Result<Params> {
    let value =
        serde_json::to_value(request).map_err(|e| Casino25Error::serialization(context, e))?;
    value.into_params()
}

macro_rules! impl_into_params {
    ($($request:ty),* $(,)?) => {
        $(
            impl IntoParams for $request {
                fn into_params(self) -> Casino25Result<Params> {
                    to_params(&self, stringify!($request))
                }
            }
        )*
    };
}

/// How an existing session is treated when a new one is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestorePolicy {
    Restore,
    Create,
    Last,
}

impl RestorePolicy {
    pub const VALUES: &'static [&'static str] = &["Restore", "Create", "Last"];

    pub fn as_str(&self) -> &'static str {
        match self {
            RestorePolicy::Restore => "Restore",
            RestorePolicy::Create => "Create",
            RestorePolicy::Last => "Last",
        }
    }
}

impl FromStr for RestorePolicy {
    type Err = Casino25Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Restore" => Ok(RestorePolicy::Restore),
            "Create" => Ok(RestorePolicy::Create),
            "Last" => Ok(RestorePolicy::Last),
            _ => Err(Casino25Error::invalid_value("RestorePolicy", Self::VALUES)),
        }
    }
}

impl fmt::Display for RestorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session state used when filtering session lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Open,
    Closed,
}

impl SessionStatus {
    pub const VALUES: &'static [&'static str] = &["Open", "Closed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Open => "Open",
            SessionStatus::Closed => "Closed",
        }
    }
}

impl FromStr for SessionStatus {
    type Err = Casino25Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "Open" => Ok(SessionStatus::Open),
            "Closed" => Ok(SessionStatus::Closed),
            _ => Err(Casino25Error::invalid_value("Status", Self::VALUES)),
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bank group for `BankGroup.Create` and `BankGroup.Set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BankGroup {
    pub id: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bank_value: Option<i64>,
}

impl BankGroup {
    pub fn new(id: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            default_bank_value: None,
        }
    }

    pub fn with_default_bank_value(mut self, value: i64) -> Self {
        self.default_bank_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SettingsTemplate {
    pub bank_group_id: String,
    pub settings_template_id: String,
}

impl SettingsTemplate {
    pub fn new(
        bank_group_id: impl Into<String>,
        settings_template_id: impl Into<String>,
    ) -> Self {
        Self {
            bank_group_id: bank_group_id.into(),
            settings_template_id: settings_template_id.into(),
        }
    }
}

/// Player for `Player.Create` and `Player.Set`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub id: String,
    pub bank_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
}

impl Player {
    pub fn new(id: impl Into<String>, bank_group_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bank_group_id: bank_group_id.into(),
            nick: None,
        }
    }

    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }
}

/// Identifies a player, e.g. for `Balance.Get` or `PlayerBonus.List`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRef {
    pub player_id: String,
}

impl PlayerRef {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
        }
    }
}

/// Balance delta in the bank group's minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceChange {
    pub player_id: String,
    pub amount: i64,
}

impl BalanceChange {
    pub fn new(player_id: impl Into<String>, amount: i64) -> Self {
        Self {
            player_id: player_id.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionRequest {
    pub player_id: String,
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restore_policy: Option<RestorePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_host: Option<String>,
}

impl SessionRequest {
    pub fn new(player_id: impl Into<String>, game_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            game_id: game_id.into(),
            restore_policy: None,
            static_host: None,
        }
    }

    pub fn with_restore_policy(mut self, policy: RestorePolicy) -> Self {
        self.restore_policy = Some(policy);
        self
    }

    pub fn with_static_host(mut self, host: impl Into<String>) -> Self {
        self.static_host = Some(host.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DemoSession {
    pub game_id: String,
    pub bank_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_balance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_host: Option<String>,
}

impl DemoSession {
    pub fn new(game_id: impl Into<String>, bank_group_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            bank_group_id: bank_group_id.into(),
            start_balance: None,
            static_host: None,
        }
    }

    pub fn with_start_balance(mut self, balance: i64) -> Self {
        self.start_balance = Some(balance);
        self
    }

    pub fn with_static_host(mut self, host: impl Into<String>) -> Self {
        self.static_host = Some(host.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionRef {
    pub session_id: String,
}

impl SessionRef {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Filters for `Session.List`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionFilter {
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time_from: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time_to: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_time_from: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_time_to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_group_ids: Option<Vec<String>>,
}

/// Bonus definition for `Bonus.Set`.
///
/// Only `Id` is checked client-side; the remaining bonus settings are
/// forwarded as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bonus {
    pub id: String,
    #[serde(flatten)]
    pub settings: Params,
}

impl Bonus {
    const ID_KEY: &'static str = "Id";

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            settings: Params::new(),
        }
    }

    /// Adds a bonus setting. `Id` is reserved for the bonus id and is ignored.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != Self::ID_KEY {
            self.settings.insert(key, value.into());
        }
        self
    }
}

/// `id` always wins over an `Id` entry placed directly in `settings`.
impl IntoParams for Bonus {
    fn into_params(self) -> Casino25Result<Params> {
        let mut params = to_params(&self, "Bonus")?;
        params.insert(Self::ID_KEY.to_string(), Value::String(self.id));
        Ok(params)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerBonusRef {
    pub bonus_id: String,
    pub player_id: String,
}

impl PlayerBonusRef {
    pub fn new(bonus_id: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            bonus_id: bonus_id.into(),
            player_id: player_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerBonusOperations {
    pub bonus_id: String,
    pub player_id: String,
    pub operations: Vec<Value>,
}

impl PlayerBonusOperations {
    pub fn new(bonus_id: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            bonus_id: bonus_id.into(),
            player_id: player_id.into(),
            operations: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: impl Into<Value>) -> Self {
        self.operations.push(operation.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JackpotStreamToken {
    pub bank_group_id: String,
    pub tag: String,
    pub expiry_in_seconds: i64,
}

impl JackpotStreamToken {
    pub fn new(
        bank_group_id: impl Into<String>,
        tag: impl Into<String>,
        expiry_in_seconds: i64,
    ) -> Self {
        Self {
            bank_group_id: bank_group_id.into(),
            tag: tag.into(),
            expiry_in_seconds,
        }
    }
}

impl_into_params!(
    BankGroup,
    SettingsTemplate,
    Player,
    PlayerRef,
    BalanceChange,
    SessionRequest,
    DemoSession,
    SessionRef,
    SessionFilter,
    PlayerBonusRef,
    PlayerBonusOperations,
    JackpotStreamToken,
);
