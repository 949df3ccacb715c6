//! casino25 API facade.
//!
//! One method per remote operation. Each method validates its parameters
//! against the operation's descriptor in [`operations`](crate::operations)
//! and only then hands them to the transport. Transport errors are returned
//! as the transport raised them.

use crate::config::ClientConfig;
use crate::errors::{Casino25Error, Casino25Result};
use crate::operations::{self, Operation};
use crate::param_validator::Params;
use crate::requests::IntoParams;
use crate::transport::{HttpTransport, Transport};
use serde_json::Value;
use tracing::debug;

/// API client. Holds nothing but its transport, so it can be reused for any
/// number of sequential calls.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Connect over HTTP(S). Fails with a configuration error if `url` is missing.
    pub fn new(config: ClientConfig) -> Casino25Result<Self> {
        HttpTransport::from_config(&config).map(Self::with_transport)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Invoke `method` without any client-side validation.
    pub fn execute(&self, method: &str, params: impl IntoParams) -> Casino25Result<Value> {
        self.transport.invoke(method, params.into_params()?)
    }

    /// Validate `params` against `operation` and invoke it.
    pub fn call(&self, operation: &Operation, params: impl IntoParams) -> Casino25Result<Value> {
        let params = params.into_params()?;
        operation.validate(&params)?;
        debug!(method = operation.method, fields = params.len(), "invoking");
        self.transport.invoke(operation.method, params)
    }

    /// Returns the list of available games, as the full response.
    pub fn list_games(&self) -> Casino25Result<Value> {
        self.call(&operations::LIST_GAMES, Params::new())
    }

    /// Returns only the `Games` member of the game list.
    pub fn list_games_unwrapped(&self) -> Casino25Result<Value> {
        match self.list_games()? {
            Value::Object(mut response) => response
                .remove("Games")
                .ok_or_else(|| Casino25Error::invalid_response("Game.List result has no Games field")),
            other => Err(Casino25Error::invalid_response(format!(
                "Game.List result is not an object: {other}"
            ))),
        }
    }

    pub fn create_bank_group(&self, bank_group: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CREATE_BANK_GROUP, bank_group)
    }

    /// Creates the bank group or updates it if it already exists.
    pub fn set_bank_group(&self, bank_group: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::SET_BANK_GROUP, bank_group)
    }

    pub fn apply_settings_template(&self, template: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::APPLY_SETTINGS_TEMPLATE, template)
    }

    pub fn create_player(&self, player: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CREATE_PLAYER, player)
    }

    /// Creates the player or updates it if it already exists.
    pub fn set_player(&self, player: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::SET_PLAYER, player)
    }

    pub fn get_balance(&self, player: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::GET_BALANCE, player)
    }

    pub fn change_balance(&self, change: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CHANGE_BALANCE, change)
    }

    pub fn create_session(&self, session: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CREATE_SESSION, session)
    }

    pub fn create_demo_session(&self, session: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CREATE_DEMO_SESSION, session)
    }

    pub fn close_session(&self, session: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::CLOSE_SESSION, session)
    }

    pub fn get_session(&self, session: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::GET_SESSION, session)
    }

    /// Returns sessions matching `filters`; pass an empty map for all of them.
    pub fn list_sessions(&self, filters: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::LIST_SESSIONS, filters)
    }

    pub fn set_bonus(&self, bonus: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::SET_BONUS, bonus)
    }

    pub fn list_bonuses(&self) -> Casino25Result<Value> {
        self.call(&operations::LIST_BONUSES, Params::new())
    }

    pub fn list_player_bonuses(&self, player: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::LIST_PLAYER_BONUSES, player)
    }

    pub fn get_player_bonus(&self, player_bonus: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::GET_PLAYER_BONUS, player_bonus)
    }

    pub fn activate_player_bonus(&self, player_bonus: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::ACTIVATE_PLAYER_BONUS, player_bonus)
    }

    /// Runs the listed operations (`Operations`) against a player bonus.
    pub fn execute_player_bonus(&self, request: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::EXECUTE_PLAYER_BONUS, request)
    }

    pub fn get_jackpot_stream_token(&self, request: impl IntoParams) -> Casino25Result<Value> {
        self.call(&operations::GET_JACKPOT_STREAM_TOKEN, request)
    }
}
