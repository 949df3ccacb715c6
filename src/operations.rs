//! Catalog of remote operations and the parameters each one declares.
//!
//! Descriptors are constants; validation walks the declared fields in order
//! and stops on the first failure.

use crate::errors::Casino25Result;
use crate::param_validator::{
    optional_param, required_param, strict_values, ParamType, Params, Refinement,
};
use crate::requests::{RestorePolicy, SessionStatus};
use ParamType::{Integer, List, String as Str, StringList, Timestamp};

/// RPC method names understood by the server.
pub mod methods {
    pub const GAME_LIST: &str = "Game.List";
    pub const BANK_GROUP_CREATE: &str = "BankGroup.Create";
    pub const BANK_GROUP_SET: &str = "BankGroup.Set";
    pub const BANK_GROUP_APPLY_SETTINGS_TEMPLATE: &str = "BankGroup.ApplySettingsTemplate";
    pub const PLAYER_CREATE: &str = "Player.Create";
    pub const PLAYER_SET: &str = "Player.Set";
    pub const BALANCE_GET: &str = "Balance.Get";
    pub const BALANCE_CHANGE: &str = "Balance.Change";
    pub const SESSION_CREATE: &str = "Session.Create";
    pub const SESSION_CREATE_DEMO: &str = "Session.CreateDemo";
    pub const SESSION_CLOSE: &str = "Session.Close";
    pub const SESSION_GET: &str = "Session.Get";
    pub const SESSION_LIST: &str = "Session.List";
    pub const BONUS_SET: &str = "Bonus.Set";
    pub const BONUS_LIST: &str = "Bonus.List";
    pub const PLAYER_BONUS_LIST: &str = "PlayerBonus.List";
    pub const PLAYER_BONUS_GET: &str = "PlayerBonus.Get";
    pub const PLAYER_BONUS_ACTIVATE: &str = "PlayerBonus.Activate";
    pub const PLAYER_BONUS_EXECUTE: &str = "PlayerBonus.Execute";
    pub const JACKPOT_GET_STREAM_TOKEN: &str = "Jackpot.GetStreamToken";
}

/// Declared rule for a single parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub ty: ParamType,
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            required: true,
            ty,
            allowed: None,
        }
    }

    pub const fn optional(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            required: false,
            ty,
            allowed: None,
        }
    }

    /// Restrict the field to one of `values`.
    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed = Some(values);
        self
    }

    /// Run presence, type and allowed-value checks for this field.
    pub fn check(&self, params: &Params) -> Casino25Result<()> {
        let one_of = |p: &Params, key: &str| match self.allowed {
            Some(values) => strict_values(p, key, values),
            None => Ok(()),
        };
        let refine: Refinement<'_> = &one_of;

        if self.required {
            required_param(params, self.name, self.ty, Some(refine))
        } else {
            optional_param(params, self.name, self.ty, Some(refine))
        }
    }
}

/// A remote procedure and the parameters it declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub method: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Operation {
    /// Validate `params` against every declared field, in declaration order.
    pub fn validate(&self, params: &Params) -> Casino25Result<()> {
        self.fields.iter().try_for_each(|field| field.check(params))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|field| !field.required)
    }
}

pub const LIST_GAMES: Operation = Operation {
    method: methods::GAME_LIST,
    fields: &[],
};

pub const CREATE_BANK_GROUP: Operation = Operation {
    method: methods::BANK_GROUP_CREATE,
    fields: &[
        FieldSpec::required("Id", Str),
        FieldSpec::required("Currency", Str),
        FieldSpec::optional("DefaultBankValue", Integer),
    ],
};

pub const SET_BANK_GROUP: Operation = Operation {
    method: methods::BANK_GROUP_SET,
    fields: CREATE_BANK_GROUP.fields,
};

pub const APPLY_SETTINGS_TEMPLATE: Operation = Operation {
    method: methods::BANK_GROUP_APPLY_SETTINGS_TEMPLATE,
    fields: &[
        FieldSpec::required("BankGroupId", Str),
        FieldSpec::required("SettingsTemplateId", Str),
    ],
};

pub const CREATE_PLAYER: Operation = Operation {
    method: methods::PLAYER_CREATE,
    fields: &[
        FieldSpec::required("Id", Str),
        FieldSpec::optional("Nick", Str),
        FieldSpec::required("BankGroupId", Str),
    ],
};

pub const SET_PLAYER: Operation = Operation {
    method: methods::PLAYER_SET,
    fields: CREATE_PLAYER.fields,
};

pub const GET_BALANCE: Operation = Operation {
    method: methods::BALANCE_GET,
    fields: &[FieldSpec::required("PlayerId", Str)],
};

pub const CHANGE_BALANCE: Operation = Operation {
    method: methods::BALANCE_CHANGE,
    fields: &[
        FieldSpec::required("PlayerId", Str),
        FieldSpec::required("Amount", Integer),
    ],
};

pub const CREATE_SESSION: Operation = Operation {
    method: methods::SESSION_CREATE,
    fields: &[
        FieldSpec::required("PlayerId", Str),
        FieldSpec::required("GameId", Str),
        FieldSpec::optional("RestorePolicy", Str).one_of(RestorePolicy::VALUES),
        FieldSpec::optional("StaticHost", Str),
    ],
};

pub const CREATE_DEMO_SESSION: Operation = Operation {
    method: methods::SESSION_CREATE_DEMO,
    fields: &[
        FieldSpec::required("GameId", Str),
        FieldSpec::required("BankGroupId", Str),
        FieldSpec::optional("StartBalance", Integer),
        FieldSpec::optional("StaticHost", Str),
    ],
};

pub const CLOSE_SESSION: Operation = Operation {
    method: methods::SESSION_CLOSE,
    fields: &[FieldSpec::required("SessionId", Str)],
};

pub const GET_SESSION: Operation = Operation {
    method: methods::SESSION_GET,
    fields: &[FieldSpec::required("SessionId", Str)],
};

pub const LIST_SESSIONS: Operation = Operation {
    method: methods::SESSION_LIST,
    fields: &[
        FieldSpec::optional("CreateTimeFrom", Timestamp),
        FieldSpec::optional("CreateTimeTo", Timestamp),
        FieldSpec::optional("CloseTimeFrom", Timestamp),
        FieldSpec::optional("CloseTimeTo", Timestamp),
        FieldSpec::optional("Status", Str).one_of(SessionStatus::VALUES),
        FieldSpec::optional("PlayerIds", StringList),
        FieldSpec::optional("BankGroupIds", StringList),
    ],
};

pub const SET_BONUS: Operation = Operation {
    method: methods::BONUS_SET,
    fields: &[FieldSpec::required("Id", Str)],
};

pub const LIST_BONUSES: Operation = Operation {
    method: methods::BONUS_LIST,
    fields: &[],
};

pub const LIST_PLAYER_BONUSES: Operation = Operation {
    method: methods::PLAYER_BONUS_LIST,
    fields: &[FieldSpec::required("PlayerId", Str)],
};

pub const GET_PLAYER_BONUS: Operation = Operation {
    method: methods::PLAYER_BONUS_GET,
    fields: &[
        FieldSpec::required("BonusId", Str),
        FieldSpec::required("PlayerId", Str),
    ],
};

pub const ACTIVATE_PLAYER_BONUS: Operation = Operation {
    method: methods::PLAYER_BONUS_ACTIVATE,
    fields: GET_PLAYER_BONUS.fields,
};

pub const EXECUTE_PLAYER_BONUS: Operation = Operation {
    method: methods::PLAYER_BONUS_EXECUTE,
    fields: &[
        FieldSpec::required("BonusId", Str),
        FieldSpec::required("PlayerId", Str),
        FieldSpec::required("Operations", List),
    ],
};

pub const GET_JACKPOT_STREAM_TOKEN: Operation = Operation {
    method: methods::JACKPOT_GET_STREAM_TOKEN,
    fields: &[
        FieldSpec::required("BankGroupId", Str),
        FieldSpec::required("Tag", Str),
        FieldSpec::required("ExpiryInSeconds", Integer),
    ],
};

/// Every operation the client exposes.
pub const CATALOG: &[Operation] = &[
    LIST_GAMES,
    CREATE_BANK_GROUP,
    SET_BANK_GROUP,
    APPLY_SETTINGS_TEMPLATE,
    CREATE_PLAYER,
    SET_PLAYER,
    GET_BALANCE,
    CHANGE_BALANCE,
    CREATE_SESSION,
    CREATE_DEMO_SESSION,
    CLOSE_SESSION,
    GET_SESSION,
    LIST_SESSIONS,
    SET_BONUS,
    LIST_BONUSES,
    LIST_PLAYER_BONUSES,
    GET_PLAYER_BONUS,
    ACTIVATE_PLAYER_BONUS,
    EXECUTE_PLAYER_BONUS,
    GET_JACKPOT_STREAM_TOKEN,
];

/// Look up an operation by its RPC method name.
pub fn find(method: &str) -> Option<&'static Operation> {
    CATALOG.iter().find(|operation| operation.method == method)
}
