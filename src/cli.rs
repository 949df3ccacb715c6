use crate::client::Client;
use crate::config::ClientConfig;
use crate::config_loader::load_config;
use crate::operations::{self, Operation};
use crate::param_validator::Params;
use crate::requests::IntoParams;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing::Level;

/// Top-level CLI interface for the casino25 API client
#[derive(Parser, Debug)]
#[command(name = "casino25", version, about = "casino25 JSON-RPC API client")]
pub struct Cli {
    /// Config file (defaults to ./casino25.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON-RPC endpoint, overrides the config file
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// PEM file with the client certificate and key
    #[arg(long, global = true)]
    pub cert: Option<PathBuf>,

    /// Log request and response bodies
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the RPC methods and their parameters
    Methods,

    /// List available games
    Games {
        /// Print only the Games field
        #[arg(long)]
        unwrap: bool,
    },

    /// Validate parameters and call an RPC method
    Call {
        /// RPC method name, e.g. Player.Create
        method: String,

        /// Parameters as a JSON object
        #[arg(long, conflicts_with = "params_file")]
        params: Option<String>,

        /// Read parameters from a JSON file
        #[arg(long)]
        params_file: Option<PathBuf>,

        /// Allow methods outside the catalog (no validation)
        #[arg(long)]
        raw: bool,

        /// Validate and print the request without sending it
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    /// Config file and environment, with command-line overrides on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = load_config(self.config.as_deref()).context("loading configuration")?;

        if let Some(url) = &self.url {
            config.url = Some(url.clone());
        }
        if self.insecure {
            config.ssl_verification = false;
        }
        if let Some(cert) = &self.cert {
            config.ssl_key_path = Some(cert.clone());
        }
        config.debug |= self.debug;

        Ok(config)
    }

    /// DEBUG when `debug` is on from the flag, the config file or the
    /// environment. A config that fails to load is reported by `dispatch`.
    pub fn log_level(&self) -> Level {
        let debug = self.debug
            || self
                .client_config()
                .map(|config| config.debug)
                .unwrap_or(false);

        if debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Methods => {
            for operation in operations::CATALOG {
                println!("{}", describe(operation));
            }
            Ok(())
        }
        Commands::Games { unwrap } => {
            let client = Client::new(cli.client_config()?)?;
            let games = if *unwrap {
                client.list_games_unwrapped()?
            } else {
                client.list_games()?
            };
            print_json(&games)
        }
        Commands::Call {
            method,
            params,
            params_file,
            raw,
            dry_run,
        } => {
            let params = read_params(params.as_deref(), params_file.as_ref())?;
            let operation = operations::find(method);

            match operation {
                Some(operation) => operation.validate(&params)?,
                None if *raw => {}
                None => bail!("unknown method {method:?}; use --raw to call it without validation"),
            }

            if *dry_run {
                println!("{method} is valid");
                return print_json(&Value::Object(params));
            }

            let client = Client::new(cli.client_config()?)?;
            let result = match operation {
                Some(operation) => client.call(operation, params)?,
                None => client.execute(method, params)?,
            };
            print_json(&result)
        }
    }
}

fn read_params(inline: Option<&str>, file: Option<&PathBuf>) -> Result<Params> {
    let text = match (inline, file) {
        (Some(inline), _) => inline.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading parameters from {}", path.display()))?,
        (None, None) => return Ok(Params::new()),
    };

    let value: Value = serde_json::from_str(&text).context("parsing parameters as JSON")?;
    Ok(value.into_params()?)
}

fn describe(operation: &Operation) -> String {
    let fields: Vec<String> = operation
        .fields
        .iter()
        .map(|field| {
            let mut text = format!("{}: {:?}", field.name, field.ty);
            if let Some(allowed) = field.allowed {
                text.push_str(&format!(" [{}]", allowed.join("|")));
            }
            if !field.required {
                text.push('?');
            }
            text
        })
        .collect();

    format!("{} ({})", operation.method, fields.join(", "))
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
