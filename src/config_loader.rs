use crate::config::ClientConfig;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "casino25.toml";
pub const ENV_PREFIX: &str = "CASINO25_";

/// Default config file: `./casino25.toml` if present, otherwise
/// `<config dir>/casino25/config.toml`.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("casino25").join("config.toml"))
        .unwrap_or(local)
}

/// Layer defaults, the TOML file and `CASINO25_*` environment variables.
///
/// A missing file is not an error. The endpoint is checked when the client
/// is constructed, not here.
pub fn load_config(path: Option<&Path>) -> Result<ClientConfig, figment::Error> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    Figment::from(Serialized::defaults(ClientConfig::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_from_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
url = "https://api.example.com/jsonrpc"
ssl_verification = false
sslKeyPath = "/etc/casino25/client.pem"
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.url.as_deref(), Some("https://api.example.com/jsonrpc"));
        assert!(!config.ssl_verification);
        assert!(!config.debug);
        assert_eq!(
            config.ssl_key_path,
            Some(PathBuf::from("/etc/casino25/client.pem"))
        );
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = load_config(Some(path.as_path())).unwrap();
        assert!(config.ssl_verification);
        assert!(!config.debug);
    }
}
