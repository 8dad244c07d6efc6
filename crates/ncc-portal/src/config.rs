use anyhow::Context;
use std::io::Read;

#[derive(serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bind_address: String,
    pub bind_port: u16,
    /// Base64-encoded AES-256 master key for the field codec. Loaded once at
    /// startup; never logged, never sent to any client.
    pub field_secret: String,
    pub database: ncc_db::Config,
}

pub fn load() -> anyhow::Result<Config> {
    let mut configuration = String::with_capacity(4096);
    std::fs::File::open("./app-config.toml")
        .context("unable to open configuration file ./app-config.toml")?
        .read_to_string(&mut configuration)
        .context("unable to read configuration file ./app-config.toml")?;
    let mut config = toml::from_str::<Config>(&configuration)
        .context("unable to parse configuration file ./app-config.toml")?;
    if let Ok(field_secret) = std::env::var("NCC_PORTAL_FIELD_SECRET") {
        config.field_secret = field_secret;
    }
    Ok(config)
}
