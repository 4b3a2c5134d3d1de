//! Local workbench for the props web part.
//!
//! Plays the hosting runtime: builds a [`WebPartContext`], loads stored
//! properties, initializes the web part, replays pane edits and renders.

use anyhow::{Context, Result, bail};
use clap::Parser;
use propspane_webpart::schema::PropertyPaneConfiguration;
use propspane_webpart::{EnvironmentType, PaneStrings, PropsWebPart, WebPartContext, WebPartHost};
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "propspane-workbench")]
#[command(about = "Run the props web part outside a site and print its pane and markup")]
pub struct Args {
    /// Path to a JSON workbench config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Execution mode: local or connected
    #[arg(long)]
    pub mode: Option<EnvironmentType>,

    /// Absolute URL of the site (connected mode)
    #[arg(long)]
    pub site_url: Option<String>,

    /// Path to stored properties (`{"dataVersion": "...", "properties": {...}}`)
    #[arg(long)]
    pub properties: Option<PathBuf>,

    /// Pane edit to replay, as NAME=VALUE (VALUE is JSON, or a bare string)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Workbench settings. Every field has a default so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchConfig {
    pub environment: EnvironmentType,
    pub site_url: Option<String>,
    /// Bearer token sent with site requests in connected mode.
    pub access_token: Option<String>,
    pub request_timeout_secs: u64,
    pub properties: Option<PathBuf>,
    pub strings: PaneStrings,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentType::Local,
            site_url: None,
            access_token: None,
            request_timeout_secs: 30,
            properties: None,
            strings: PaneStrings::default(),
        }
    }
}

impl WorkbenchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Config file (if any) with command line flags layered on top.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(mode) = args.mode {
            config.environment = mode;
        }
        if let Some(site_url) = &args.site_url {
            config.site_url = Some(site_url.clone());
        }
        if let Some(properties) = &args.properties {
            config.properties = Some(properties.clone());
        }
        Ok(config)
    }

    /// Context handed to the web part, with an authenticated client in connected mode.
    pub fn context(&self) -> Result<WebPartContext> {
        match self.environment {
            EnvironmentType::Local => Ok(WebPartContext::local()),
            EnvironmentType::Connected => {
                let site_url = self
                    .site_url
                    .clone()
                    .context("connected mode requires a site URL (--site-url)")?;

                let mut headers = HeaderMap::new();
                if let Some(token) = &self.access_token {
                    let value = HeaderValue::from_str(&format!("Bearer {token}"))
                        .context("Access token is not a valid header value")?;
                    headers.insert(AUTHORIZATION, value);
                }
                let client = Client::builder()
                    .default_headers(headers)
                    .timeout(Duration::from_secs(self.request_timeout_secs))
                    .build()
                    .context("Failed to create HTTP client")?;

                Ok(WebPartContext::connected(site_url, client))
            }
        }
    }
}

/// One `--set NAME=VALUE` edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEdit {
    pub name: String,
    pub value: Value,
}

impl PropertyEdit {
    pub fn parse(raw: &str) -> Result<Self> {
        let Some((name, value)) = raw.split_once('=') else {
            bail!("expected NAME=VALUE, got '{raw}'");
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("missing property name in '{raw}'");
        }
        let value =
            serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}

impl Args {
    pub fn edits(&self) -> Result<Vec<PropertyEdit>> {
        self.set.iter().map(|raw| PropertyEdit::parse(raw)).collect()
    }
}

/// What a workbench run produced.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbenchOutput {
    pub pane: PropertyPaneConfiguration,
    pub html: String,
    /// Properties as the host would store them after the edits.
    pub persisted: Value,
}

pub async fn run(config: &WorkbenchConfig, edits: &[PropertyEdit]) -> Result<WorkbenchOutput> {
    let context = config.context()?;
    let web_part = PropsWebPart::new().with_strings(config.strings.clone());
    let mut host = WebPartHost::with_defaults(web_part, context);

    if let Some(path) = &config.properties {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read properties {}", path.display()))?;
        host.restore_json(&raw)
            .with_context(|| format!("Failed to restore properties from {}", path.display()))?;
        debug!("Restored properties from {:?}", path);
    }

    host.initialize().await.context("Web part initialization failed")?;

    for edit in edits {
        let change = host
            .on_property_pane_field_changed(&edit.name, edit.value.clone())
            .with_context(|| format!("Rejected edit to {}", edit.name))?;
        debug!("Edit to {}: {:?}", edit.name, change);
    }
    if host.apply_pending_changes() {
        info!("Applied {} pane edits", edits.len());
    }

    Ok(WorkbenchOutput {
        pane: host.property_pane_configuration(),
        html: host.render()?,
        persisted: serde_json::to_value(host.persist())?,
    })
}
