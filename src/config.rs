// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::addons::{IngressClassAddOnProps, KubeviousAddOnProps};
use anyhow::{Context, Result};
use kube::{config::KubeConfigOptions, Client, Config as KConfig};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Provisioning configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub blueprint_name: String,
    /// YAML file with per add-on overrides
    pub addons_config: Option<PathBuf>,
    pub kube_context: Option<String>,
    pub helm_binary: String,
    pub dry_run: bool,
}

/// Add-on overrides as read from the `ADDONS_CONFIG` file
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddOnsConfig {
    #[serde(default)]
    pub kubevious: KubeviousAddOnProps,
    #[serde(default)]
    pub ingress_class: IngressClassAddOnProps,
}

impl AddOnsConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Invalid add-ons configuration")
    }

    /// Overrides used when no configuration file is given
    pub fn demo() -> Self {
        Self {
            kubevious: KubeviousAddOnProps {
                kubevious_service_type: Some("NodePort".to_string()),
                ..Default::default()
            },
            ingress_class: IngressClassAddOnProps::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let blueprint_name =
            env::var("BLUEPRINT_NAME").unwrap_or_else(|_| "my-kubevious-addon".to_string());
        let addons_config = env::var("ADDONS_CONFIG").ok().map(PathBuf::from);
        let kube_context = env::var("KUBE_CONTEXT").ok().filter(|c| !c.is_empty());
        let helm_binary = env::var("HELM_BINARY").unwrap_or_else(|_| "helm".to_string());
        let dry_run = match env::var("DRY_RUN") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("DRY_RUN must be true or false, got {}", v))?,
            Err(_) => false,
        };

        Ok(Config {
            blueprint_name,
            addons_config,
            kube_context,
            helm_binary,
            dry_run,
        })
    }

    /// Kubeconfig selection for the API client, pinned to `KUBE_CONTEXT` when set
    pub fn kube_config_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.kube_context.clone(),
            ..Default::default()
        }
    }

    /// Create the API client for the same context helm is pointed at
    pub async fn kube_client(&self) -> Result<Client> {
        if self.kube_context.is_none() {
            return Client::try_default()
                .await
                .context("Failed to create Kubernetes client");
        }

        let client_config = KConfig::from_kubeconfig(&self.kube_config_options())
            .await
            .with_context(|| {
                format!(
                    "Failed to load kubeconfig context {}",
                    self.kube_context.as_deref().unwrap_or_default()
                )
            })?;
        Client::try_from(client_config).context("Failed to create Kubernetes client")
    }

    /// Read the add-on overrides, falling back to the demo overrides
    pub fn load_addons(&self) -> Result<AddOnsConfig> {
        let Some(path) = &self.addons_config else {
            return Ok(AddOnsConfig::demo());
        };
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        AddOnsConfig::from_yaml(&yaml)
    }
}
