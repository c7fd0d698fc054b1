// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Composes add-ons into a single provisioning run.

use crate::addons::{ClusterAddOn, Deployment};
use crate::cluster::ClusterInfo;
use crate::error::Result;
use tracing::{info, instrument};

/// An ordered list of add-ons deployed together against one cluster
pub struct Blueprint {
    name: String,
    add_ons: Vec<Box<dyn ClusterAddOn>>,
}

#[derive(Default)]
pub struct BlueprintBuilder {
    name: Option<String>,
    add_ons: Vec<Box<dyn ClusterAddOn>>,
}

impl BlueprintBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn add_on(mut self, add_on: impl ClusterAddOn + 'static) -> Self {
        self.add_ons.push(Box::new(add_on));
        self
    }

    pub fn build(self) -> Blueprint {
        Blueprint {
            name: self.name.unwrap_or_else(|| "blueprint".to_string()),
            add_ons: self.add_ons,
        }
    }
}

impl Blueprint {
    pub fn builder() -> BlueprintBuilder {
        BlueprintBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_on_names(&self) -> Vec<&str> {
        self.add_ons.iter().map(|a| a.name()).collect()
    }

    /// Deploy every add-on in insertion order, stopping at the first failure
    #[instrument(skip(self, cluster), fields(blueprint = %self.name, cluster = %cluster.name()))]
    pub async fn deploy(&self, cluster: &ClusterInfo) -> Result<Vec<Deployment>> {
        let mut deployments = Vec::with_capacity(self.add_ons.len());

        for add_on in &self.add_ons {
            info!("Deploying add-on {}", add_on.name());
            deployments.push(add_on.deploy(cluster).await?);
        }

        info!("Deployed {} add-ons", deployments.len());
        Ok(deployments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addons::{IngressClassAddOn, IngressClassAddOnProps, KubeviousAddOn, KubeviousAddOnProps};
    use crate::error::AddOnError;
    use crate::test_utils::{namespace_json, recording_cluster, MockService};
    use futures::future::{BoxFuture, FutureExt};

    fn kubevious() -> KubeviousAddOn {
        KubeviousAddOn::new(KubeviousAddOnProps {
            kubevious_service_type: Some("NodePort".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    fn ingress_class() -> IngressClassAddOn {
        IngressClassAddOn::new(IngressClassAddOnProps::default()).unwrap()
    }

    struct FailingAddOn;

    impl ClusterAddOn for FailingAddOn {
        fn name(&self) -> &str {
            "failing"
        }

        fn deploy<'a>(&'a self, _cluster: &'a ClusterInfo) -> BoxFuture<'a, Result<Deployment>> {
            async { Err::<Deployment, _>(AddOnError::HelmError("repository unreachable".to_string())) }.boxed()
        }
    }

    #[test]
    fn test_builder_keeps_order_and_name() {
        let blueprint = Blueprint::builder()
            .name("my-kubevious-addon")
            .add_on(kubevious())
            .add_on(ingress_class())
            .build();

        assert_eq!(blueprint.name(), "my-kubevious-addon");
        assert_eq!(
            blueprint.add_on_names(),
            vec!["ssp-kubevious-addon", "sspIngressClassManifest"]
        );
    }

    #[tokio::test]
    async fn test_deploy_runs_every_add_on() {
        let mock = MockService::new().on_get(
            "/api/v1/namespaces/kubevious",
            200,
            &namespace_json("kubevious"),
        );
        let (cluster, installer, applier) = recording_cluster(mock);
        let blueprint = Blueprint::builder()
            .add_on(kubevious())
            .add_on(ingress_class())
            .build();

        let deployments = blueprint.deploy(&cluster).await.unwrap();

        assert_eq!(deployments.len(), 2);
        assert!(matches!(deployments[0], Deployment::Chart(_)));
        assert!(matches!(deployments[1], Deployment::Manifest { documents: 1, .. }));
        assert_eq!(installer.requests.lock().unwrap().len(), 1);
        assert_eq!(applier.manifests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_deploy_stops_at_first_failure() {
        let (cluster, _, applier) = recording_cluster(MockService::new());
        let blueprint = Blueprint::builder()
            .add_on(FailingAddOn)
            .add_on(ingress_class())
            .build();

        let err = blueprint.deploy(&cluster).await.unwrap_err();

        assert!(matches!(err, AddOnError::HelmError(_)));
        assert!(applier.manifests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_blueprint() {
        let (cluster, _, _) = recording_cluster(MockService::new());

        let deployments = Blueprint::builder().build().deploy(&cluster).await.unwrap();

        assert!(deployments.is_empty());
    }
}
