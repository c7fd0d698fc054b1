// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster add-ons deployed by a blueprint.

pub mod helm;
pub mod ingress_class;
pub mod kubevious;

pub use helm::{HelmAddOn, HelmChartProps};
pub use ingress_class::{IngressClassAddOn, IngressClassAddOnProps};
pub use kubevious::{KubeviousAddOn, KubeviousAddOnProps};

use crate::cluster::ClusterInfo;
use crate::error::Result;
use crate::kubernetes::ChartRelease;
use futures::future::BoxFuture;

/// Outcome of deploying a single add-on
#[derive(Debug, Clone, PartialEq)]
pub enum Deployment {
    /// A chart release was accepted by the installer
    Chart(ChartRelease),
    /// A manifest was handed to the applier
    Manifest { id: String, documents: usize },
}

/// A unit of configuration applied to a provisioned cluster
pub trait ClusterAddOn: Send + Sync {
    fn name(&self) -> &str;

    fn deploy<'a>(&'a self, cluster: &'a ClusterInfo) -> BoxFuture<'a, Result<Deployment>>;
}
