// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field manager used for server-side apply
pub const FIELD_MANAGER: &str = "blueprint-addons";

/// Kubernetes annotation keys written by the add-ons
pub mod annotations {
    /// Marks an IngressClass as the cluster default when set to "true"
    pub const IS_DEFAULT_CLASS: &str = "ingressclass.kubernetes.io/is-default-class";
}

/// Kubevious chart defaults
pub mod kubevious {
    pub const ADDON_NAME: &str = "ssp-kubevious-addon";
    pub const NAMESPACE: &str = "kubevious";
    pub const CHART: &str = "kubevious";
    pub const VERSION: &str = "0.8.15";
    pub const RELEASE: &str = "kubevious";
    pub const REPOSITORY: &str = "https://helm.kubevious.io";
    pub const SERVICE_TYPE: &str = "ClusterIP";
    /// Not suitable for production clusters
    pub const MYSQL_ROOT_PASSWORD: &str = "kubevious";
}

/// IngressClass manifest defaults
pub mod ingress_class {
    pub const MANIFEST_ID: &str = "sspIngressClassManifest";
    pub const NAME: &str = "alb";
    pub const CONTROLLER: &str = "ingress.k8s.aws/alb";
}
