pub mod jira_cluster;
pub mod jira_machine;

/// API group served by the provider CRDs.
pub const GROUP: &str = "infrastructure.cluster.x-k8s.io";

/// Served version of the provider API group.
pub const VERSION: &str = "v1alpha1";
