use kube::{api::ObjectMeta, core::ObjectList, CustomResource, ResourceExt as _};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// JiraClusterSpec defines the desired state of JiraCluster
#[derive(CustomResource, Deserialize, Serialize, Clone, Default, Debug, JsonSchema, PartialEq)]
#[kube(
    kind = "JiraCluster",
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha1",
    namespaced,
    status = "JiraClusterStatus"
)]
pub struct JiraClusterSpec {
    /// Foo is an example field of JiraCluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foo: Option<String>,
}

/// JiraClusterStatus defines the observed state of JiraCluster
#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema, PartialEq)]
pub struct JiraClusterStatus {}

/// JiraClusterList contains a list of JiraCluster
pub type JiraClusterList = ObjectList<JiraCluster>;

impl From<&JiraCluster> for ObjectMeta {
    fn from(cluster: &JiraCluster) -> Self {
        Self {
            name: Some(cluster.name_any()),
            namespace: cluster.namespace(),
            ..Default::default()
        }
    }
}
