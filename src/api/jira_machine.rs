use kube::{api::ObjectMeta, core::ObjectList, CustomResource, ResourceExt as _};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// JiraMachineSpec defines the desired state of JiraMachine
#[derive(CustomResource, Deserialize, Serialize, Clone, Default, Debug, JsonSchema, PartialEq)]
#[kube(
    kind = "JiraMachine",
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1alpha1",
    namespaced,
    status = "JiraMachineStatus"
)]
pub struct JiraMachineSpec {
    /// Foo is an example field of JiraMachine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foo: Option<String>,
}

/// JiraMachineStatus defines the observed state of JiraMachine
#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema, PartialEq)]
pub struct JiraMachineStatus {}

/// JiraMachineList contains a list of JiraMachine
pub type JiraMachineList = ObjectList<JiraMachine>;

impl From<&JiraMachine> for ObjectMeta {
    fn from(machine: &JiraMachine) -> Self {
        Self {
            name: Some(machine.name_any()),
            namespace: machine.namespace(),
            ..Default::default()
        }
    }
}
