use std::io::Write;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;
use thiserror::Error;

use crate::api::jira_cluster::JiraCluster;
use crate::api::jira_machine::JiraMachine;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("YAML serialization error: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// All CRDs served by the provider, in apply order.
pub fn crds() -> Vec<CustomResourceDefinition> {
    vec![JiraCluster::crd(), JiraMachine::crd()]
}

/// Render the provider CRDs as a multi-document YAML manifest.
pub fn render() -> Result<String, RenderError> {
    let mut rendered = String::new();
    for crd in crds() {
        rendered.push_str("---\n");
        rendered.push_str(&serde_yaml::to_string(&crd)?);
    }

    Ok(rendered)
}

/// Render and write the manifest, for `crdgen | kubectl apply -f -`.
pub fn export(out: &mut impl Write) -> crate::Result<()> {
    let rendered = render()?;
    out.write_all(rendered.as_bytes())?;

    Ok(())
}
