use std::{env, fs::File, io, path::PathBuf};

use cluster_api_provider_jira::manifests;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or(EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // Write to the given path, or to stdout for piping into kubectl apply
    match env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let mut file = File::create(&path)?;
            manifests::export(&mut file)?;
            info!(
                path = %path.display(),
                count = manifests::crds().len(),
                "wrote CRD manifests"
            );
        }
        None => manifests::export(&mut io::stdout().lock())?,
    }

    Ok(())
}
