use anyhow::{Context, Result};
use oke_core::{ConfigMap, StackConfig};
use oke_topology::build_stack;
use tracing::info;
use tracing_subscriber::fmt::init as tracing_init;

fn main() -> Result<()> {
    tracing_init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "stack.yaml".to_string());
    info!("Loading stack configuration from {}", path);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration file {path}"))?;

    let map = ConfigMap::from_yaml(&text)?;
    let config = StackConfig::from_map(&map)?;
    info!(region = %config.region, "Configuration resolved");

    let stack = build_stack(&config)?;
    info!(
        resources = stack.descriptors().len(),
        outputs = stack.outputs().len(),
        "Stack plan built"
    );

    // The reconciliation engine consumes the plan from stdout.
    println!("{}", serde_json::to_string_pretty(&stack.plan())?);
    Ok(())
}
