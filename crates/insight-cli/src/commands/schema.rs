use insight_config::InsightConfig;
use insight_schema::SchemaRegistry;

use crate::cli::{GlobalFlags, SchemaArgs};
use crate::output::output;

/// Handle `insight schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags, config: &InsightConfig) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new()?;
    let pretty = config.general.pretty;

    match &args.name {
        Some(name) => output(registry.schema(name)?, flags.format, pretty),
        None => output(&registry.list(), flags.format, pretty),
    }
}
