//! Environment source: `UKCONF_<SECTION>__<KEY>`, e.g. `UKCONF_PROMPT__INTERACTIVE=false`.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("UKCONF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
