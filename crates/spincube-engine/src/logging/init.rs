use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are no-ops.
///
/// `default_filter` uses the `env_logger` filter syntax (e.g. "info",
/// "spincube_engine=debug,wgpu=warn") and is overridden by `RUST_LOG` when
/// that variable is set.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.parse_filters(default_filter);
            }
        }

        builder.init();

        log::debug!("logger ready");
    });
}
