use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Maps the `-v` count to a filter directive.
///
/// The default is `warn`, so a normal run writes nothing to stderr besides
/// the final diagnostic.
fn directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. The level comes from the command line only.
pub(crate) fn init(verbosity: u8) {
    let filter = EnvFilter::new(directive(verbosity));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
