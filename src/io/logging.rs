//! Diagnostic output setup for the command-line host

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Pick the most verbose level that will be emitted
pub const fn max_level(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}

/// Install a compact stderr subscriber as the global default
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one keeps receiving events.
pub fn init(verbose: bool) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
