use tracing::Level;

// Logs go to stderr so rendered tables on stdout stay clean.
pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();
    if json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}
