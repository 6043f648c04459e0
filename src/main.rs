//! epigraph - CLI entry point.

use tracing_subscriber::EnvFilter;

use epigraph::cli::parse_invocation;
use epigraph::pipeline;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // --help/-h prints usage and exits 0 inside the parser
    let config = parse_invocation();

    match pipeline::run(config).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
