use clap::Parser;

use analyzer::cli::Cli;
use analyzer::query::route;
use analyzer::runtime::boot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();

    let cli = Cli::parse();
    let config = boot::boot()?;

    let input = cli
        .input
        .unwrap_or_else(|| config.log_path.clone().into());
    let color = config.color && !cli.no_color;

    route::run_selected_query(&input, cli.query, color)?;
    Ok(())
}
