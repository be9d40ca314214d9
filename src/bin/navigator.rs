use clap::Parser;
use gridnav::search::{
    strategies::StrategyName, Grid, SearchContext, TraceObserver, Verbosity,
};
use itertools::Itertools;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Search a grid map for a route from the start cell to a goal cell.
struct Cli {
    #[arg(help = "The map file to search")]
    map: PathBuf,
    #[arg(
        value_enum,
        help = "The search strategy to use",
        short = 's',
        long = "strategy",
        id = "STRATEGY",
        default_value_t = StrategyName::AStar
    )]
    strategy_name: StrategyName,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let grid = match Grid::from_path(&cli.map) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to load map {}: {e}", cli.map.display());
            std::process::exit(1);
        }
    };

    let ctx = SearchContext::from_grid(&grid);
    let mut observer = TraceObserver::new();
    let outcome = cli
        .strategy_name
        .create()
        .search(&ctx, Some(&mut observer));

    match (outcome.route, outcome.reached_goal) {
        (Some(route), Some(goal)) => {
            info!(route_length = route.len());
            println!("<Node {goal}> {}", outcome.nodes_created);
            if route.is_empty() {
                println!("Already at the goal");
            } else {
                println!("{route}");
                let cells = route.replay(ctx.start());
                println!("{}", cells.iter().join(" -> "));
            }
        }
        (Some(route), None) => {
            // A multi-goal tour over a map with no goals: an empty route.
            info!(route_length = route.len());
            println!("<Node {}> {}", ctx.start(), outcome.nodes_created);
            println!("{route}");
        }
        _ => {
            info!("no goal is reachable");
            println!("No goal is reachable; {}", outcome.nodes_created);
        }
    }
}
