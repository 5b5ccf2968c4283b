use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hegemon::{config::demo_roster, SimulationParams, World, WorldSummary};

#[derive(Debug, Parser)]
#[command(author, version, about = "Turn-based nation competition simulator")]
struct Cli {
    /// Seed for the world's random source
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of years to simulate
    #[arg(long, default_value_t = 100)]
    ticks: u64,

    /// Emit the summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut world = World::new(demo_roster(), SimulationParams::default(), cli.seed)?;
    world.run(cli.ticks);

    let summary = world.summarize();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &WorldSummary) {
    println!("\n{}", "=".repeat(70));
    println!("{:^70}", "SIMULATION SUMMARY");
    println!("{}", "=".repeat(70));
    println!(
        "{:<15} {:<15} {:<10} {:<10} {:<10} {:<10}",
        "Nation", "Population", "Status", "Famines", "Food", "Wars"
    );
    println!("{}", "-".repeat(70));
    for nation in &summary.nations {
        println!(
            "{:<15} {:<15} {:<10} {:<10} {:<10} {:<10}",
            nation.name,
            nation.population,
            nation.status.to_string(),
            nation.famine_count,
            nation.food,
            nation.war_count
        );
    }
    println!("{}\n", "=".repeat(70));
}
