use std::time::Duration;

use battle_client::{
    init_logging, Endpoints, Game, GameId, HttpTransport, Transport, BOARD_SIZE,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, global = true, help = "Registration endpoint (default: $BATTLE_REGISTER_URL or the public server)")]
    register_url: Option<String>,
    #[arg(long, global = true, help = "Nuke endpoint (default: $BATTLE_NUKE_URL or the public server)")]
    nuke_url: Option<String>,
    #[arg(long, global = true, default_value_t = 30)]
    timeout_secs: u64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new player and start a game.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Fire one shot in a game already registered with the server.
    Nuke {
        #[arg(long)]
        id: String,
        #[arg(long)]
        x: u32,
        #[arg(long)]
        y: u32,
    },
    /// Register and keep firing at random cells until the game ends.
    Play {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, help = "Fix RNG seed for reproducible targeting (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Stop after this many shots")]
        max_shots: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut endpoints = Endpoints::from_env();
    if let Some(url) = cli.register_url {
        endpoints.register_url = url;
    }
    if let Some(url) = cli.nuke_url {
        endpoints.nuke_url = url;
    }
    let transport = HttpTransport::with_timeout(Duration::from_secs(cli.timeout_secs))?;

    match cli.command {
        Commands::Register { name, email } => {
            let mut game = Game::new(name, email, transport).with_endpoints(endpoints);
            game.register()?;
            print_summary(&game)?;
        }
        Commands::Nuke { id, x, y } => {
            let mut game = Game::resume(GameId::from(id), transport).with_endpoints(endpoints);
            game.nuke(x, y)?;
            print_summary(&game)?;
        }
        Commands::Play {
            name,
            email,
            seed,
            max_shots,
        } => {
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut game = Game::new(name, email, transport).with_endpoints(endpoints);
            game.register()?;
            log::info!("started at {:?}", game.coords());

            let size = BOARD_SIZE as u32;
            let mut targets: Vec<(u32, u32)> = (0..size)
                .flat_map(|x| (0..size).map(move |y| (x, y)))
                .collect();
            targets.shuffle(&mut rng);
            let budget = max_shots.unwrap_or(targets.len());

            let mut shots = 0;
            for (x, y) in targets.into_iter().take(budget) {
                if game.is_finished() {
                    break;
                }
                game.nuke(x, y)?;
                shots += 1;
                log::info!(
                    "shot ({}, {}): {}{}",
                    x,
                    y,
                    game.nuke_status().unwrap_or("?"),
                    game.sunk().map(|s| format!(", sunk {}", s)).unwrap_or_default()
                );
            }
            log::info!("{} shots fired", shots);
            print_summary(&game)?;
        }
    }
    Ok(())
}

fn print_summary<T: Transport>(game: &Game<T>) -> anyhow::Result<()> {
    let summary = json!({
        "id": game.id(),
        "status": game.status(),
        "coords": game.coords(),
        "ships": game.ships().iter().map(|s| s.name()).collect::<Vec<_>>(),
        "nuke_status": game.nuke_status(),
        "sunk": game.sunk(),
        "prize": game.prize(),
        "response": game.response(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
