mod game;
mod view;

use blackjack::Dealer;
use clap::Parser;
use game::Session;
use std::io;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play blackjack against the house")]
struct Cli {
    /// Number of standard decks shuffled together for every round
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = 1)]
    decks: u32,

    /// Seed for reproducible shuffles
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Stop after this many rounds instead of asking to play again
    #[arg(long)]
    rounds: Option<u32>,
}

fn main() -> Result<(), BoxErr> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dealer = match cli.seed {
        Some(seed) => {
            log::info!("Shuffling {} deck(s) with seed {seed}", cli.decks);
            Dealer::seeded(cli.decks, seed)?
        }
        None => Dealer::new(cli.decks)?,
    };

    let mut session = Session::new(dealer, io::stdin().lock(), io::stdout().lock(), cli.rounds);
    session.run()?;
    log::info!("Played {} round(s)", session.rounds_played());
    Ok(())
}
