//! Landlord Poker Binary
//!
//! Solves a hand for fewest plays or best score, plays a duel, or deals.

use clap::Args;
use clap::Parser;
use colored::Colorize;
use landlord::cards::*;
use landlord::duel::*;
use landlord::moves::Mode;
use landlord::search::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Cards dealt when neither `--cards` nor `--deal` is given.
const DEAL: usize = 17;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Find the fewest plays that empty a hand", alias = "min")]
    Steps {
        #[command(flatten)]
        source: Source,
        #[arg(long, help = "Stop after this many expansions")]
        limit: Option<usize>,
        #[arg(long, default_value_t = Mode::All)]
        mode: Mode,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Find the best scoring way to empty a hand", alias = "max")]
    Score {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = Mode::All)]
        mode: Mode,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Play two greedy hands against each other", alias = "vs")]
    Duel {
        #[arg(long, help = "Cards of the leading side")]
        a: Option<String>,
        #[arg(long, help = "Cards of the other side")]
        b: Option<String>,
        #[arg(long, default_value_t = DEAL)]
        deal: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Deal a random hand and print its indices")]
    Deal {
        #[arg(default_value_t = DEAL)]
        n: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Where a hand comes from: given cards, or a random deal.
#[derive(Args)]
struct Source {
    #[arg(long, help = "Cards such as \"3h 4h 5h 6h 7h Xs\"")]
    cards: Option<String>,
    #[arg(long, help = "Deal this many random cards")]
    deal: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
}

impl Source {
    fn hand(&self) -> anyhow::Result<Hand> {
        match &self.cards {
            Some(cards) => Ok(Hand::try_from(cards.as_str())?),
            None => Ok(Deck::new().deal(self.deal.unwrap_or(DEAL), &mut rng(self.seed))?),
        }
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// `--limit`, else the environment, else the default cap.
fn limit(flag: Option<usize>) -> anyhow::Result<usize> {
    match flag {
        Some(n) => Ok(n),
        None => match std::env::var(landlord::LIMIT_VAR) {
            Ok(value) => Ok(value.trim().parse()?),
            Err(_) => Ok(landlord::EXPANSION_LIMIT),
        },
    }
}

fn main() -> anyhow::Result<()> {
    landlord::log();
    match Command::parse() {
        Command::Steps {
            source,
            limit: cap,
            mode,
            json,
        } => {
            let ref hand = source.hand()?;
            log::info!("solving for fewest plays: {}", hand);
            let solution = MinSteps::with_limit(limit(cap)?).mode(mode).solve(hand);
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                println!("{} {}", "hand".bold(), hand);
                println!("{} {}", "steps".green().bold(), solution.steps);
                print_path(&solution.path);
            }
        }
        Command::Score { source, mode, json } => {
            let ref hand = source.hand()?;
            log::info!("solving for best score: {}", hand);
            let scored = MaxScore::default().mode(mode).solve(hand);
            if json {
                println!("{}", serde_json::to_string_pretty(&scored)?);
            } else {
                println!("{} {}", "hand".bold(), hand);
                println!("{} {:.4}", "score".green().bold(), scored.score);
                println!("{} {}", "steps".green().bold(), scored.steps);
                print_path(&scored.path);
            }
        }
        Command::Duel {
            a,
            b,
            deal,
            seed,
            json,
        } => {
            let (a, b) = match (a, b) {
                (Some(a), Some(b)) => (Hand::try_from(a.as_str())?, Hand::try_from(b.as_str())?),
                _ => Deck::new().split(deal, deal, &mut rng(seed))?,
            };
            println!("{} {}", "A".cyan().bold(), a);
            println!("{} {}", "B".magenta().bold(), b);
            let outcome = Duel::new(a, b).play();
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for turn in outcome.transcript.iter() {
                    match &turn.play {
                        Some(play) => println!("{} {}", turn.seat, play),
                        None => println!("{} {}", turn.seat, "pass".dimmed()),
                    }
                }
                println!("{} {}", "winner".green().bold(), outcome.winner);
            }
        }
        Command::Deal { n, seed } => {
            let hand = Deck::new().deal(n, &mut rng(seed))?;
            println!("{}", hand);
            println!(
                "{}",
                hand.orders()
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
    }
    Ok(())
}

fn print_path(path: &[landlord::moves::Combo]) {
    for (i, combo) in path.iter().enumerate() {
        println!("{:>3}. {}", i + 1, combo);
    }
}
