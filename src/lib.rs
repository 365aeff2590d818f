//! Hand-clearing solvers for landlord poker.
//!
//! Given a hand, find the fewest plays that empty it ([`solve_min_steps`]),
//! the play sequence with the best value score ([`solve_max_score`]), or
//! pit two greedy hands against each other ([`duel::Duel`]).
//!
//! ## Modules
//!
//! - [`cards`] ranks, suits, cards, hands and the deck
//! - [`moves`] combination categories and the per-hand move catalogue
//! - [`search`] hand states, the search arena and both solvers
//! - [`duel`] turn-based play between two hands
pub mod cards;
pub mod duel;
pub mod moves;
pub mod search;

use cards::Card;
use cards::CardError;
use cards::Hand;
use duel::Side;
use search::MaxScore;
use search::MinSteps;
use search::Scored;
use search::Solution;

// ============================================================================
// DECK
// ============================================================================
/// Cards in a full pack, jokers included.
pub const DECK_SIZE: u8 = 54;

// ============================================================================
// STRAIGHTS
// ============================================================================
/// Fewest ranks in a single straight.
pub const MIN_SINGLE_STRAIGHT: usize = 5;
/// Fewest ranks in a pair straight.
pub const MIN_PAIR_STRAIGHT: usize = 3;
/// Fewest ranks in a triple straight.
pub const MIN_TRIPLE_STRAIGHT: usize = 2;

// ============================================================================
// SCORING
// ============================================================================
/// Log base standing in for a one-play path.
pub const DEGENERATE_BASE: f64 = 1.01;
/// Score of a path worth nothing.
pub const NO_SCORE: f64 = -1.0;
/// Running best before any terminal is reached.
pub const UNSCORED: f64 = -2.0;

// ============================================================================
// SEARCH
// ============================================================================
/// Expansion cap the command line applies unless told otherwise.
pub const EXPANSION_LIMIT: usize = 200_000;
/// Environment variable overriding [`EXPANSION_LIMIT`].
pub const LIMIT_VAR: &str = "LANDLORD_LIMIT";

/// Hand from canonical 1..=54 indices.
pub fn build_initial_hand(orders: &[u8]) -> Result<Hand, CardError> {
    Hand::try_from(orders)
}

pub fn solve_min_steps(hand: &Hand) -> Solution {
    MinSteps::default().solve(hand)
}

pub fn solve_max_score(hand: &Hand) -> Scored {
    MaxScore::default().solve(hand)
}

pub fn new_match_side(hand: Hand) -> Side {
    Side::from(hand)
}

pub fn card_to_index(card: Card) -> u8 {
    card.order()
}

pub fn index_to_card(index: u8) -> Result<Card, CardError> {
    Card::try_from(index)
}

/// Initialize logging: INFO to the terminal, DEBUG to `logs/{timestamp}.log`.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
