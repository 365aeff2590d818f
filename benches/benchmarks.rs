criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_catalogue_all,
        building_catalogue_longest,
        dealing_seeded_hands,
        solving_min_steps_small,
        solving_min_steps_dealt,
        solving_max_score_small,
        playing_seeded_duel,
}

const SMALL: &str = "3h 4h 5h 6h 6s 7h 8h 8c 8s 9d 9c Kh";
const AIRPLANE: &str = "3h 3s 3c 4h 4s 4c 5h 5s 5c 7h 8h Qd";

fn building_catalogue_all(c: &mut criterion::Criterion) {
    let ref hand = Deck::new().deal(17, &mut SmallRng::seed_from_u64(0)).unwrap();
    c.bench_function("catalogue a 17-card Hand (all straights)", |b| {
        b.iter(|| Catalogue::new(hand, Mode::All))
    });
}

fn building_catalogue_longest(c: &mut criterion::Criterion) {
    let ref hand = Deck::new().deal(17, &mut SmallRng::seed_from_u64(0)).unwrap();
    c.bench_function("catalogue a 17-card Hand (longest straights)", |b| {
        b.iter(|| Catalogue::new(hand, Mode::Longest))
    });
}

fn dealing_seeded_hands(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("split a Deck into two 17-card Hands", |b| {
        b.iter(|| Deck::new().split(17, 17, rng).unwrap())
    });
}

fn solving_min_steps_small(c: &mut criterion::Criterion) {
    let ref hand = Hand::try_from(SMALL).unwrap();
    c.bench_function("solve fewest plays for a 12-card Hand", |b| {
        b.iter(|| MinSteps::default().solve(hand))
    });
}

fn solving_min_steps_dealt(c: &mut criterion::Criterion) {
    let ref hand = Deck::new().deal(17, &mut SmallRng::seed_from_u64(1)).unwrap();
    c.bench_function("solve fewest plays for a dealt 17-card Hand (capped)", |b| {
        b.iter(|| MinSteps::with_limit(1_000).solve(hand))
    });
}

fn solving_max_score_small(c: &mut criterion::Criterion) {
    let ref hand = Hand::try_from(AIRPLANE).unwrap();
    c.bench_function("solve best score for a 12-card Hand", |b| {
        b.iter(|| MaxScore::default().solve(hand))
    });
}

fn playing_seeded_duel(c: &mut criterion::Criterion) {
    let (a, b) = Deck::new()
        .split(17, 17, &mut SmallRng::seed_from_u64(2))
        .unwrap();
    c.bench_function("play a duel between two 17-card Hands", |bench| {
        bench.iter(|| Duel::new(a.clone(), b.clone()).play())
    });
}

use landlord::cards::Deck;
use landlord::cards::Hand;
use landlord::duel::Duel;
use landlord::moves::Catalogue;
use landlord::moves::Mode;
use landlord::search::MaxScore;
use landlord::search::MinSteps;
use rand::SeedableRng;
use rand::rngs::SmallRng;
