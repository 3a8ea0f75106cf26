use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use gambit_core::{DecisionStore, StoreConfig};

/// True win probability of each strategy in the simulated matches. The
/// engine does not see these; it has to discover them from outcomes.
const STRATEGIES: [(&str, f64); 3] = [("rush", 0.62), ("turtle", 0.45), ("boom", 0.30)];

const EPISODES: usize = 300;

fn main() -> Result<(), gambit_core::GambitError> {
    // (A) Open a store in a scratch location with a fixed seed so the run
    //     is reproducible.
    let path = std::env::temp_dir().join("gambit-demo-history.json");
    let _ = std::fs::remove_file(&path);

    let mut config = StoreConfig::new(&path);
    config.autosave = false;
    config.seed = Some(42);
    let mut store = DecisionStore::open(config)?;

    let options: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
    let mut match_rng = StdRng::seed_from_u64(99);

    // (B) Play simulated episodes: decide, resolve the match against the
    //     hidden win rates, report the result.
    let mut wins = 0usize;
    for episode in 1..=EPISODES {
        let choice = store.decide(&options, "opening")?;

        let true_rate = STRATEGIES
            .iter()
            .find(|(name, _)| *name == choice.option)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0);
        let won = match_rng.gen_range(0.0..1.0) < true_rate;
        if won {
            wins += 1;
        }

        store.report_result(won, None)?;
        store.begin_episode();

        if episode % 100 == 0 {
            println!(
                "after {episode} episodes: {wins} wins ({:.1}%)",
                100.0 * wins as f64 / episode as f64
            );
        }
    }

    // (C) Show what the engine learned. Probability mass should have
    //     migrated toward the strategy with the best hidden win rate.
    let summary = store.summary();
    println!("{}", serde_json::to_string_pretty(&summary).unwrap());

    store.save()?;
    println!("history saved to {}", store.path().display());
    Ok(())
}
