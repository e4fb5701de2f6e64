//! Letter Nebula entry point
//!
//! Native: runs a headless demo game with the autoplayer, then records the
//! result. The web build is driven from JS through `platform::web::WebSession`.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use letter_nebula::{Difficulty, Preferences};

    /// Headless Letter Nebula demo: an autoplayer spells words until the clock runs out.
    #[derive(Debug, Parser)]
    #[command(author, version, about, long_about = None)]
    pub struct CliArgs {
        /// Player name for the leaderboard (defaults to the saved preference).
        #[arg(short, long, value_name = "NAME")]
        pub name: Option<String>,
        /// Letter speed and score multiplier: easy, medium or hard.
        #[arg(short, long, value_name = "LEVEL", value_parser = parse_difficulty)]
        pub difficulty: Option<Difficulty>,
        /// Starting clock in seconds.
        #[arg(
            short = 't',
            long,
            value_name = "SECONDS",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        pub duration: Option<u32>,
        /// Directory holding saved scores and preferences.
        #[arg(long, env = "NEBULA_DATA_DIR", default_value = ".letter-nebula")]
        pub data_dir: PathBuf,
        /// JSON word list (array of strings).
        #[arg(long, env = "NEBULA_WORDS", default_value = "words.json")]
        pub words: PathBuf,
    }

    fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
        Difficulty::from_str(s).ok_or_else(|| format!("expected easy, medium or hard, got {:?}", s))
    }

    impl CliArgs {
        /// Overlay command-line choices on the saved preferences
        pub fn apply(&self, prefs: &mut Preferences) {
            if let Some(name) = &self.name {
                prefs.player_name = name.clone();
            }
            if let Some(difficulty) = self.difficulty {
                prefs.difficulty = difficulty;
            }
            if let Some(duration) = self.duration {
                prefs.duration = duration;
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use clap::CommandFactory;
        use clap::error::ErrorKind;

        #[test]
        fn test_command_is_well_formed() {
            CliArgs::command().debug_assert();
        }

        #[test]
        fn test_help_does_not_start_a_game() {
            let err = CliArgs::try_parse_from(["letter-nebula", "--help"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }

        #[test]
        fn test_flags_override_preferences() {
            let args = CliArgs::try_parse_from([
                "letter-nebula",
                "--name",
                "Ada",
                "--difficulty",
                "HARD",
                "-t",
                "90",
            ])
            .unwrap();

            let mut prefs = Preferences::default();
            args.apply(&mut prefs);
            assert_eq!(prefs.player_name, "Ada");
            assert_eq!(prefs.difficulty, Difficulty::Hard);
            assert_eq!(prefs.duration, 90);
        }

        #[test]
        fn test_no_flags_keep_preferences() {
            let args = CliArgs::try_parse_from(["letter-nebula"]).unwrap();
            let mut prefs = Preferences {
                player_name: "Saved".to_string(),
                difficulty: Difficulty::Medium,
                duration: 45,
            };
            let before = prefs.clone();
            args.apply(&mut prefs);
            assert_eq!(prefs, before);
        }

        #[test]
        fn test_rejects_bad_values() {
            assert!(CliArgs::try_parse_from(["letter-nebula", "-d", "nightmare"]).is_err());
            assert!(CliArgs::try_parse_from(["letter-nebula", "-t", "0"]).is_err());
            assert!(CliArgs::try_parse_from(["letter-nebula", "--unknown"]).is_err());
            // Stray words are no longer taken as a player name
            assert!(CliArgs::try_parse_from(["letter-nebula", "Ada"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use letter_nebula::autoplay::Autoplayer;
    use letter_nebula::consts::SIM_HZ;
    use letter_nebula::persistence::FileStorage;
    use letter_nebula::platform::date_string;
    use letter_nebula::{Dictionary, HighScores, Preferences, Session, SessionConfig};

    let args = cli::CliArgs::parse();

    env_logger::init();
    log::info!("Letter Nebula (native) starting...");

    let mut storage = FileStorage::new(&args.data_dir);
    let mut prefs = Preferences::load(&storage);
    args.apply(&mut prefs);

    let dictionary = Dictionary::load_with_fallback(&[&args.words]);
    let config = SessionConfig::from_preferences(&prefs);
    let seed: u64 = rand::random();
    log::info!("Game initialized with seed: {}", seed);

    let mut session = Session::new(config, dictionary, seed);
    let mut autoplayer = Autoplayer::new(2 * SIM_HZ);
    session.start();

    // Time bonuses can extend a demo indefinitely; cap it
    let max_ticks = u64::from(session.config().duration_secs.max(1)) * u64::from(SIM_HZ) * 4;
    let mut ticks = 0u64;
    while !session.is_over() {
        session.tick();
        if let Some((word, outcome)) = autoplayer.update(&mut session) {
            log::info!("Autoplay {} -> {:?}", word, outcome);
        }
        ticks += 1;
        if ticks >= max_ticks {
            log::info!("Demo time cap reached");
            session.finish();
        }
    }

    let mut scores = HighScores::load(&storage);
    if let Some(summary) = session.take_summary() {
        println!(
            "{} scored {} (x{} on {})",
            summary.player_name,
            summary.final_score,
            summary.difficulty.multiplier(),
            summary.difficulty.as_str()
        );
        if let Some(rank) = scores.add(summary.to_entry(date_string())) {
            println!("New high score! Rank #{}", rank);
        }
        scores.save(&mut storage);
    }
    session.config().to_preferences().save(&mut storage);

    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>2}. {:<12} {} {:>5}",
            i + 1,
            entry.name,
            entry.difficulty.badge(),
            entry.score
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}
