//! Word Ladder - CLI
//!
//! Thin terminal front end over the engine: interactive play, shortest-ladder
//! lookup and random pair generation.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use word_ladder::{
    core::Word,
    dictionary::Dictionary,
    game::{AttemptOutcome, Engine, GameConfig},
    output::{format_feedback, format_path},
    solver::shortest_path,
};

#[derive(Parser)]
#[command(
    name = "word-ladder",
    about = "Word-ladder puzzle: reach the target word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (newline-separated; defaults to the bundled list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play {
        /// Draw a random start/target pair instead of prompting
        #[arg(short, long)]
        random: bool,

        /// Show the transformation path after every attempt
        #[arg(short = 'p', long)]
        show_path: bool,

        /// Suppress rejection messages
        #[arg(long)]
        hide_errors: bool,
    },

    /// Print the shortest ladder between two words
    Solve {
        /// Start word
        start: String,

        /// Target word
        target: String,
    },

    /// Print a uniformly random distinct word pair
    Pair,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = match &cli.dictionary {
        Some(path) => Dictionary::load_from_file(path)
            .with_context(|| format!("Loading word list from {}", path.display()))?,
        None => Dictionary::bundled(),
    };

    let command = cli.command.unwrap_or(Commands::Play {
        random: false,
        show_path: false,
        hide_errors: false,
    });

    match command {
        Commands::Play {
            random,
            show_path,
            hide_errors,
        } => {
            let config = GameConfig::new(!hide_errors, show_path, random);
            run_play(Engine::with_config(dictionary, config))
        }
        Commands::Solve { start, target } => run_solve(&dictionary, &start, &target),
        Commands::Pair => run_pair(&dictionary),
    }
}

fn run_solve(dictionary: &Dictionary, start: &str, target: &str) -> Result<()> {
    let start = Word::new(start).map_err(|e| anyhow!("Invalid start word: {e}"))?;
    let target = Word::new(target).map_err(|e| anyhow!("Invalid target word: {e}"))?;

    for word in [&start, &target] {
        if !dictionary.contains(word) {
            return Err(anyhow!("Not a dictionary word: {word}"));
        }
    }

    let path = shortest_path(&start, &target, dictionary);
    if path.is_empty() {
        println!("No ladder connects {start} to {target} in this dictionary");
    } else {
        println!("{} ({} steps)", format_path(&path), path.len() - 1);
    }
    Ok(())
}

fn run_pair(dictionary: &Dictionary) -> Result<()> {
    let (start, target) = dictionary
        .random_distinct_pair(&mut rand::rng())
        .map_err(|e| anyhow!(e.to_string()))?;
    println!("{start} {target}");
    Ok(())
}

fn run_play(mut engine: Engine) -> Result<()> {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" Word Ladder ");
    println!("{}", "═".repeat(60).cyan());
    println!("\nChange one letter at a time; every step must be a real word.");
    println!("Commands: 'hint', 'path', 'solution', 'reset', 'new', 'quit'\n");

    start_game(&mut engine)?;

    loop {
        let current = engine
            .current_word()
            .ok_or_else(|| anyhow!("No active game"))?;
        let target = engine
            .target_word()
            .ok_or_else(|| anyhow!("No active game"))?;
        let prompt = format!(
            "[{}/{}] {} -> {}",
            engine.attempt_count(),
            engine
                .solution_path()
                .len()
                .saturating_sub(1),
            current.text().to_uppercase(),
            target.text().to_uppercase()
        );

        let input = get_user_input(&prompt)?.to_lowercase();
        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "reset" => {
                engine.reset().map_err(|e| anyhow!(e.to_string()))?;
                println!("Back to {}\n", engine.current_word().map_or("?", Word::text));
            }
            "new" | "n" => start_game(&mut engine)?,
            "path" => match engine.path() {
                Some(path) => println!("{}\n", format_path(path)),
                None => println!("Path display is disabled (pass --show-path)\n"),
            },
            "hint" => print_hint(&engine),
            "solution" => {
                let solution = engine.solution_path();
                if solution.is_empty() {
                    println!("No ladder exists for this pair; free-form play only\n");
                } else {
                    println!("{}\n", format_path(solution));
                }
            }
            word => submit(&mut engine, word)?,
        }

        if engine.is_won() {
            let attempts = engine.attempt_count();
            let optimal = engine.solution_path().len().saturating_sub(1);
            println!("\n{}", "You won!".green().bold());
            println!("Solved in {attempts} attempts (optimal: {optimal})\n");

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => start_game(&mut engine)?,
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Start a session, either from a random pair or prompted words
fn start_game(engine: &mut Engine) -> Result<()> {
    if engine.config().use_random_words() {
        engine
            .initialize_random(&mut rand::rng())
            .map_err(|e| anyhow!(e.to_string()))?;
    } else {
        loop {
            let start = get_user_input("Start word")?;
            let target = get_user_input("Target word")?;
            match engine.initialize(&start, &target) {
                Ok(()) => break,
                Err(e) => println!("{}\n", e.to_string().red()),
            }
        }
    }

    let start = engine.start_word().map_or(String::new(), |w| {
        w.text().to_uppercase()
    });
    let target = engine.target_word().map_or(String::new(), |w| {
        w.text().to_uppercase()
    });
    println!("\nTransform {} into {}", start.bold(), target.bold());

    if engine.solution_path().is_empty() {
        println!("{}", "(no ladder exists for this pair; good luck)".dimmed());
    }
    println!();
    Ok(())
}

/// Submit one attempt and render the outcome
fn submit(engine: &mut Engine, word: &str) -> Result<()> {
    match engine.submit_attempt(word) {
        Ok(outcome) => {
            let feedback = engine
                .feedback(word)
                .map_err(|e| anyhow!(e.to_string()))?;
            let current = engine
                .current_word()
                .ok_or_else(|| anyhow!("No active game"))?;
            println!("  {}\n", format_feedback(current, &feedback));

            if outcome == AttemptOutcome::Advanced
                && let Some(path) = engine.path()
            {
                println!("  {}\n", format_path(path).dimmed());
            }
        }
        Err(e) => {
            if engine.config().show_errors() {
                println!("  {}\n", e.to_string().red());
            }
        }
    }
    Ok(())
}

/// Show the next word on the optimal ladder from the current position
fn print_hint(engine: &Engine) {
    let solution = engine.solution_path();
    let Some(current) = engine.current_word() else {
        return;
    };

    // Only useful while the player is still on the precomputed ladder
    let next = solution
        .iter()
        .position(|w| w == current)
        .and_then(|i| solution.get(i + 1));

    match next {
        Some(word) => println!("  Try {}\n", word.text().to_uppercase().yellow()),
        None => println!("  No hint available from here\n"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("reading stdin")?;

    Ok(input.trim().to_string())
}
