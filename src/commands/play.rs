//! Interactive terminal play
//!
//! A round in the terminal: the root word is shown, the player types words,
//! and each submission is validated and scored on the spot.

use crate::dictionary::Dictionary;
use crate::engine::WordGame;
use crate::output::{print_outcome, print_round_banner, print_round_summary};
use std::io::{self, Write};

/// Run an interactive round of the word game
///
/// # Errors
///
/// Returns an error if reading user input fails or if a restart cannot pick
/// a root word.
pub fn run_play<D: Dictionary>(
    game: &mut WordGame<D>,
    candidates: &[String],
    seed: Option<u64>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Word Scramble                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    println!("\nMake as many words as you can from the letters of the root word.");
    println!("Each letter may be used as often as it appears in the root.\n");
    println!("Commands: 'quit' to exit, 'new' for a new round, 'words' for your list\n");

    print_round_banner(game.root_word());

    // Bump a deterministic seed on restart so 'new' actually re-rolls
    let mut round = 0_u64;

    loop {
        let input = get_user_input("Enter a word")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_round_summary(game.snapshot());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round += 1;
                game.restart(candidates, seed.map(|s| s.wrapping_add(round)))
                    .map_err(|e| e.to_string())?;
                println!("\n🔄 New round started!");
                print_round_banner(game.root_word());
            }
            "words" | "list" | "score" => {
                print_round_summary(game.snapshot());
                println!();
            }
            _ => {
                let outcome = game.submit(&input);
                print_outcome(&outcome);
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
