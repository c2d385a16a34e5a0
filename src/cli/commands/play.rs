//! Play command - Play tic-tac-toe against the learning agent at the terminal

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::{ConsoleHuman, ConsoleObserver},
    app::{App, SessionStats},
    cli::{
        config::StorageArgs,
        output::{format_percent, print_kv, print_section},
    },
};

#[derive(Parser, Debug)]
#[command(about = "Play against the agent until you decline another game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub storage: StorageArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.storage.resolve()?;
    let app = App::from_config(&config).context("Failed to set up storage")?;
    let mut session = app.create_session(None);

    print_introduction();

    let mut human = ConsoleHuman::stdio();
    let mut observer = ConsoleObserver::stdout(config.seed);
    session
        .play_until_done(&mut human, &mut observer)
        .context("Game session failed")?;

    print_tally(session.stats(), session.store().keys().len());
    Ok(())
}

fn print_introduction() {
    println!();
    println!("Welcome to TicTacToe.  You'll be playing the computer (me!) today, so... good luck!");
    println!();
    println!(
        "When entering your moves, please enter two numbers separated by a space, \
         representing the row and column of your selection."
    );
    println!(
        "We're playing on a standard TicTacToe board, so your row and column numbers \
         must be from 1 to 3."
    );
    println!("For example, to specify the center space, enter:   2 2");
    println!();
    println!("I'll be going first - I'm 'X', and you'll be 'O'.");
}

fn print_tally(stats: &SessionStats, known_keys: usize) {
    print_section("Session Summary");
    print_kv("Games played", &stats.games.to_string());
    print_kv(
        "Agent wins",
        &format!("{} ({})", stats.agent_wins, format_percent(stats.agent_wins, stats.games)),
    );
    print_kv(
        "Human wins",
        &format!("{} ({})", stats.human_wins, format_percent(stats.human_wins, stats.games)),
    );
    print_kv("Ties", &format!("{} ({})", stats.ties, format_percent(stats.ties, stats.games)));
    print_kv("Agent concessions", &stats.concessions.to_string());
    print_kv("Games abandoned", &stats.human_quits.to_string());
    print_kv("Keys learned", &stats.keys_learned.to_string());
    print_kv("Keys known", &known_keys.to_string());
    println!();
    println!("Thanks for playing!");
}
