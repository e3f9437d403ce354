//! Play Othello against the AI in a terminal.

use anyhow::{bail, Context, Result};
use clap::Parser;
use dusk_othello::{Location, Player};
use dusk_player::{SearchConfig, Session, DEFAULT_DEPTH};
use indicatif::ProgressBar;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(about = "Play Othello against a depth-limited alpha-beta AI")]
struct Args {
    /// Plies the AI searches ahead
    #[clap(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Color played from the keyboard (black or white)
    #[clap(long, default_value = "black")]
    human: Player,

    /// Let the AI play both sides
    #[clap(long)]
    watch: bool,
}

enum Command {
    Play(Location),
    New,
    Quit,
}

fn read_command(input: &mut impl BufRead) -> Result<Option<Command>> {
    print!("> ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Some(Command::Quit));
    }

    let command = match line.trim().to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::New,
        other => match other.to_ascii_uppercase().parse() {
            Ok(loc) => Command::Play(loc),
            Err(err) => {
                println!("{}: try a cell like D3, `new` or `quit`", err);
                return Ok(None);
            }
        },
    };
    Ok(Some(command))
}

fn ai_turn(session: &mut Session) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(&format!("{} is thinking", session.active_player()));
    spinner.enable_steady_tick(100);

    let result = loop {
        if let Some(result) = session.request_ai_move() {
            break result;
        }
        if !session.is_searching() {
            spinner.finish_and_clear();
            bail!("the AI could not find a move");
        }
        thread::sleep(Duration::from_millis(10));
    };

    spinner.finish_and_clear();
    println!(
        "AI plays {} (expects {:+})",
        result.location, result.value
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut session = Session::new(SearchConfig::default().with_depth(args.depth));
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("\n{}", session.game());

        if session.is_over() {
            println!("Type `new` to play again or `quit` to leave.");
            match read_command(&mut input)? {
                Some(Command::New) => session.reset(),
                Some(Command::Quit) => break,
                _ => {}
            }
            continue;
        }

        if args.watch || session.active_player() != args.human {
            ai_turn(&mut session).context("AI turn failed")?;
            continue;
        }

        match read_command(&mut input)? {
            Some(Command::Play(loc)) => {
                if let Err(err) = session.apply_move(loc.to_cell()) {
                    println!("{} is not playable: {}", loc, err);
                }
            }
            Some(Command::New) => session.reset(),
            Some(Command::Quit) => break,
            None => {}
        }
    }

    Ok(())
}
