//! Interactive front-end for the action codec.
//!
//! Speaks a small line protocol on stdin so the codec can be poked at by
//! hand or scripted from a training harness: moves go in as UCI strings,
//! action indices come back as plain integers, and vice versa.

use std::io::{self, BufRead};

use clap::Parser;
use tracing::debug;

use codec::action::{decode, decode_strict, encode};
use codec::constants::ACTION_SPACE_LEN;
use codec::error::MoveError;
use codec::r#move::Move;
use codec::space::{ActionMask, action_table};

#[derive(Parser)]
#[command(
    name = "actions",
    about = "Convert chess moves to policy action indices and back",
    after_help = "Commands read from stdin:\n  \
        encode <move>      print the action index of a UCI move\n  \
        decode <action>    print the UCI move of an action index\n  \
        mask <move>...     build a mask and print its set indices\n  \
        sample <move>...   uniformly sample one action from a mask\n  \
        space              count the strictly decodable actions\n  \
        quit               exit"
)]
struct Args {
    /// Reject decoded moves whose destination leaves the board.
    #[arg(long)]
    strict: bool,

    /// Log filter, e.g. "debug" or "cli=trace".
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_moves(parts: &[&str]) -> Result<Vec<Move>, MoveError> {
    parts.iter().map(|text| Move::from_uci(text)).collect()
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        debug!(command = %line, "received");
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = parts.first() else {
            continue;
        };
        match *command {
            "encode" => match parts.get(1) {
                Some(text) => match Move::from_uci(text).and_then(encode) {
                    Ok(action) => {
                        debug!(%text, action, "encoded");
                        println!("{}", action);
                    }
                    Err(e) => println!("error: {}", e),
                },
                None => println!("usage: encode <move>"),
            },
            "decode" => match parts.get(1).and_then(|s| s.parse::<u16>().ok()) {
                Some(action) => {
                    let result = if args.strict {
                        decode_strict(action)
                    } else {
                        decode(action)
                    };
                    match result {
                        Ok(mv) => {
                            debug!(action, mv = %mv, "decoded");
                            println!("{}", mv);
                        }
                        Err(e) => println!("error: {}", e),
                    }
                }
                None => println!("usage: decode <action>"),
            },
            "mask" => match parse_moves(&parts[1..]).and_then(|moves| ActionMask::from_moves(&moves)) {
                Ok(mask) => {
                    let actions = mask.actions();
                    debug!(count = actions.len(), "mask built");
                    println!(
                        "{} of {} actions set: {:?}",
                        actions.len(),
                        ACTION_SPACE_LEN,
                        actions
                    );
                }
                Err(e) => println!("error: {}", e),
            },
            "sample" => match parse_moves(&parts[1..]).and_then(|moves| ActionMask::from_moves(&moves)) {
                Ok(mask) => {
                    let mut rng = rand::thread_rng();
                    match mask.sample(&mut rng) {
                        // The sampled id always decodes: it came from encode.
                        Some(action) => match decode(action) {
                            Ok(mv) => println!("{} {}", action, mv),
                            Err(e) => println!("error: {}", e),
                        },
                        None => println!("error: empty mask"),
                    }
                }
                Err(e) => println!("error: {}", e),
            },
            "space" => {
                let reachable = action_table().iter().filter(|entry| entry.is_some()).count();
                println!(
                    "{} of {} actions decode to on-board moves",
                    reachable, ACTION_SPACE_LEN
                );
            }
            "quit" => break,
            _ => {}
        }
    }
}
