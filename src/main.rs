#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

use std::io::{self, BufRead};

use anyhow::Context;
use clap::{Command, arg};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex_lite::Regex;

use sc_chess::display::render_as_unicode;
use sc_chess::{ChessGame, Coord, GameConfig, GameEvent};


enum Input {
    Move { from: i32, to: i32 },
    ShowMoves(i32),
    History,
    Quit,
}

// Cells are given either algebraically ("e2") or as positions ("52").
fn parse_cell(s: &str) -> Option<i32> {
    match s.parse::<i32>() {
        Ok(position) => Some(position),
        Err(_) => Coord::from_algebraic(s).map(|coord| coord.to_index().into()),
    }
}

fn parse_input(line: &str) -> Option<Input> {
    lazy_static! {
        static ref MOVE_RE: Regex =
            Regex::new(r"^([a-h][1-8]|-?[0-9]+)[\s-]*([a-h][1-8]|-?[0-9]+)$").unwrap();
        static ref SHOW_MOVES_RE: Regex = Regex::new(r"^moves\s+(\S+)$").unwrap();
    }
    let line = line.trim();
    match line {
        "history" => return Some(Input::History),
        "quit" | "exit" => return Some(Input::Quit),
        _ => {}
    }
    if let Some(cap) = SHOW_MOVES_RE.captures(line) {
        return parse_cell(&cap[1]).map(Input::ShowMoves);
    }
    let cap = MOVE_RE.captures(line)?;
    Some(Input::Move {
        from: parse_cell(&cap[1])?,
        to: parse_cell(&cap[2])?,
    })
}

fn print_position(game: &ChessGame, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&game.pieces())?);
    } else {
        println!("{}\n", render_as_unicode(game.board().grid()));
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("sc_chess")
        .version(clap::crate_version!())
        .about("Two players, one console: moves are read from stdin")
        .arg(arg!(--config <file> "Game setup: yaml-serialized GameConfig").required(false))
        .arg(arg!(--json "Print board as a JSON list of pieces"))
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(filename) => {
            let contents = std::fs::read_to_string(filename)
                .with_context(|| format!("Failed to read config file '{filename}'"))?;
            GameConfig::from_yaml(&contents)
                .with_context(|| format!("Failed to parse config file '{filename}'"))?
        }
        None => GameConfig::default(),
    };
    let json = matches.get_flag("json");

    let mut game = ChessGame::from_config(&config)
        .map_err(|err| anyhow::anyhow!("Invalid game setup: {:?}", err))?;
    game.subscribe(|event, view| match event {
        GameEvent::SideChanged => log::debug!("{} to move", view.active_force.name()),
        GameEvent::GameOver { message } => println!("*** {message} ***"),
    });

    print_position(&game, json)?;
    println!("{} to move", game.active_force().name());
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_input(&line) {
            None => println!(
                "Cannot parse '{}'. Try 'e2e4', '52 36', 'moves e2' or 'quit'.",
                line.trim()
            ),
            Some(Input::Quit) => break,
            Some(Input::History) => {
                for (idx, record) in game.history().iter().enumerate() {
                    let kind = record.piece.kind;
                    println!("{:>3}. {:?} {} -> {}", idx + 1, kind, record.from, record.to);
                }
            }
            Some(Input::ShowMoves(position)) => {
                println!("[{}]", game.reachable_from(position).iter().join(", "));
            }
            Some(Input::Move { from, to }) => match game.try_move_detailed(from, to) {
                Ok(_) => {
                    print_position(&game, json)?;
                    println!("{} to move", game.active_force().name());
                }
                Err(err) => println!("Impossible move: {}", err.description()),
            },
        }
    }
    Ok(())
}
