//! CLI equity example: deals one hand and reports every street.
//!
//! Usage: `cargo run --example cli_equity [players] [seed]`
//! Set `RUST_LOG=debug` to see the engine's progress.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use eqrs::{Favorite, StreetReport, Table, TableOptions};

fn main() {
    env_logger::init();

    let mut args = env::args().skip(1);
    let players = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(TableOptions::default().players);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = TableOptions::default()
        .with_players(players)
        .with_parallel(cfg!(feature = "parallel"));
    let table = Table::new(options, seed);
    println!("Seed {seed}");

    if let Err(err) = table.deal_hole_cards() {
        println!("Deal error: {err}");
        return;
    }

    for _ in 0..3 {
        if let Err(err) = table.advance() {
            println!("Deal error: {err}");
            return;
        }
        match table.analyze() {
            Ok(report) => print_report(&report),
            Err(err) => {
                println!("Analysis error: {err}");
                return;
            }
        }
        table.clear_stats();
    }
}

fn print_report(report: &StreetReport) {
    println!("{report}");
    match report.favorite() {
        Some(Favorite::Winner(id)) => {
            let name = report
                .players
                .iter()
                .find(|p| p.player_id == id)
                .map_or("?", |p| p.name.as_str());
            println!("Favorite: player {name}\n");
        }
        Some(Favorite::Draw(ids)) => println!("No outright winner, most draws: {ids:?}\n"),
        None => {}
    }
}
