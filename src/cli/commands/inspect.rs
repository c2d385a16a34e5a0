//! Inspect command - Show what the agent has learned to avoid

use std::{collections::BTreeMap, io};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    app::App,
    cli::{
        config::StorageArgs,
        output::{format_number, print_kv, print_section, print_subsection},
    },
    memory::{AvoidanceSet, MoveSelector, Selection, encode},
    tictactoe::Board,
    types::{CellId, MoveKey},
};

#[derive(Parser, Debug)]
#[command(about = "Inspect the stored avoidance set")]
pub struct InspectArgs {
    #[command(flatten)]
    pub storage: StorageArgs,

    /// Show every continuation of this move sequence (e.g. 15) and what the
    /// agent would play next
    #[arg(long)]
    pub prefix: Option<String>,

    /// List every stored key with its (row,column) rendering
    #[arg(long)]
    pub list: bool,

    /// Emit a JSON summary instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectSummary<'a> {
    total: usize,
    by_length: BTreeMap<usize, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<&'a AvoidanceSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<PrefixReport>,
}

/// One empty cell after a prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continuation {
    pub cell: CellId,
    pub key: MoveKey,
    pub avoided: bool,
}

/// Continuations of a prefix and the agent's choice there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixReport {
    pub prefix: MoveKey,
    /// Whether the game is already decided at this prefix
    pub finished: bool,
    pub agent_to_move: bool,
    pub continuations: Vec<Continuation>,
    /// What the agent would do here; `None` if finished or not its turn
    pub selection: Option<Selection>,
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let config = args.storage.resolve()?;
    let app = App::from_config(&config).context("Failed to set up storage")?;
    let store = app.open_store();
    let keys = store.keys();

    let prefix = args
        .prefix
        .as_deref()
        .map(|raw| {
            let prefix = MoveKey::parse(raw.trim())
                .with_context(|| format!("Invalid --prefix '{raw}'"))?;
            prefix_report(keys, &prefix, config.seed)
        })
        .transpose()?;

    if args.json {
        let summary = InspectSummary {
            total: keys.len(),
            by_length: length_histogram(keys),
            keys: args.list.then_some(keys),
            prefix,
        };
        to_writer_pretty(io::stdout().lock(), &summary)
            .context("Failed to write JSON summary")?;
        println!();
        return Ok(());
    }

    print_section("Avoidance Set");
    print_kv("Concise file", &config.concise_path.display().to_string());
    print_kv("Verbose file", &config.verbose_path.display().to_string());
    print_kv("Stored keys", &format_number(keys.len()));

    if !keys.is_empty() {
        print_subsection("Keys by length (plies)");
        for (len, count) in length_histogram(keys) {
            println!("  {len}: {}", format_number(count));
        }
    }

    if args.list {
        print_subsection("Keys");
        for key in keys {
            println!("  {:<10} {}", key.as_str(), key.verbose());
        }
    }

    if let Some(report) = prefix {
        print_prefix_report(&report);
    }

    Ok(())
}

/// Number of stored keys per key length
pub fn length_histogram(keys: &AvoidanceSet) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for key in keys {
        *histogram.entry(key.len()).or_insert(0) += 1;
    }
    histogram
}

/// Evaluate every empty cell after `prefix` against the avoidance set.
pub fn prefix_report(
    keys: &AvoidanceSet,
    prefix: &MoveKey,
    seed: Option<u64>,
) -> Result<PrefixReport> {
    let board = Board::from_key(prefix)
        .with_context(|| format!("'{prefix}' is not a playable move sequence"))?;
    let finished = board.winner().is_some() || board.is_full();
    let agent_to_move = board.to_move().is_agent();

    let continuations = if finished {
        Vec::new()
    } else {
        board
            .empty_cells()
            .into_iter()
            .map(|cell| {
                let key = encode(board.plies(), Some(cell))?;
                let avoided = keys.contains(&key);
                Ok(Continuation { cell, key, avoided })
            })
            .collect::<crate::Result<Vec<_>>>()?
    };

    let selection = if finished || !agent_to_move {
        None
    } else {
        Some(MoveSelector::seeded(seed).select_for(&board, keys)?)
    };

    Ok(PrefixReport {
        prefix: prefix.clone(),
        finished,
        agent_to_move,
        continuations,
        selection,
    })
}

fn print_prefix_report(report: &PrefixReport) {
    print_subsection(&format!(
        "After {} ({})",
        report.prefix,
        report.prefix.verbose()
    ));

    if report.finished {
        println!("  The game is already over at this point.");
        return;
    }

    for continuation in &report.continuations {
        println!(
            "  {:<10} {:<24} {}",
            continuation.key.as_str(),
            continuation.key.verbose(),
            if continuation.avoided { "avoided" } else { "open" }
        );
    }

    match report.selection {
        Some(Selection::Play(cell)) => println!(
            "\n  Agent would play cell {cell} (row {}, column {})",
            cell.row(),
            cell.column()
        ),
        Some(Selection::Concede) => println!("\n  Agent would concede here"),
        None => println!("\n  It is the human's turn at this point"),
    }
}
