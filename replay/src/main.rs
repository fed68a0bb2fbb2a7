//! Replays a recorded transcript through the engine and reports the
//! outcome. The transcript JSON comes from a file argument or stdin:
//!
//!   cargo run -p brawl-core --example gen-transcript -- rushdown > t.json
//!   cargo run -p brawl-replay -- t.json
//!
//! Events go to stderr as they happen; the final ReplayOutput JSON
//! (winner, health, tick count, transcript hash) goes to stdout.

use std::io::Read;

use anyhow::{Context, Result};

use brawl_core::{
    create_initial_state, hash_transcript, step, MatchPhase, ReplayInput, ReplayOutput,
};

fn load_input() -> Result<ReplayInput> {
    let args: Vec<String> = std::env::args().collect();

    let json_str = if args.len() > 1 {
        std::fs::read_to_string(&args[1])
            .with_context(|| format!("failed to read transcript file {}", args[1]))?
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        buf
    };

    serde_json::from_str(&json_str).context("failed to parse ReplayInput JSON")
}

fn main() -> Result<()> {
    let input = load_input()?;

    let mut state = create_initial_state(&input.config);
    for pair in &input.transcript {
        let (next, event) = step(&state, pair, &input.config);
        state = next;
        if let Some(ev) = event {
            eprintln!("[replay] tick {:5}: {:?}", state.tick, ev);
        }
        if state.phase == MatchPhase::Over {
            break;
        }
    }

    let output = ReplayOutput {
        winner: state.winner,
        final_health: [state.fighters[0].health, state.fighters[1].health],
        ticks: state.tick,
        transcript_hash: hash_transcript(&input.transcript),
    };

    eprintln!(
        "[replay] finished after {} ticks: winner {:?}, health {:?}",
        output.ticks, output.winner, output.final_health
    );
    eprintln!(
        "[replay] transcript sha256: {}",
        hex::encode(output.transcript_hash)
    );

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
