//! Generates test transcript JSON files for the replay binary.
//!
//! Usage:
//!   cargo run -p brawl-core --example gen-transcript -- [idle|rushdown|mirror] > transcript.json

use brawl_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let config = default_config();

    let transcript: Vec<[Action; 2]> = match mode.as_str() {
        "idle" => {
            // Both fighters idle for the full round — ends in a draw at time-up
            vec![[NULL_ACTION; 2]; config.round_ticks as usize]
        }
        "rushdown" => {
            // Fighter 0 walks in and alternates jabs and kicks; fighter 1
            // blocks in bursts and otherwise backs off
            let mut transcript = Vec::new();
            for tick in 0..config.round_ticks {
                let a0 = match tick % 40 {
                    0 => Action::Attack(AttackKind::Jab),
                    20 => Action::Attack(AttackKind::Kick),
                    _ => Action::MoveRight,
                };
                let a1 = match tick % 60 {
                    0..=25 => Action::Block,
                    26..=40 => Action::MoveRight,
                    _ => Action::Idle,
                };
                transcript.push([a0, a1]);
            }
            transcript
        }
        "mirror" => {
            // Both close distance and throw the same heavy — double hits
            let mut transcript = Vec::new();
            for tick in 0..config.round_ticks {
                let action = match tick % 90 {
                    0..=30 => Action::MoveRight,
                    31 => Action::Attack(AttackKind::Heavy),
                    _ => Action::Idle,
                };
                let mirrored = match action {
                    Action::MoveRight => Action::MoveLeft,
                    Action::MoveLeft => Action::MoveRight,
                    other => other,
                };
                transcript.push([action, mirrored]);
            }
            transcript
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'rushdown', or 'mirror'", mode);
            std::process::exit(1);
        }
    };

    let input = ReplayInput { config, transcript };
    match serde_json::to_string(&input) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize transcript: {}", e);
            std::process::exit(1);
        }
    }
}
