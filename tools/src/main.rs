//! pack-hunt-runner: headless battle runner.
//!
//! Usage:
//!   pack-hunt-runner --seed 12345 --wolves 3 --sheep 8 --rounds 100
//!   pack-hunt-runner --config battle.json
//!   pack-hunt-runner --seed 12345 --ipc-mode
//!
//! In IPC mode the runner reads one JSON `PlayerCommand` per line on
//! stdin and answers with one JSON `CommandReply` per line on stdout.

use anyhow::Result;
use pack_hunt_core::{
    command::PlayerCommand, config::BattleConfig, engine::BattleEngine, entity::AnimalKind,
    outcome::GameOutcome,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match find_arg(&args, "--config") {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.wolves = parse_arg(&args, "--wolves", config.wolves);
    config.sheep = parse_arg(&args, "--sheep", config.sheep);
    config.max_rounds = parse_arg(&args, "--rounds", config.max_rounds);
    config.validate()?;
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let mut engine = BattleEngine::build(&config)?;

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        println!("Pack Hunt: pack-hunt-runner");
        println!("  seed:      {}", config.seed);
        println!("  wolves:    {}", config.wolves);
        println!("  sheep:     {}", config.sheep);
        println!("  rounds:    {}", config.max_rounds);
        println!();
        let outcome = run_batch(&mut engine, &config);
        print_summary(&engine, outcome);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut BattleEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let reply = serde_json::from_str::<PlayerCommand>(&buffer)
            .map_err(anyhow::Error::from)
            .and_then(|cmd| engine.apply(cmd).map_err(anyhow::Error::from));

        match reply {
            Ok(reply) => writeln!(stdout, "{}", serde_json::to_string(&reply)?)?,
            Err(e) => {
                log::warn!("command failed: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

/// Play rounds until the battle ends or the round budget runs out.
/// Nobody votes in batch mode, so each voting window rewards whichever
/// living animal comes first in the roster.
fn run_batch(engine: &mut BattleEngine, config: &BattleConfig) -> GameOutcome {
    for _ in 0..config.max_rounds {
        if engine.check_game_over().is_over() {
            break;
        }
        let round = engine.state.round;
        for event in engine.execute_round() {
            println!("[round {round:>3}] {event}");
        }

        if config.voting_interval > 0 && round % config.voting_interval == 0 {
            engine.start_voting(config.voting_duration);
            match engine.end_voting() {
                Ok(result) => println!(
                    "[round {round:>3}] vote: {} {} healed to {}",
                    result.winner.kind, result.winner.id, result.winner_health
                ),
                Err(e) => log::warn!("round {round}: vote not resolved: {e}"),
            }
        }
    }
    engine.check_game_over()
}

fn print_summary(engine: &BattleEngine, outcome: GameOutcome) {
    let status = engine.status();
    let alive = |kind: AnimalKind| {
        status
            .animals
            .iter()
            .filter(|a| a.kind == kind && a.is_alive)
            .count()
    };

    println!();
    println!("=== BATTLE SUMMARY ===");
    println!("  rounds played:  {}", status.round - 1);
    println!("  wolves alive:   {}", alive(AnimalKind::Wolf));
    println!("  sheep alive:    {}", alive(AnimalKind::Sheep));
    println!("  outcome:        {outcome}");
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    find_arg(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
