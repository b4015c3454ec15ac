use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use connect_arena::agent::Agent;
use connect_arena::bot_process::BotProcess;
use connect_arena::configuration::Configuration;
use connect_arena::match_runner::run_match;
use connect_arena::tournament::Tournament;

use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

fn init_logger() {
    let format = fmt::format()
        .without_time()
        .with_ansi(true)
        .with_level(true)
        .with_target(false);

    let reg = Registry::default().with(fmt::layer().event_format(format));
    let _ = tracing::subscriber::set_global_default(reg);
}

fn column_bot(name: &str, column: usize) -> Arc<Agent> {
    Arc::new(Agent::new(
        name,
        env!("CARGO_BIN_EXE_column_bot"),
        vec![column.to_string()],
    ))
}

fn silent_bot(name: &str) -> Arc<Agent> {
    Arc::new(Agent::new(name, env!("CARGO_BIN_EXE_silent_bot"), vec![]))
}

#[test]
fn white_wins_with_a_vertical_line() {
    init_logger();
    let white = column_bot("stack-0", 0);
    let black = column_bot("stack-1", 1);

    let outcome = run_match(&white, &black, Duration::from_secs(2));

    assert_eq!(outcome.status, "Ok");
    assert_eq!((outcome.white_points, outcome.black_points), (2, 0));
    // White completes column 0 on its fourth move; the history stops at
    // the winning ply.
    assert_eq!(outcome.history, vec![0, 1, 0, 1, 0, 1, 0]);
}

#[test]
fn stacking_a_full_column_forfeits() {
    init_logger();
    // Both bots hammer column 0. After six plies the column is full and
    // White's seventh reply is rejected.
    let white = column_bot("stubborn-a", 0);
    let black = column_bot("stubborn-b", 0);

    let outcome = run_match(&white, &black, Duration::from_secs(2));

    assert_eq!(outcome.status, "cannot go to 0");
    assert_eq!((outcome.white_points, outcome.black_points), (0, 2));
    assert_eq!(outcome.history, vec![0, 0, 0, 0, 0, 0]);
}

#[test]
fn unparsable_reply_forfeits() {
    init_logger();
    // cat echoes the start token back, which is not a column.
    let white = Arc::new(Agent::from_path("/bin/cat"));
    let black = column_bot("stacker", 0);

    let outcome = run_match(&white, &black, Duration::from_secs(2));

    assert_eq!((outcome.white_points, outcome.black_points), (0, 2));
    assert!(
        outcome.status.contains("cannot parse"),
        "unexpected status: {}",
        outcome.status
    );
    assert!(outcome.history.is_empty());
}

#[test]
fn timeout_resolves_as_opponent_win() {
    init_logger();
    let white = column_bot("prompt", 0);
    let black = silent_bot("mute");

    let outcome = run_match(&white, &black, Duration::from_millis(500));

    assert_eq!(outcome.status, "timeout");
    assert_eq!((outcome.white_points, outcome.black_points), (2, 0));
    assert_eq!(outcome.history, vec![0]);
}

#[test]
fn deadline_expiry_kills_the_bot() {
    init_logger();
    let mut bot =
        BotProcess::start(Path::new(env!("CARGO_BIN_EXE_silent_bot")), &[]).unwrap();

    let reply = bot.request_turn("Go", Duration::from_millis(200));

    assert_eq!(reply, "");
    assert!(!bot.is_alive());
}

#[test]
fn both_programs_missing_is_a_double_dq() {
    init_logger();
    let ghost_a = Arc::new(Agent::from_path("/definitely/not/here/a"));
    let ghost_b = Arc::new(Agent::from_path("/definitely/not/here/b"));

    let outcome = run_match(&ghost_a, &ghost_b, Duration::from_secs(2));

    assert_eq!(outcome.status, "DQ");
    assert_eq!((outcome.white_points, outcome.black_points), (0, 0));
    assert!(outcome.history.is_empty());
}

#[test]
fn one_missing_program_forfeits_the_match() {
    init_logger();
    let real = column_bot("real", 0);
    let ghost = Arc::new(Agent::from_path("/definitely/not/here/bot"));

    let outcome = run_match(&real, &ghost, Duration::from_secs(2));
    assert_eq!(outcome.status, "DQ");
    assert_eq!((outcome.white_points, outcome.black_points), (2, 0));

    let outcome = run_match(&ghost, &real, Duration::from_secs(2));
    assert_eq!(outcome.status, "DQ");
    assert_eq!((outcome.white_points, outcome.black_points), (0, 2));
}

#[test]
fn round_robin_points_add_up() {
    init_logger();
    // Three deterministic bots on distinct columns: whoever plays White
    // finishes its stack first, so every match is a White win and every
    // agent takes one White game per pairing.
    let agents = vec![
        column_bot("alpha", 0),
        column_bot("bravo", 1),
        column_bot("charlie", 2),
    ];

    let config = Configuration::new()
        .with_time_budget(Duration::from_secs(2))
        .with_verbose(false);

    let standings = Tournament::new(agents, config).play();

    assert_eq!(standings.len(), 3);
    for (_, points) in &standings {
        assert_eq!(*points, 4);
    }
    // 3 pairings x 2 games x 2 points awarded per game.
    let total: u32 = standings.iter().map(|(_, points)| points).sum();
    assert_eq!(total, 12);
    // Ties break by name, so the order is deterministic.
    let names: Vec<_> = standings
        .iter()
        .map(|(agent, _)| agent.name.as_str())
        .collect();
    assert_eq!(names, ["alpha", "bravo", "charlie"]);
}
