use std::env;
use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use pong_host::{config_path, load_config, HostError, Session};
use pong_proto::{EngineMsg, HostMsg};
use tracing::{debug, error, info};

const USAGE: &str = "usage: pong-host [--demo] [--fast] [--players N] [--max-ticks N] [CONFIG]";

struct Args {
    demo: bool,
    fast: bool,
    players: u8,
    max_ticks: Option<u64>,
    config: Option<String>,
}

fn parse_args() -> Result<Args, HostError> {
    let mut args = Args {
        demo: false,
        fast: false,
        players: 1,
        max_ticks: None,
        config: None,
    };
    let mut raw = env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--demo" => args.demo = true,
            "--fast" => args.fast = true,
            "--players" => {
                let value = raw.next().ok_or_else(|| usage("--players needs a value"))?;
                args.players = value
                    .parse()
                    .map_err(|_| usage(&format!("bad player count {value}")))?;
            }
            "--max-ticks" => {
                let value = raw.next().ok_or_else(|| usage("--max-ticks needs a value"))?;
                args.max_ticks = Some(
                    value
                        .parse()
                        .map_err(|_| usage(&format!("bad tick count {value}")))?,
                );
            }
            "-h" | "--help" => return Err(usage("help requested")),
            other if other.starts_with("--") => {
                return Err(usage(&format!("unknown flag {other}")))
            }
            other => args.config = Some(other.to_string()),
        }
    }
    Ok(args)
}

fn usage(reason: &str) -> HostError {
    HostError::Usage(format!("{reason}\n{USAGE}"))
}

fn run(args: Args) -> Result<(), HostError> {
    let path = config_path(args.config.as_deref());
    let config = load_config(path.as_deref())?;
    let interval = config.tick_interval();

    let mut session = if args.demo {
        Session::demo(config.clone())
    } else {
        Session::new(config.clone())
    };
    session.handle(HostMsg::Mount {
        width: config.arena_width,
        height: config.arena_height,
    });
    session.handle(HostMsg::Start {
        players: args.players,
    });
    session.handle(HostMsg::KeyDown {
        key: " ".to_string(),
    });
    session.handle(HostMsg::KeyUp {
        key: " ".to_string(),
    });

    let mut last = Instant::now();
    let mut frames = 0u64;
    while session.is_playing() {
        let elapsed = if args.fast {
            interval
        } else {
            thread::sleep(interval);
            let now = Instant::now();
            let elapsed = now - last;
            last = now;
            elapsed
        };
        session.advance(elapsed);

        for msg in session.drain() {
            match msg {
                EngineMsg::Frame { tick, commands } => {
                    frames += 1;
                    debug!(tick, commands = commands.len(), "frame");
                }
                EngineMsg::Win { name, ticks, .. } => {
                    info!(%name, ticks, frames, "winner");
                }
            }
        }

        let ticks = session.arena().map_or(0, |arena| arena.ticks());
        if args.max_ticks.is_some_and(|max| ticks >= max) {
            info!(ticks, "tick limit reached");
            session.handle(HostMsg::Stop);
        }
    }

    if let Some(summary) = session.summary() {
        println!("{}", serde_json::to_string_pretty(summary)?);
    }
    session.handle(HostMsg::Stop);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "pong-host failed");
            ExitCode::FAILURE
        }
    }
}
