//! Countdown timer demo.
//!
//! Type a number of seconds, press enter to set it, then `s` to start,
//! `p` to pause and `r` to reset. Logs go to a file so they do not disturb
//! the terminal UI.

use bubbletea_countdown::prelude::*;
use bubbletea_rs::{Cmd, Model, Msg, Program};
use clap::Parser;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "countdown")]
#[command(about = "An interactive countdown timer for the terminal")]
struct Args {
    /// Duration in seconds to pre-set
    #[arg(short, long)]
    duration: Option<u64>,

    /// Milliseconds between ticks
    #[arg(long, default_value = "1000")]
    interval_ms: u64,

    /// Start counting immediately (requires --duration)
    #[arg(short, long)]
    autostart: bool,

    /// Where to write logs
    #[arg(long, default_value = "countdown.log")]
    log_file: PathBuf,
}

static ARGS: OnceCell<Args> = OnceCell::new();

struct App {
    timer: Countdown,
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut config = Config::new();
        let mut autostart = false;
        if let Some(args) = ARGS.get() {
            config = config.with_interval(Duration::from_millis(args.interval_ms.max(1)));
            if let Some(secs) = args.duration {
                config = config.with_duration(secs);
            }
            autostart = args.autostart;
        }

        let mut timer = Countdown::with_config(config);
        let cmd = if autostart { timer.start() } else { None };
        (Self { timer }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(finished) = msg.downcast_ref::<FinishedMsg>() {
            if finished.id == self.timer.id() {
                info!(configured = ?self.timer.configured(), "countdown finished");
            }
            return None;
        }
        self.timer.update(msg)
    }

    fn view(&self) -> String {
        self.timer.view()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!(?args, "starting countdown");
    ARGS.set(args)
        .map_err(|_| anyhow::anyhow!("options already initialised"))?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build program: {e:?}"))?;
    program
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("program error: {e:?}"))?;

    info!("exiting");
    Ok(())
}
