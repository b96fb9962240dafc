use std::io;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use relive_core::app::{AppConfig, Runtime, RuntimeHandle, bootstrap};
use relive_core::impls::{ConsoleSurface, StaticLoader, TokioScheduler};
use relive_core::ports::SystemClock;

mod repl;

use repl::{HELP, ReplCommand, parse_line};

fn init_tracing() {
    // stdout は表示用なのでログは stderr へ
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("relive=info,relive_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading config");
            Ok(AppConfig::from_path(path)?)
        }
        None => Ok(AppConfig::default()),
    }
}

/// stdin を読んで runtime にコマンドを送る。終了要求か EOF で戻る。
async fn repl(handle: &RuntimeHandle) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                return Ok(());
            }
        };
        let Some(line) = line else {
            // EOF
            return Ok(());
        };

        match parse_line(&line) {
            None => {}
            Some(Ok(ReplCommand::Load)) => {
                if let Err(e) = handle.load().await {
                    error!(error = %e, "load failed");
                }
            }
            Some(Ok(ReplCommand::Unload)) => {
                if let Err(e) = handle.unload().await {
                    error!(error = %e, "unload failed");
                }
            }
            Some(Ok(ReplCommand::Status)) => {
                let status = handle.status().await?;
                println!("{}", serde_json::to_string_pretty(&status)?);
            }
            Some(Ok(ReplCommand::Help)) => println!("{HELP}"),
            Some(Ok(ReplCommand::Quit)) => return Ok(()),
            Some(Err(unknown)) => warn!(command = %unknown, "unknown command; {HELP}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = load_config()?;

    // (A) 依存ライブラリを取得して controller を組み立てる
    let clock = SystemClock::new(config.zone);
    info!(zone = ?clock.zone(), period_ms = config.period_ms, "starting");
    let loader = StaticLoader::new(clock);
    let (scheduler, ticks) = TokioScheduler::new();
    let surface = ConsoleSurface::new(io::stdout());
    let controller = bootstrap(&config, &loader, surface, scheduler).await?;

    // (B) runtime を起動して最初の load
    let (runtime, handle) = Runtime::new(controller, ticks);
    let join = tokio::spawn(runtime.run());
    handle.load().await?;

    // (C) REPL
    let result = repl(&handle).await;

    // (D) unload してから終了
    handle.shutdown().await?;
    join.await?;
    result
}
