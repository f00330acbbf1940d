use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use georepl::{BackendClient, Repl, ReplEvent};

/// Interactive shell for the map/coverage backend.
#[derive(Parser, Debug)]
#[command(name = "georepl")]
#[command(about = "Query broadband coverage and highlight map areas from a command line", long_about = None)]
struct Args {
    /// Base URL of the backend server.
    #[arg(long, default_value = "http://localhost:1234")]
    server: String,

    /// Fetch the whole-world overlay once before accepting commands.
    #[arg(long)]
    preload_overlay: bool,

    /// Tracing filter, e.g. "info" or "georepl=debug".
    #[arg(long, default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let client = BackendClient::new(args.server.clone());
    let repl = Arc::new(Repl::new(Arc::new(client)));
    tracing::info!(server = %args.server, session = %repl.session_id(), "georepl starting");

    // Renderer: observes the store over the bus rather than being handed
    // results directly.
    let printer = {
        let repl = repl.clone();
        let mut rx = repl.subscribe();
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(ReplEvent::TranscriptReplaced { .. }) => {
                        if let Some(table) = repl.store().transcript() {
                            println!("{table}");
                        }
                    }
                    Ok(ReplEvent::HighlightReplaced { features, .. }) => {
                        println!("[map] {features} area(s) highlighted");
                    }
                    Ok(ReplEvent::HighlightPreloaded { features }) => {
                        println!("[map] overlay loaded with {features} feature(s)");
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "printer lagged behind the bus");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    };

    if args.preload_overlay {
        match repl.preload_overlay().await {
            Ok(count) => tracing::info!(count, "overlay preloaded"),
            Err(e) => tracing::warn!(error = %e, "overlay preload failed"),
        }
    }

    println!("Enter command here! (broadband <state> <county> or highlight <area description>)");

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("georepl> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let trimmed = line.trim();
        if trimmed == "exit" || trimmed == "quit" {
            break;
        }

        // Each submission runs in its own task so a slow query never blocks
        // the prompt; the store sorts out whichever completion lands last.
        let repl = repl.clone();
        tokio::spawn(async move {
            repl.submit(&line).await;
        });
    }

    printer.abort();
    Ok(())
}
