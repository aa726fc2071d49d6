//! Interactive dashboard.
//!
//! Scans run on background tasks so the prompt stays usable; a newer scan
//! supersedes one still in flight. Their outcomes are printed by a single
//! printer task fed through a channel.

mod command;
mod helper;

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use fraudscan_application::{ScanOutcome, ScanUseCase};
use fraudscan_core::error::TransportError;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

use crate::render;
use command::ReplCommand;
use helper::ReplHelper;

/// Outcome of a background scan, sent to the printer task.
struct ScanEvent {
    url: String,
    result: Result<ScanOutcome, TransportError>,
}

fn print_scan_event(event: ScanEvent) {
    match event.result {
        Ok(ScanOutcome::Completed(view)) | Ok(ScanOutcome::Rejected(view)) => {
            println!();
            render::print_view(&view);
        }
        Ok(ScanOutcome::Superseded) => {
            println!("{}", format!("Scan of {} superseded.", event.url).bright_black());
        }
        Ok(ScanOutcome::Ignored) => {}
        Err(error) => render::print_transport_error(&error, true),
    }
}

enum ScanRequest {
    Url(String),
    Retry(String),
}

fn spawn_scan(usecase: &Arc<ScanUseCase>, events: &mpsc::Sender<ScanEvent>, request: ScanRequest) {
    let usecase = Arc::clone(usecase);
    let events = events.clone();
    tokio::spawn(async move {
        let (url, result) = match request {
            ScanRequest::Url(url) => {
                let result = usecase.scan(&url).await;
                (url, result)
            }
            ScanRequest::Retry(url) => (url, usecase.retry().await),
        };
        if events.send(ScanEvent { url, result }).await.is_err() {
            tracing::debug!("Printer gone, dropping scan outcome");
        }
    });
}

/// Runs one command. Returns `false` when the REPL should stop.
async fn handle(
    usecase: &Arc<ScanUseCase>,
    events: &mpsc::Sender<ScanEvent>,
    command: ReplCommand,
) -> Result<bool> {
    match command {
        ReplCommand::Scan(url) => {
            println!("{}", format!("Scanning {url}...").bright_black());
            spawn_scan(usecase, events, ScanRequest::Url(url));
        }
        ReplCommand::Retry => match usecase.view().await.retry_url {
            Some(url) => {
                println!("{}", format!("Retrying {url}...").bright_black());
                spawn_scan(usecase, events, ScanRequest::Retry(url));
            }
            None => render::print_notice("Nothing to retry."),
        },
        ReplCommand::History => render::print_history(&usecase.view().await.history),
        ReplCommand::Open(index) => match usecase.load_from_history(index).await {
            Ok(view) => render::print_view(&view),
            Err(e) if e.is_not_found() => {
                render::print_notice(&format!("No history entry {}.", index + 1))
            }
            Err(e) => return Err(e.into()),
        },
        ReplCommand::Delete(index) => {
            match usecase.delete_history(index).await? {
                Some(entry) => render::print_notice(&format!("Deleted {}.", entry.url)),
                None => render::print_notice(&format!("No history entry {}.", index + 1)),
            }
            render::print_history(&usecase.view().await.history);
        }
        ReplCommand::Image(index) => {
            if usecase.select_image_index(index).await {
                render::print_view(&usecase.view().await);
            } else {
                render::print_notice(&format!("No image {} in the current listing.", index + 1));
            }
        }
        ReplCommand::Close => {
            usecase.clear_image().await;
            render::print_view(&usecase.view().await);
        }
        ReplCommand::New => render::print_view(&usecase.reset().await),
        ReplCommand::Show => render::print_view(&usecase.view().await),
        ReplCommand::Help => render::print_help(),
        ReplCommand::Quit => return Ok(false),
    }
    Ok(true)
}

pub async fn run(usecase: Arc<ScanUseCase>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::channel::<ScanEvent>(16);
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            print_scan_event(event);
        }
    });

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    render::print_banner();
    let history = usecase.view().await.history;
    if !history.is_empty() {
        println!("{}", "Recent scans".bold());
        render::print_history(&history);
        println!();
    }

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let command = match ReplCommand::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        render::print_notice(&e.to_string());
                        continue;
                    }
                };
                let _ = rl.add_history_entry(line.trim());

                match handle(&usecase, &event_tx, command).await {
                    Ok(true) => {}
                    Ok(false) => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    Err(e) => eprintln!("{}", format!("Error: {e:#}").red()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    // Abandon any scan in flight so the printer can drain and stop.
    usecase.reset().await;
    drop(event_tx);
    let _ = printer.await;

    Ok(())
}
