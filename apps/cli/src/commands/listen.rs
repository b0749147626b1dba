use std::path::PathBuf;
use std::sync::Arc;

use stt_captioner_core::{CaptionEvent, CaptionSession, ListenParams, ReplaySource};

use crate::runtime::{AppEvent, CliRuntime};

#[derive(clap::Args)]
pub struct Args {
    /// Newline-delimited JSON recognition events (stands in for the
    /// platform recognition engine)
    #[arg(long, env = "CAPTIONER_EVENTS")]
    pub events: PathBuf,

    #[arg(long, env = "CAPTIONER_LANGUAGE", default_value = "ko-KR")]
    pub language: String,
}

pub async fn run(args: Args) {
    let params = ListenParams {
        language: args.language,
        ..Default::default()
    };

    let source = ReplaySource::new(&args.events);
    let session = CaptionSession::new();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let runtime = Arc::new(CliRuntime::new(tx));

    if !session.start(&source, &params, runtime) {
        eprintln!(
            "speech recognition is not available here ({}); nothing captured",
            args.events.display()
        );
        std::process::exit(1);
    }

    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(AppEvent::Caption(event)) => {
                    if render(event) {
                        break;
                    }
                }
                Some(AppEvent::Batch(_)) => {}
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                session.stop().await;
            }
        }
    }

    session.stop().await;
}

/// Prints one event; returns `true` once the session has stopped.
fn render(event: CaptionEvent) -> bool {
    match event {
        CaptionEvent::Started { .. } => {
            println!("listening... (ctrl-c to stop)");
            false
        }
        CaptionEvent::Partial { text, .. } => {
            println!("partial: {text}");
            false
        }
        CaptionEvent::Final { segment, .. } => {
            println!("final:   {}", segment.text);
            false
        }
        CaptionEvent::Failed { error, .. } => {
            eprintln!("recognition error: {error}");
            false
        }
        CaptionEvent::Stopped { .. } => true,
    }
}
