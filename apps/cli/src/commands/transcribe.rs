use std::path::PathBuf;

use bytes::Bytes;
use stt_clova::{ClovaClient, Language};
use stt_transcriber_core::{BatchController, BatchEvent};

use crate::runtime::{AppEvent, CliRuntime};

#[derive(clap::Args)]
pub struct Args {
    /// Audio file to transcribe
    pub file: PathBuf,

    /// Target language: Kor, Jpn, Eng or Chn
    #[arg(long, env = "CLOVA_LANGUAGE", default_value = "Kor")]
    pub language: Language,
}

pub async fn run(args: Args) {
    let env = match stt_clova::Env::load() {
        Ok(env) => env,
        Err(e) => {
            eprintln!("missing CLOVA credentials: {e}");
            std::process::exit(1);
        }
    };
    let client = ClovaClient::from_env(&env);

    let audio = match tokio::fs::read(&args.file).await {
        Ok(bytes) => Some(Bytes::from(bytes)),
        Err(e) => {
            tracing::warn!(file = %args.file.display(), error = %e, "audio file unreadable");
            None
        }
    };

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let runtime = CliRuntime::new(tx);

    let controller = BatchController::new();
    let session_id = uuid::Uuid::new_v4().to_string();
    controller
        .submit(&client, &runtime, &session_id, audio, args.language)
        .await;
    drop(runtime);

    let mut failed = false;
    while let Some(event) = rx.recv().await {
        let AppEvent::Batch(event) = event else {
            continue;
        };
        match event {
            BatchEvent::BatchStarted { .. } => {
                tracing::info!(session_id = %session_id, "transcription submitted");
            }
            BatchEvent::BatchResponse { response, .. } => {
                match serde_json::to_string_pretty(&response) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(_) => println!("{response}"),
                }
            }
            BatchEvent::BatchFailed { error, .. } => {
                eprintln!("transcription failed: {error}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
