use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use watch_logging::LogDestination;
use watcher_app::runner::run_watch;
use watcher_app::surface::TerminalSurface;
use watcher_core::QueryParams;
use watcher_engine::SubmitClient;

#[derive(Parser)]
#[command(name = "watcher", about = "Watches a remote task until its result is ready")]
struct Cli {
    /// Where log output goes.
    #[arg(long, value_enum, default_value = "terminal")]
    log: LogArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll the status of the task named in the page URL's query string.
    Watch {
        /// Result page URL, e.g. https://host/main?task_id=abc123
        page_url: String,
    },
    /// Upload a file for processing, then watch the resulting task.
    Submit {
        /// Page URL the upload/process/status endpoints are resolved against.
        page_url: String,
        /// Text file to upload.
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    watch_logging::initialize(cli.log.into());

    let mut surface = TerminalSurface;
    match cli.command {
        Command::Watch { page_url } => {
            // The one-shot read of the page location; the task id is passed
            // explicitly from here on.
            let task_id = QueryParams::from_url(&page_url)
                .task_id()
                .map(str::to_owned);
            run_watch(&page_url, task_id, &mut surface)
        }
        Command::Submit { page_url, file } => {
            let task_id = submit(&page_url, &file)?;
            run_watch(&page_url, Some(task_id), &mut surface)
        }
    }
}

fn submit(page_url: &str, file: &Path) -> anyhow::Result<String> {
    let client = SubmitClient::new(page_url)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let task_id = runtime.block_on(client.submit_file(file))?;
    log::info!("processing started, task {task_id}");
    Ok(task_id)
}
