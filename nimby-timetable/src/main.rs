use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use nimby_timetable::Error;
use nimby_timetable::config::{ExportConfig, LulConfig};
use nimby_timetable::fetch::{Downloader, FetchConfig};
use nimby_timetable::input::{read_block, read_locator};
use nimby_timetable::timetable::DEFAULT_LEAD_IN_MINUTES;
use nimby_timetable::{lul, rtt};

/// Which source the interactive loop reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Realtime Trains service pages, one URL per prompt
    Rtt,
    /// Working timetable rows, one blank-line-terminated block per prompt
    Lul,
}

#[derive(Debug, Parser)]
#[command(
    name = "nimby-timetable",
    about = "Convert train timetables to NIMBY Rails listings.",
    version
)]
struct Cli {
    /// Input format.
    #[arg(value_enum, default_value_t = Mode::Rtt)]
    mode: Mode,

    /// Minutes between the timetable start and the first departure.
    #[arg(long, env = "NIMBY_LEAD_IN_MINUTES", default_value_t = DEFAULT_LEAD_IN_MINUTES)]
    lead_in_minutes: i64,

    /// HTTP request timeout in seconds.
    #[arg(long, env = "NIMBY_FETCH_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// User agent sent with HTTP requests.
    #[arg(long)]
    user_agent: Option<String>,
}

impl Cli {
    fn export_config(&self) -> ExportConfig {
        ExportConfig::new(self.lead_in_minutes)
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::default();
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(secs);
        }
        if let Some(user_agent) = &self.user_agent {
            config = config.with_user_agent(user_agent.clone());
        }
        config
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let export = cli.export_config();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    match cli.mode {
        Mode::Rtt => run_rtt(&mut input, &export, cli.fetch_config()).await,
        Mode::Lul => run_lul(&mut input, &export),
    }
}

/// Prompt for Realtime Trains URLs until end of input.
async fn run_rtt(
    input: &mut impl BufRead,
    export: &ExportConfig,
    fetch_config: FetchConfig,
) {
    let downloader = Downloader::new(fetch_config).expect("Failed to create downloader");

    loop {
        if let Err(e) = prompt(&mut io::stdout(), "RTT URL: ") {
            eprintln!("Failed to write prompt: {e}");
        }
        let url = match read_locator(input) {
            Ok(Some(url)) => url,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        };
        if url.is_empty() {
            continue;
        }

        match convert_page(&downloader, &url, export).await {
            Ok(output) => println!("\n{output}\n"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

async fn convert_page(
    downloader: &Downloader,
    url: &str,
    export: &ExportConfig,
) -> Result<String, Error> {
    let date = rtt::date_from_url(url)?;
    let contents = downloader.download(url).await?;
    let timetable = rtt::parse_page(&contents, date)?;

    Ok(format!(
        "{}\n{}",
        timetable.summary(),
        timetable.to_nimby_timetable(export.lead_in_minutes)
    ))
}

/// Prompt for working timetable blocks until end of input.
fn run_lul(input: &mut impl BufRead, export: &ExportConfig) {
    let config = LulConfig::default();

    loop {
        println!("Input timetable: ");
        let lines = match read_block(input) {
            Ok(Some(lines)) => lines,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        };

        match lul::parse_lines_with(&lines, &config) {
            Ok(timetable) => println!(
                "\n{}\n{}\n\n{}\n",
                timetable.summary(),
                timetable,
                timetable.to_nimby_timetable(export.lead_in_minutes)
            ),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}
