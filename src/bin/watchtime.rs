use clap::Parser;
use playlist_watchtime::config::{DEFAULT_BASE_URL, MAX_PAGE_SIZE};
use playlist_watchtime::{run, Config, PlaybackSpeed};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "watchtime")]
#[command(about = "Total watch time of a YouTube playlist", long_about = None)]
struct Cli {
    /// Playlist URL containing a `list=` parameter
    playlist_url: Option<String>,

    /// YouTube Data API key (can also be set via YOUTUBE_API_KEY env var)
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API base URL
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Items requested per playlist page
    #[arg(long, default_value_t = MAX_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=50))]
    page_size: u32,

    /// Playback speed to report; repeat for several (default: 1.25, 1.5, 1.75, 2)
    #[arg(short, long = "speed", value_name = "X")]
    speeds: Vec<PlaybackSpeed>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::default()
        .with_base_url(cli.base_url)
        .with_page_size(cli.page_size)
        .with_speeds(cli.speeds);
    if let Some(api_key) = cli.api_key {
        config = config.with_api_key(api_key);
    }

    run(
        &config,
        cli.playlist_url.as_deref(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await
}
