use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the http server listens on.
    #[arg(
        short = 'b',
        long,
        value_name = "BIND_ADDRESS",
        default_value = "0.0.0.0:5201"
    )]
    pub bind: String,
    /// Base url of the upstream football data api. Paths such as `allLeagues` are appended to it.
    #[arg(
        short = 'u',
        long,
        value_name = "UPSTREAM_BASE_URL",
        default_value = "https://www.fotmob.com/api",
        value_parser = crate::args::validation::check_base_url
    )]
    pub upstream_base_url: String,
    #[arg(
        short = 't',
        long,
        value_name = "UPSTREAM_TIMEOUT_SECS",
        default_value = "15"
    )]
    pub upstream_timeout_secs: u64,
    /// Directory served under /static.
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
    // Falls back to actix's default (one per core) when absent.
    #[arg(short = 'w', long, value_name = "WORKERS")]
    pub workers: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub upstream_base_url: String,
    pub upstream_timeout_secs: u64,
    pub static_dir: String,
    pub workers: Option<usize>,
}
