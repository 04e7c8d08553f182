use crate::api::{self, Components};
use crate::config::{Settings, PROCESS_BATCH_SIZE};
use crate::runtime::block_on;
use crate::tools::fetch::{FetchConfig, DEFAULT_TIMEOUT, USER_AGENT};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;
use std::net::{SocketAddr, ToSocketAddrs};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "oggalaxy",
    version,
    about = "Sitemap discovery + Open Graph image extraction (JSON only)"
)]
pub struct Cli {
    #[command(flatten)]
    tuning: TuningArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args)]
struct TuningArgs {
    /// Per-request timeout for outbound fetches, in seconds
    #[arg(long, env = "OGGALAXY_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    timeout_secs: u64,
    /// Pages fetched concurrently per chunk
    #[arg(long, env = "OGGALAXY_BATCH_SIZE", default_value_t = PROCESS_BATCH_SIZE, global = true)]
    batch_size: usize,
    /// User-Agent sent with every outbound request
    #[arg(long, env = "OGGALAXY_USER_AGENT", default_value = USER_AGENT, global = true)]
    user_agent: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Resolve a domain's sitemap and extract images for the first pages
    Scan { domain: String },
    /// Resolve a domain's sitemap and list every page URL
    Resolve { domain: String },
    /// Extract images for a list of URLs
    Process(ProcessArgs),
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[derive(Args)]
struct ProcessArgs {
    #[arg(required = true)]
    urls: Vec<String>,
    /// Pages to process now; the rest are reported as unprocessed
    #[arg(long)]
    limit: Option<String>,
}

/// Envelope printed by the one-shot commands.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let serving = matches!(cli.cmd, Command::Serve(_));
    init_tracing(if serving { "info,oggalaxy=debug" } else { "warn" });

    let result = Components::new(cli.tuning.settings()).and_then(|components| match cli.cmd {
        Command::Serve(args) => serve(args, components).map(|_| ExitCode::SUCCESS),
        Command::Scan { domain } => Ok(finish(block_on(api::resolve_and_extract(&components, &domain))?)),
        Command::Resolve { domain } => Ok(finish(block_on(api::resolve_only(&components, &domain))?)),
        Command::Process(args) => {
            let urls = api::sanitize_urls(Some(&Value::from(args.urls)));
            let limit_arg = args.limit.map(Value::from);
            let limit = api::batch_limit(limit_arg.as_ref(), &components.settings);
            Ok(finish(block_on(api::extract_given_list(&components, urls, limit))?))
        }
    });

    result.unwrap_or_else(|e| {
        print_json(&ApiResponse::<()>::err(format!("{e:#}")));
        ExitCode::FAILURE
    })
}

impl TuningArgs {
    fn settings(&self) -> Settings {
        let fetch = FetchConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(&self.user_agent);
        Settings::default()
            .with_fetch(fetch)
            .with_batch_size(self.batch_size)
    }
}

fn serve(args: ServeArgs, components: Components) -> anyhow::Result<()> {
    let addr: SocketAddr = (args.host.as_str(), args.port)
        .to_socket_addrs()
        .with_context(|| format!("invalid listen address {}:{}", args.host, args.port))?
        .next()
        .with_context(|| format!("{} did not resolve to an address", args.host))?;
    block_on(crate::server::serve(addr, Arc::new(components)))?
}

fn init_tracing(default_filter: &str) {
    // stdout carries JSON output; logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn finish<T: Serialize, E: std::fmt::Display>(res: Result<T, E>) -> ExitCode {
    match res {
        Ok(v) => {
            print_json(&ApiResponse::ok(v));
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_json(&ApiResponse::<()>::err(e.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(val: &T) {
    match serde_json::to_string_pretty(val) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize output: {e}"),
    }
}
