use std::io::Stderr;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    #[default]
    Compact,
    /// 機器可讀，給包在腳本或排程裡的呼叫者用
    Json,
}

/// 沒設 RUST_LOG 時的預設過濾規則
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "trellocard=debug,info"
    } else {
        "trellocard=info"
    }
}

/// 日誌一律寫 stderr，stdout 只留給 `Created <name>`
fn stderr_layer<S>() -> fmt::Layer<S, DefaultFields, Format, fn() -> Stderr>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(stderr_layer().compact()).init(),
        LogFormat::Json => registry.with(stderr_layer().json()).init(),
    }
}
