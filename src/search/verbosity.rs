use clap;

/// How chatty the tracing output should be.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Errors only")]
    Silent,
    #[clap(help = "Search statistics and results")]
    Normal,
    #[clap(help = "Per-leg and per-pass details")]
    Verbose,
    #[clap(help = "Every observed frontier/explored event")]
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
