use std::path::PathBuf;

use clap::Parser;

/// Broadcast subtitle titler: converts WebVTT into OP-47 VANC teletext and dispatches it to a
/// video-mixer server in time-synchronization with playback.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Enable debug-level logging
    #[arg(short, long, help = "Enable detailed debug logging")]
    pub verbose: bool,

    /// Path to a TOML configuration file. Defaults to the platform-standard `confy` location.
    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,
}
