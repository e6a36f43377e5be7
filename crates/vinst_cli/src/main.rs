//! vinst: instance and testbench snippet generator for HDL modules.
//!
//! `vinst inst` prints the parameter/port declarations and instantiation of
//! a module, `vinst tb` wraps the instantiation in a simulation testbench,
//! and `vinst dump` shows what was extracted. Generated text is also placed
//! on the system clipboard.

#![warn(missing_docs)]

mod dump;
mod inst;
mod output;
mod pipeline;
mod tb;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// vinst: generate instantiation snippets from HDL module headers.
#[derive(Parser, Debug)]
#[command(name = "vinst", version, about = "HDL instance and testbench generator")]
pub struct Cli {
    /// Suppress all output except errors and the generated text.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `vinst.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Do not copy the generated text to the system clipboard.
    #[arg(long, global = true)]
    pub no_clipboard: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the declarations and instantiation of a module.
    Inst {
        /// HDL source file containing the module.
        file: PathBuf,
    },
    /// Print a testbench module wrapping the module.
    Tb {
        /// HDL source file containing the module.
        file: PathBuf,
    },
    /// Print the extracted module interface.
    Dump {
        /// HDL source file containing the module.
        file: PathBuf,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

/// Output format for `vinst dump`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable listing.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress status output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether the clipboard was disabled on the command line.
    pub no_clipboard: bool,
    /// Optional path to a custom config file.
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// The log level implied by `-q`/`-v`.
    pub fn level_filter(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_clipboard: cli.no_clipboard,
        config: cli.config,
    };

    // RUST_LOG, when set, takes precedence over the flags.
    let _ = env_logger::Builder::new()
        .filter_level(global.level_filter())
        .parse_default_env()
        .try_init();

    let result = match cli.command {
        Command::Inst { ref file } => inst::run(file, &global),
        Command::Tb { ref file } => tb::run(file, &global),
        Command::Dump { ref file, format } => dump::run(file, format, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn global(quiet: bool, verbose: bool) -> GlobalArgs {
        GlobalArgs {
            quiet,
            verbose,
            no_clipboard: false,
            config: None,
        }
    }

    #[test]
    fn parse_inst() {
        let cli = Cli::parse_from(["vinst", "inst", "rtl/fifo_sc.v"]);
        match cli.command {
            Command::Inst { file } => assert_eq!(file, PathBuf::from("rtl/fifo_sc.v")),
            _ => panic!("expected Inst command"),
        }
        assert!(!cli.no_clipboard);
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_tb() {
        let cli = Cli::parse_from(["vinst", "tb", "counter.sv"]);
        match cli.command {
            Command::Tb { file } => assert_eq!(file, PathBuf::from("counter.sv")),
            _ => panic!("expected Tb command"),
        }
    }

    #[test]
    fn parse_dump_default_format() {
        let cli = Cli::parse_from(["vinst", "dump", "m.v"]);
        match cli.command {
            Command::Dump { format, .. } => assert_eq!(format, ReportFormat::Text),
            _ => panic!("expected Dump command"),
        }
    }

    #[test]
    fn parse_dump_json() {
        let cli = Cli::parse_from(["vinst", "dump", "m.v", "--format", "json"]);
        match cli.command {
            Command::Dump { format, .. } => assert_eq!(format, ReportFormat::Json),
            _ => panic!("expected Dump command"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "vinst",
            "tb",
            "m.v",
            "--no-clipboard",
            "--config",
            "/tmp/vinst.toml",
            "-q",
        ]);
        assert!(cli.no_clipboard);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/vinst.toml")));
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        assert!(Cli::try_parse_from(["vinst", "inst"]).is_err());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["vinst", "synth", "m.v"]).is_err());
    }

    #[test]
    fn level_filter_follows_flags() {
        assert_eq!(global(false, false).level_filter(), log::LevelFilter::Warn);
        assert_eq!(global(false, true).level_filter(), log::LevelFilter::Debug);
        assert_eq!(global(true, true).level_filter(), log::LevelFilter::Error);
    }
}
