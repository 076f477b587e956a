use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{MhsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "mhs-calc")]
#[command(about = "Throughput, bottleneck and timeline calculator for a material-handling line")]
pub struct CliConfig {
    #[arg(long, help = "Commodity catalog CSV (Commodity,Length_in,CellSpeed_fpm)")]
    pub catalog: Option<PathBuf>,

    #[arg(long, help = "Orders CSV; the built-in sample book is used when omitted")]
    pub orders: Option<PathBuf>,

    #[arg(long, help = "TOML file overriding line constraints")]
    pub config: Option<PathBuf>,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50), help = "Sort / pallet-build crew (overrides config)")]
    pub sort_workers: Option<u32>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, default_value = "./output", help = "Directory for CSV output")]
    pub output_dir: PathBuf,

    #[arg(long, help = "Feed order rows unclamped instead of applying editor ranges")]
    pub raw: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Checks that every given input file exists.
    pub fn validate(&self) -> Result<()> {
        let inputs = [
            ("catalog", &self.catalog),
            ("orders", &self.orders),
            ("config", &self.config),
        ];
        for (field, path) in inputs {
            if let Some(path) = path {
                if !path.is_file() {
                    return Err(MhsError::ConfigError {
                        message: format!("--{} file not found: {}", field, path.display()),
                    });
                }
            }
        }
        Ok(())
    }
}
