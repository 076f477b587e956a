use anyhow::Context;
use clap::Parser;
use mhs_calc::report::{render_text, DisplayReport};
use mhs_calc::validation::{clamp_to_controls, validate_input};
use mhs_calc::logger::{init_logger, LogStyle};
use mhs_calc::{io, sample};
use mhs_calc::{run_pass, CalculatorConfig, CliConfig, OutputFormat};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let style = if cli.log_json {
        LogStyle::Json
    } else {
        LogStyle::Compact
    };
    init_logger(style, cli.verbose);

    tracing::info!("Starting mhs-calc");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let mut config = match &cli.config {
        Some(path) => CalculatorConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(sort_workers) = cli.sort_workers {
        config.global.sort_workers = sort_workers;
    }

    let catalog = match &cli.catalog {
        Some(path) => io::load_catalog(path)
            .with_context(|| format!("reading catalog {}", path.display()))?,
        None => sample::sample_catalog(),
    };
    let mut orders = match &cli.orders {
        Some(path) => io::load_orders(path)
            .with_context(|| format!("reading orders {}", path.display()))?,
        None => {
            tracing::info!("No orders file given, using the sample order book");
            sample::sample_orders()
        }
    };

    if let Err(findings) = validate_input(&orders, &catalog, &config.line) {
        for finding in &findings {
            tracing::warn!("{}", finding);
        }
    }
    if !cli.raw {
        orders = orders
            .iter()
            .map(|o| clamp_to_controls(o, &config.line))
            .collect();
    }

    let report = run_pass(&catalog, &orders, config.global, &config.line);
    let display = DisplayReport::from(&report);

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", io::to_json(&display)?),
        OutputFormat::Csv => {
            let paths = io::write_report_csv(&cli.output_dir, &display)
                .with_context(|| format!("writing CSV to {}", cli.output_dir.display()))?;
            for path in paths {
                tracing::info!("📁 Output saved to: {}", path);
                println!("📁 Output saved to: {}", path);
            }
        }
    }

    Ok(())
}
