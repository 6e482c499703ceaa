use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use sqljudge::config::{CliConfig, JudgeConfig};
use sqljudge::output::{JudgeReport, OutputFormat};
use sqljudge::script::split_statements;
use sqljudge::{Dialect, SqlJudgeEngine};

/// sqljudge - classify SQL statements ahead of sharding and routing
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statements to classify, one per argument (reads --file or stdin when omitted)
    sql: Vec<String>,

    /// Script file with delimiter-separated statements
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// YAML configuration file (environment variables are used otherwise)
    #[arg(long)]
    config: Option<PathBuf>,

    /// SQL dialect: mysql, postgresql or sql92
    #[arg(long)]
    dialect: Option<Dialect>,

    /// Output format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Statement delimiter for scripts
    #[arg(long)]
    delimiter: Option<String>,

    /// Stop at the first statement that cannot be classified
    #[arg(long)]
    fail_fast: bool,
}

impl From<&Cli> for CliConfig {
    fn from(cli: &Cli) -> Self {
        CliConfig {
            config_file: cli.config.clone(),
            dialect: cli.dialect,
            output_format: cli.format,
            delimiter: cli.delimiter.clone(),
            fail_fast: cli.fail_fast,
        }
    }
}

fn main() -> ExitCode {
    // Defaults to WARN, can be overridden with RUST_LOG env var
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match JudgeConfig::from_cli(CliConfig::from(&cli)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    log::debug!("Using configuration: {:?}", config);

    match run(&cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Judge every input statement; `Ok(false)` when any of them was unclassifiable.
fn run(cli: &Cli, config: &JudgeConfig) -> anyhow::Result<bool> {
    let script;
    let statements: Vec<&str> = if !cli.sql.is_empty() {
        cli.sql.iter().map(String::as_str).collect()
    } else {
        script = read_script(cli.file.as_deref())?;
        split_statements(&script, &config.delimiter, config.dialect.lexical_syntax())
    };

    let engine = SqlJudgeEngine::new(config.dialect);
    let mut all_classified = true;
    for sql in statements {
        let report = JudgeReport::new(sql, engine.judge(sql));
        println!("{}", report.render(config.output_format)?);

        if !report.is_classified() {
            all_classified = false;
            if config.fail_fast {
                log::info!("Stopping at first unclassifiable statement");
                break;
            }
        }
    }

    Ok(all_classified)
}

fn read_script(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("Failed to read statements from stdin")?;
            Ok(script)
        }
    }
}
