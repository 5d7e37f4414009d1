use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, Level};

use ratroots::config::{resolve_config_path, Config};
use ratroots::locale::{self, Locale, Message};
use ratroots::plot::{plot_polynomial, PlotLabels};
use ratroots::report::{render_text, RootReport};
use ratroots::roots::evaluate::ratio_to_f64;
use ratroots::{parser, prompt, rational_roots, Polynomial};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Path to a TOML config file (default: ~/.ratroots/config.toml)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Enter a polynomial degree and coefficients interactively
  Interactive {
    /// Language of prompts and results; asked for when omitted
    #[arg(long, value_enum)]
    lang: Option<Locale>,

    /// Write an SVG plot of the polynomial to this file
    #[arg(long)]
    plot: Option<PathBuf>,
  },
  /// Find the rational roots of a polynomial given on the command line
  Solve {
    /// Integer coefficients, highest degree first
    #[arg(
      allow_negative_numbers = true,
      required_unless_present = "expr",
      conflicts_with = "expr"
    )]
    coefficients: Vec<i64>,

    /// The polynomial as text, e.g. "2x^2 - 3x + 1"
    #[arg(long, short)]
    expr: Option<String>,

    #[arg(long, value_enum)]
    lang: Option<Locale>,

    /// Absolute tolerance for the zero check
    #[arg(long, allow_negative_numbers = true)]
    tolerance: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write an SVG plot of the polynomial to this file
    #[arg(long)]
    plot: Option<PathBuf>,
  },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
  Text,
  Json,
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => Level::WARN,
    1 => Level::INFO,
    2 => Level::DEBUG,
    _ => Level::TRACE,
  };
  tracing_subscriber::fmt()
    .with_max_level(level)
    .with_writer(io::stderr)
    .without_time()
    .init();
}

/// Search, print and optionally plot. Errors from the search are localized.
fn solve_and_report(
  coeffs: Vec<i64>,
  locale: Locale,
  tolerance: f64,
  format: OutputFormat,
  plot_path: Option<&Path>,
  config: &Config,
) -> Result<()> {
  let poly = Polynomial::new(coeffs)
    .map_err(|e| anyhow::anyhow!(locale::error_text(locale, &e)))?;
  let roots = rational_roots(&poly, tolerance)
    .map_err(|e| anyhow::anyhow!(locale::error_text(locale, &e)))?;
  info!(polynomial = %poly, roots = roots.len(), "search finished");

  match format {
    OutputFormat::Text => println!("\n{}", render_text(locale, &roots)),
    OutputFormat::Json => {
      println!("{}", RootReport::new(&poly, &roots).to_json()?)
    }
  }

  if let Some(path) = plot_path {
    let values: Vec<f64> = roots.iter().map(ratio_to_f64).collect();
    let svg = plot_polynomial(
      &poly,
      &values,
      &config.plot,
      &PlotLabels::localized(locale),
    )?;
    std::fs::write(path, svg)
      .with_context(|| format!("Write plot {}", path.display()))?;
    if format == OutputFormat::Text {
      println!(
        "{} {}",
        locale::text(locale, Message::PlotSaved),
        path.display()
      );
    }
  }
  Ok(())
}

fn run(cli: Cli) -> Result<()> {
  let config = match resolve_config_path(&cli.config) {
    Some(path) => Config::load(&path)?,
    None => Config::default(),
  };

  match cli.command.unwrap_or(Commands::Interactive {
    lang: None,
    plot: None,
  }) {
    Commands::Interactive { lang, plot } => {
      let stdin = io::stdin();
      let mut input = stdin.lock();
      let mut output = io::stdout();
      let locale = match lang.or(config.locale) {
        Some(locale) => locale,
        None => prompt::select_locale(&mut input, &mut output)?,
      };
      let coeffs = prompt::read_polynomial(&mut input, &mut output, locale)?;
      output.flush()?;
      solve_and_report(
        coeffs,
        locale,
        config.tolerance,
        OutputFormat::Text,
        plot.as_deref(),
        &config,
      )
    }
    Commands::Solve {
      coefficients,
      expr,
      lang,
      tolerance,
      format,
      plot,
    } => {
      let coeffs = match expr {
        Some(text) => parser::parse_polynomial(&text)?,
        None => coefficients,
      };
      let tolerance = tolerance.unwrap_or(config.tolerance);
      if !(tolerance.is_finite() && tolerance >= 0.0) {
        anyhow::bail!("tolerance must be a non-negative number");
      }
      solve_and_report(
        coeffs,
        lang.or(config.locale).unwrap_or_default(),
        tolerance,
        format,
        plot.as_deref(),
        &config,
      )
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::FAILURE
    }
  }
}
