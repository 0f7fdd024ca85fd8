use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use symdiff::{Expression, ExpressionError, sample_function};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Symdiff - differentiate f(x) = (x - 1)^2 + x symbolically
#[derive(Parser, Debug)]
#[command(name = "symdiff")]
#[command(about = "Render f(x) = (x - 1)^2 + x and its symbolic derivative")]
#[command(version)]
pub struct CliArgs {
    /// Evaluate f and f' at this value of x (repeatable)
    #[arg(long = "at", value_name = "X", allow_negative_numbers = true)]
    pub points: Vec<f64>,

    /// Also print the LaTeX form of f and f'
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn format_value(result: &Result<f64, ExpressionError>) -> String {
    match result {
        Ok(value) => format!("{}", value),
        Err(e) => format!("error: {}", e),
    }
}

fn print_evaluations(label: &str, expr: &Expression, points: &[f64]) {
    for (x, result) in points.iter().zip(expr.evaluate_many(points)) {
        if let Err(e) = &result {
            warn!("Evaluating {} at x = {} failed: {}", label, x, e);
        }
        println!("{}({}) = {}", label, x, format_value(&result));
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let f = sample_function();
    info!("Differentiating {}", f);
    let derivative = f.differentiate();

    println!("f(x) = {}", f);
    println!("f'(x) = {}", derivative);

    if args.latex {
        println!("f(x) = {}", f.to_latex());
        println!("f'(x) = {}", derivative.to_latex());
    }

    print_evaluations("f", &f, &args.points);
    print_evaluations("f'", &derivative, &args.points);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["symdiff", "--at", "3", "--at", "-1.5", "--latex"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.points, vec![3.0, -1.5]);
            assert!(args.latex);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::try_parse_from(["symdiff"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.points.is_empty());
            assert!(!args.latex);
        }
    }

    #[test]
    fn test_cli_args_rejects_non_numeric_point() {
        let args = CliArgs::try_parse_from(["symdiff", "--at", "three"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Ok(7.0)), "7");
        assert_eq!(
            format_value(&Err(ExpressionError::UnboundVariable)),
            "error: No value bound for variable x"
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
