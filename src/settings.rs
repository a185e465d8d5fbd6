use std::ffi::OsString;

use crate::error::CalculatorError;

pub const SIMPLIFY_ENV: &str = "FRACTION_CALC_SIMPLIFY";

pub const USAGE: &str = "Usage: fraction-calc [OPTIONS]

Options:
  -s, --simplify  Reduce the result to lowest terms before printing it
  -h, --help      Print this help

Environment:
  FRACTION_CALC_SIMPLIFY  Same as --simplify when set to 1, true, yes or on
  RUST_LOG                Log level (error, warn, info, debug, trace)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
  pub simplify: bool,
  pub show_help: bool,
}

impl Settings {
  /// Reads the process arguments and environment.
  pub fn from_env() -> Result<Self, CalculatorError> {
    let env_value = std::env::var(SIMPLIFY_ENV).ok();
    let args = utf8_arguments(std::env::args_os().skip(1))?;
    Self::from_parts(args, env_value.as_deref())
  }

  /// `args` excludes the program name. Flags win over the environment.
  pub fn from_parts<I, S>(args: I, simplify_env: Option<&str>) -> Result<Self, CalculatorError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut settings = Settings {
      simplify: simplify_env.map(is_truthy).unwrap_or(false),
      show_help: false,
    };
    for arg in args {
      match arg.as_ref() {
        "-s" | "--simplify" => settings.simplify = true,
        "-h" | "--help" => settings.show_help = true,
        other => return Err(CalculatorError::InvalidArgument(other.to_string())),
      }
    }
    log::info!("Resolved settings: {:?}", settings);
    Ok(settings)
  }
}

fn utf8_arguments<I>(args: I) -> Result<Vec<String>, CalculatorError>
where
  I: IntoIterator<Item = OsString>,
{
  args
    .into_iter()
    .map(|arg| {
      arg
        .into_string()
        .map_err(|arg| CalculatorError::InvalidArgument(arg.to_string_lossy().into_owned()))
    })
    .collect()
}

fn is_truthy(value: &str) -> bool {
  matches!(
    value.trim().to_ascii_lowercase().as_str(),
    "1" | "true" | "yes" | "on"
  )
}
