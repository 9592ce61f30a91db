//! Structured errors for failures clap reports before `Cli` exists

use clap::error::ErrorKind;
use edgeroute_core::error::RouteError;

/// Whether raw arguments select JSON output (`--format json` or
/// `--format=json`, any case)
pub fn requests_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let value = match arg.strip_prefix("--format=") {
            Some(value) => Some(value.to_string()),
            None if arg == "--format" => args.next().map(|v| v.as_ref().to_string()),
            None => None,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}

/// Map a clap failure onto the error taxonomy.
///
/// Help and version output are not errors and yield `None`.
pub fn parse_failure(err: &clap::Error) -> Option<RouteError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::TooManyValues
        | ErrorKind::MissingRequiredArgument => Some(RouteError::UsageError(err.to_string())),
        _ => Some(RouteError::Other(err.to_string())),
    }
}
