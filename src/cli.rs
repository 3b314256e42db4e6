use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments only touch local configuration
pub fn is_config_command(args: &Args) -> bool {
    args.new_base_url.is_some()
        || args.new_app_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// The Blue Alliance API client
///
/// Fetches one resource and prints the raw response body.
///
/// Examples:
///   tba_wrapper getTeam -o team_key=frc254
///   tba_wrapper get_district_rankings -o district_short=ne -o year=2014
///   tba_wrapper getTeams -o page_num=1 --url-only
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Operation to call, e.g. getTeam or get_team. See --list.
    pub operation: Option<String>,

    /// Option override as key=value. May be repeated.
    /// Integer values are sent as numbers, anything else as text.
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Option overrides as a JSON object, e.g. '{"team_key":"frc254"}'.
    /// Applied before any --option values.
    #[arg(long = "json", value_name = "JSON")]
    pub json_options: Option<String>,

    /// Print the resolved URL and exit without a network call.
    #[arg(long = "url-only", short = 'u', help_heading = "Output")]
    pub url_only: bool,

    /// Pretty-print the body when it is JSON.
    #[arg(long = "pretty", short = 'p', help_heading = "Output")]
    pub pretty: bool,

    /// Also print status line and headers before the body.
    #[arg(long = "include", short = 'i', help_heading = "Output")]
    pub include_headers: bool,

    /// List every operation with its path template and defaults.
    #[arg(long = "list", short = 'l', help_heading = "Info")]
    pub list: bool,

    /// Update the base URL in config.
    #[arg(long = "set-base-url", help_heading = "Configuration", value_name = "URL")]
    pub new_base_url: Option<String>,

    /// Update the app id header value in config.
    #[arg(long = "set-app-id", help_heading = "Configuration", value_name = "APP_ID")]
    pub new_app_id: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
