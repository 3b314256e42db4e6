use crate::cli::Args;
use std::fmt::Write as _;
use tba_wrapper::config::Config;
use tba_wrapper::endpoints::{self, Endpoint, Group};
use tba_wrapper::error::AppError;
use tba_wrapper::options::{OptionsRecord, resolve};
use tba_wrapper::{NAME, RawResponse, TbaClient, VERSION};
use tracing::{info, warn};

/// Collects option overrides from `--json` and `--option` arguments.
/// `--option` values win over keys given in `--json`.
pub fn parse_overrides(args: &Args) -> Result<OptionsRecord, AppError> {
    let from_json = match &args.json_options {
        Some(raw) => serde_json::from_str::<OptionsRecord>(raw)
            .map_err(|e| AppError::invalid_option(format!("{raw} ({e})")))?,
        None => OptionsRecord::new(),
    };
    let from_pairs = OptionsRecord::from_pairs(&args.options)?;
    Ok(resolve(&from_json, &from_pairs))
}

/// Renders the `--list` table: one block per group with its defaults.
pub fn format_listing() -> String {
    let mut out = format!("{NAME} {VERSION} operations\n\n");
    for group in Group::ALL {
        let defaults = group
            .defaults()
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{} (defaults: {defaults})", group.as_str().to_uppercase());
        for endpoint in group.endpoints() {
            let _ = writeln!(out, "  {:<26} {}", endpoint.name, endpoint.template);
        }
        out.push('\n');
    }
    out
}

/// Handles the --list command.
pub fn handle_list_command() {
    print!("{}", format_listing());
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-app-id,
/// --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_file(args, &Config::get_config_path()).await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Applies the configuration flags in `args` to the file at `path`.
///
/// Starts from the file as stored, so `TBA_*` environment overrides never
/// end up persisted. An unreadable or malformed file is an error and is left
/// untouched.
pub async fn update_config_file(args: &Args, path: &str) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await?;

    if let Some(base_url) = &args.new_base_url {
        config.base_url = base_url.clone();
    }

    if let Some(app_id) = &args.new_app_id {
        config.app_id = app_id.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(path).await?;

    Ok(config)
}

/// Formats a response for stdout. With `pretty`, JSON bodies are re-indented;
/// anything that is not JSON is printed as received.
pub fn format_response(response: &RawResponse, pretty: bool, include_headers: bool) -> String {
    let mut out = String::new();
    if include_headers {
        let _ = writeln!(out, "{} {}", response.status, response.url);
        for (name, value) in &response.headers {
            let _ = writeln!(out, "{}: {}", name, value.to_str().unwrap_or("<binary>"));
        }
        out.push('\n');
    }

    let body = if pretty {
        serde_json::from_str::<serde_json::Value>(&response.body)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| response.body.clone())
    } else {
        response.body.clone()
    };
    out.push_str(&body);
    out
}

/// Resolves, builds and (unless `--url-only`) fetches one operation.
pub async fn handle_request_command(
    args: &Args,
    config: &Config,
    operation: &str,
) -> Result<(), AppError> {
    let endpoint: &Endpoint = endpoints::find(operation)?;
    let overrides = parse_overrides(args)?;
    let client = TbaClient::new(config)?;

    if args.url_only {
        println!("{}", client.build_url(endpoint, &overrides)?);
        return Ok(());
    }

    let response = client.request(endpoint, &overrides).await?;
    if response.is_success() {
        info!("{} returned {}", endpoint.name, response.status);
    } else {
        warn!("{} returned {} for {}", endpoint.name, response.status, response.url);
    }

    println!("{}", format_response(&response, args.pretty, args.include_headers));
    Ok(())
}
