//! CLI utility to request a single water-safety prediction.
//!
//! Exit status: 0 for a Safe verdict, 2 for any other verdict, 1 when the
//! input is rejected or the request fails.

use aquasafe::config;
use aquasafe::egui_app::state::{PredictionUiModel, UiEvent, transition};
use aquasafe::egui_app::view_model::{StatusVariant, prediction_view};
use aquasafe::logging::{self, ConsoleTarget};
use aquasafe::prediction::{FormFields, PredictionClient, validate_inputs};

const EXIT_SAFE: i32 = 0;
const EXIT_FAILED: i32 = 1;
const EXIT_UNSAFE: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(EXIT_FAILED);
        }
    }
}

fn run() -> Result<i32, String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(EXIT_SAFE);
    };
    if let Err(err) = logging::init(ConsoleTarget::Stderr) {
        eprintln!("Logging disabled: {err}");
    }

    let mut settings = config::load_or_default().map_err(|err| err.to_string())?;
    if let Some(endpoint) = options.endpoint {
        config::validate_endpoint(&endpoint).map_err(|err| err.to_string())?;
        settings.prediction.endpoint = endpoint;
    }
    if options.no_delay {
        settings.prediction.ux_delay_ms = 0;
    }

    let model = PredictionUiModel::default();
    let input = match validate_inputs(&options.fields, &settings.limits) {
        Ok(input) => input,
        Err(error) => {
            let model = transition(model, UiEvent::SubmitRejected(error));
            if let Some(error) = prediction_view(&model).field_error {
                eprintln!("{error}");
            }
            return Ok(EXIT_FAILED);
        }
    };

    let model = transition(model, UiEvent::SubmitAccepted);
    eprintln!("{}", prediction_view(&model).submit_label);
    let client = PredictionClient::new(&settings);
    let event = match client.predict(&input) {
        Ok(response) => UiEvent::RequestSucceeded(response),
        Err(_) => UiEvent::RequestFailed,
    };
    let view = prediction_view(&transition(model, event));

    if let Some(panel) = view.result_panel {
        println!("{} (risk: {})", panel.prediction, panel.risk_level);
        return Ok(match panel.variant {
            StatusVariant::Safe => EXIT_SAFE,
            StatusVariant::Danger => EXIT_UNSAFE,
        });
    }
    if let Some(message) = view.error_banner {
        eprintln!("{message}");
    }
    Ok(EXIT_FAILED)
}

#[derive(Default)]
struct Options {
    fields: FormFields,
    endpoint: Option<String>,
    no_delay: bool,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--criteria" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--criteria requires a value".to_string())?;
                options.fields.criteria = value.to_string();
            }
            "--percentage" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--percentage requires a value".to_string())?;
                options.fields.percentage = value.to_string();
            }
            "--salt-count" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--salt-count requires a value".to_string())?;
                options.fields.salt_count = value.to_string();
            }
            "--endpoint" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--endpoint requires a value".to_string())?;
                options.endpoint = Some(value.to_string());
            }
            "--no-delay" => {
                options.no_delay = true;
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn help_text() -> String {
    [
        "aquasafe-predict",
        "",
        "Request a water-safety prediction from the configured service.",
        "",
        "Usage:",
        "  aquasafe-predict --criteria <text> --percentage <n> --salt-count <n> [options]",
        "",
        "Options:",
        "  --endpoint <url>  Override the prediction endpoint from config.toml.",
        "  --no-delay        Skip the pause before the request is sent.",
        "  -h, --help        Show this help.",
    ]
    .join("\n")
}
