// SPDX-License-Identifier: MPL-2.0
use exif_probe::config::{self, Config, DEFAULT_LOCATOR};
use exif_probe::{report, MetadataExtractor};
use std::path::PathBuf;
use tracing::Level;

const HELP: &str = "\
exif_probe - print file info and selected EXIF tags of one image

USAGE:
  exif_probe [OPTIONS] [LOCATOR]

ARGS:
  LOCATOR              Local path or http(s) URL (defaults to a sample JPEG)

OPTIONS:
  --tags A,B,C         EXIF tags to extract (default: from settings, else DateTime)
  --config PATH        Settings file to use instead of the default location
  --timeout SECS       Abort remote requests after SECS seconds
  -v, --verbose        Print debug diagnostics
  -h, --help           Print this help
";

struct Options {
    locator: Option<String>,
    tags: Option<Vec<String>>,
    config_path: Option<PathBuf>,
    timeout_secs: Option<u64>,
}

fn parse_tags(value: &str) -> Result<Vec<String>, String> {
    let tags: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        Err("--tags needs at least one tag name".to_string())
    } else {
        Ok(tags)
    }
}

fn parse_options(mut args: pico_args::Arguments) -> Result<Options, String> {
    let options = Options {
        tags: args
            .opt_value_from_fn("--tags", parse_tags)
            .map_err(|e| e.to_string())?,
        config_path: args
            .opt_value_from_str("--config")
            .map_err(|e| e.to_string())?,
        timeout_secs: args
            .opt_value_from_str("--timeout")
            .map_err(|e| e.to_string())?,
        locator: args.opt_free_from_str().map_err(|e| e.to_string())?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(format!("Unexpected arguments: {rest:?}"));
    }
    Ok(options)
}

fn load_config(path: Option<&PathBuf>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {err}");
        Config::default()
    })
}

fn main() {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return;
    }
    let verbose = args.contains(["-v", "--verbose"]);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}\n");
            eprint!("{HELP}");
            return;
        }
    };

    let mut config = load_config(options.config_path.as_ref());
    if let Some(timeout) = options.timeout_secs {
        config.timeout_secs = Some(timeout);
    }
    let desired_tags = options.tags.unwrap_or_else(|| config.desired_tags());
    let locator = options
        .locator
        .unwrap_or_else(|| DEFAULT_LOCATOR.to_string());

    let result = match MetadataExtractor::new(&config) {
        Ok(extractor) => extractor.extract(&locator, &desired_tags),
        Err(err) => {
            tracing::error!("Could not start HTTP client: {err}");
            println!("{}", report::NO_DATA_MESSAGE);
            return;
        }
    };

    print!("{}", report::render(&result));
}
