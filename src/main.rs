// SPDX-License-Identifier: MPL-2.0
use iced_stories::app::{self, paths, Flags};
use iced_stories::media::{self, Asset};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: iced_stories [OPTIONS] [URI ...]

Options:
  --lang LOCALE       Interface language (e.g. en-US, fr)
  --config-dir DIR    Read settings.toml from DIR
  --manifest FILE     Load slides from a TOML manifest of [[asset]] tables
  --exit-on-finish    Quit after the last slide completes
  -h, --help          Print this help
";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_stories=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(message) => {
            eprintln!("{message}");
            eprint!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Application error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, String> {
    let lang: Option<String> = args.opt_value_from_str("--lang").map_err(|e| e.to_string())?;
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let manifest: Option<PathBuf> = args
        .opt_value_from_str("--manifest")
        .map_err(|e| e.to_string())?;
    let exit_on_finish = args.contains("--exit-on-finish");

    paths::init_cli_override(config_dir);

    let mut assets = match manifest {
        Some(path) => media::load_manifest(&path)
            .map_err(|e| format!("Cannot load manifest {}: {}", path.display(), e))?,
        None => Vec::new(),
    };
    for uri in args.finish() {
        let uri = uri
            .into_string()
            .map_err(|raw| format!("URI is not valid UTF-8: {}", raw.to_string_lossy()))?;
        assets.push(Asset::image(uri));
    }

    Ok(Flags {
        lang,
        assets,
        exit_on_finish,
    })
}
