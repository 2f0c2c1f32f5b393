use std::fs;
use std::io::Write;
use std::path::PathBuf;

use doping_scatter::data::{DataSource, StaticDataSource};
use doping_scatter::render::SvgRenderer;
use doping_scatter::{ScatterPlot, ScatterPlotConfig, telemetry};

#[derive(Debug)]
struct CliArgs {
    input: Option<PathBuf>,
    url: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterPlotConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterPlotConfig::default(),
    };
    if let Some(url) = &args.url {
        config = config.with_dataset_url(url.clone());
    }

    let source = resolve_source(&args, &config)?;
    let mut plot =
        ScatterPlot::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    // A failed load still renders the empty chart; the error is reported after.
    let load_result = plot.load_blocking(source.as_ref());
    plot.render().map_err(|err| err.to_string())?;

    let document = plot.into_renderer().into_document();
    match &args.output {
        Some(path) => fs::write(path, &document)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => std::io::stdout()
            .write_all(document.as_bytes())
            .map_err(|err| format!("failed to write stdout: {err}"))?,
    }

    load_result.map_err(|err| format!("rendered without data: {err}"))
}

fn resolve_source(
    args: &CliArgs,
    config: &ScatterPlotConfig,
) -> Result<Box<dyn DataSource>, String> {
    if let Some(path) = &args.input {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
        return Ok(Box::new(StaticDataSource::from_json(raw)));
    }

    #[cfg(feature = "remote-data")]
    {
        return Ok(Box::new(doping_scatter::data::HttpDataSource::new(
            config.dataset_url.clone(),
        )));
    }

    #[cfg(not(feature = "remote-data"))]
    {
        let _ = config;
        Err("no --input given and the `remote-data` feature is disabled".to_owned())
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut input = None;
    let mut url = None;
    let mut config = None;
    let mut output = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --url".to_owned())?;
                url = Some(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" | "-o" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!(
                    "Usage: scatter-plot-svg [--input <records.json> | --url <url>] [--config <config.json>] [--output <plot.svg>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        input,
        url,
        config,
        output,
    })
}
