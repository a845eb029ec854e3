use std::io::{self, Write};
use std::sync::Arc;

use anyhow::Result;
use log::debug;

use idlc::config::{Config, Verbosity};
use idlc::domain::ports::{CompileEventSink, NoopEventSink};
use idlc::infrastructure::JsonEventSink;
use idlc::presentation::output::{
    exit_code_for, CompileResultRenderer, JsonRenderer, OutputFormat, TextRenderer,
};
use idlc::presentation::{factory, Cli};

/// Compile the source named on the command line and return the exit status.
pub fn cmd_compile(cli: &Cli, program_name: &str) -> Result<i32> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) =
        Config::load_or_default(Some(project_root.as_path()), cli.config.as_deref())?;

    let verbosity = config.output.verbosity.raised_by(cli.verbose);
    init_logging(verbosity);

    for warning in &warnings {
        eprintln!("{program_name}: warning: {warning}");
    }

    let format = OutputFormat::from_flag(cli.json || config.output.json);
    let events: Arc<dyn CompileEventSink> = match format {
        OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
        OutputFormat::Text => Arc::new(NoopEventSink),
    };

    let options = cli.compile_options(&config, program_name);
    let mut driver = factory::create_compilation_driver(options, events)?;
    debug!("compile options: {:?}", driver.options());

    let result = driver.compile(&cli.source());
    let diagnostics = driver.parser().diagnostics();

    match format {
        OutputFormat::Json => {
            let mut out = io::stdout().lock();
            JsonRenderer.render(&result, diagnostics, &mut out)?;
            out.flush()?;
        }
        OutputFormat::Text => {
            let renderer = TextRenderer::new(program_name).with_verbose(cli.verbose);
            let mut err = io::stderr().lock();
            renderer.render(&result, diagnostics, &mut err)?;
        }
    }

    Ok(exit_code_for(&result))
}

/// `RUST_LOG` overrides the level picked from `-v` and the config.
fn init_logging(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
