use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use led::{
    app::Editor,
    config::Config,
    model::document::Document,
    services::terminal_modes::TerminalModes,
    services::tracing_setup,
    services::tty::{TtyInput, TtyOutput},
    services::window_size::get_window_size,
    view::render::{clear_screen, clear_screen_on_error},
};
use std::path::PathBuf;

/// A minimal raw-mode terminal text viewer
#[derive(Parser, Debug)]
#[command(name = "led")]
#[command(about = "A minimal terminal text editor", long_about = None)]
#[command(version)]
struct Args {
    /// File to open (read-only). Without it the editor starts empty.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() -> AnyhowResult<()> {
    real_main()
}

fn real_main() -> AnyhowResult<()> {
    let args = Args::parse();
    let config = Config::default();

    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file, &config.log_level);
    tracing::info!("led {} starting", led::VERSION);

    let mut modes = clear_screen_on_error(
        TerminalModes::enable(config.editor.read_timeout_deciseconds),
        &mut TtyOutput::new(),
    )?;

    // Leave a clean screen and a cooked terminal even if the editor panics
    let restore = modes.restore_handle();
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = clear_screen(&mut TtyOutput::new());
        let _ = restore.restore();
        original_hook(panic);
    }));

    let result = clear_screen_on_error(run_session(args.file, config), &mut TtyOutput::new());
    clear_screen_on_error(modes.disable(), &mut TtyOutput::new())?;

    tracing::info!("led exiting");
    result
}

fn run_session(file: Option<PathBuf>, config: Config) -> AnyhowResult<()> {
    let mut input = TtyInput::new();
    let mut output = TtyOutput::new();

    let size = get_window_size(&mut input, &mut output).context("getWindowSize")?;
    let document = match &file {
        Some(path) => Document::open(path)?,
        None => Document::empty(),
    };

    let mut editor = Editor::new(document, size, config);
    editor.run(&mut input, &mut output)
}
