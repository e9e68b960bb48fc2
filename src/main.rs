use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ratatui::DefaultTerminal;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use urlbar_suggest::app::App;
use urlbar_suggest::config::{Config, load_config};
use urlbar_suggest::session::{demo_session, load_session};
use urlbar_suggest::suggestions::Activation;
use urlbar_suggest::urlbar::UrlBarSuggestions;
use urlbar_suggest::window::WindowState;

/// Address-bar autocomplete over open tabs, bookmarks, history and search
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file (default: ~/.config/urlbar/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Session JSON with frames, active_frame and sites (default: built-in demo)
    #[arg(long, value_name = "PATH")]
    session: Option<PathBuf>,

    /// Print the suggestions for TEXT and exit instead of starting the UI
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// With --query, wait for the remote lookup before printing
    #[arg(long, requires = "query")]
    wait_remote: bool,

    /// Disable remote search suggestions
    #[arg(long)]
    no_remote: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_logging();

    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.config;
    if args.no_remote {
        config.suggestions.search = false;
    }

    let session = match &args.session {
        Some(path) => load_session(path)
            .wrap_err_with(|| format!("Failed to load session {}", path.display()))?,
        None => demo_session(),
    };
    let window = session.into_window();

    let urlbar = if config.suggestions.search {
        UrlBarSuggestions::with_remote_worker(&config)
    } else {
        UrlBarSuggestions::new(&config)
    };

    if let Some(query) = &args.query {
        if let Some(warning) = &loaded.warning {
            eprintln!("Warning: {}", warning);
        }
        return print_suggestions(window, urlbar, &config, query, args.wait_remote);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let mut app = App::new(window, urlbar);
    app.notice = loaded.warning;
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Non-interactive mode: one tab-separated line per suggestion
fn print_suggestions(
    mut window: WindowState,
    mut urlbar: UrlBarSuggestions,
    config: &Config,
    query: &str,
    wait_remote: bool,
) -> Result<()> {
    window.set_location(query);
    let mut actions = Vec::new();
    urlbar.on_location_changed(
        query,
        None,
        &window.context(),
        window.selection(),
        &mut actions,
    );
    window.apply_all(actions);

    if wait_remote && urlbar.is_fetch_pending() {
        let budget = Duration::from_millis(config.remote.debounce_ms + config.remote.timeout_ms)
            + Duration::from_millis(500);
        let deadline = Instant::now() + budget;

        while Instant::now() < deadline {
            let mut actions = Vec::new();
            urlbar.tick(Instant::now(), window.selection(), &mut actions);
            urlbar.poll_remote(&window.context(), window.selection(), &mut actions);
            window.apply_all(actions);

            if !urlbar.is_fetch_pending() && !urlbar.remote().has_in_flight_request() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    let mut out = io::stdout().lock();
    for suggestion in window.selection().list().unwrap_or_default() {
        let target = match &suggestion.activation {
            Activation::SwitchToFrame { key } => format!("tab:{}", key),
            Activation::Navigate { location, .. } => location.clone(),
        };
        writeln!(
            out,
            "{}\t{}\t{}",
            suggestion.icon_class, suggestion.title, target
        )?;
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::OpenOptions;

    // The TUI owns stdout, so debug logs go to a file
    let path = std::env::temp_dir().join("urlbar-debug.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("urlbar_suggest=debug"),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .try_init();
}
