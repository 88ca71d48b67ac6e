use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tictactoe::build_info;
use tictactoe::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use tictactoe::input::{handle_game_input, InputResult};
use tictactoe::tictactoe::process_ai_thinking;
use tictactoe::ui::draw_ui;
use tictactoe::utils::{logging, persistence};
use tictactoe::{Config, Difficulty, Scoreboard, TicTacToeGame};

/// Command-line overrides for the stored config.
#[derive(Debug, Default)]
struct CliArgs {
    difficulty: Option<Difficulty>,
    think_ms: Option<u64>,
}

fn print_help() {
    println!("Tic-Tac-Toe - play against the computer in your terminal\n");
    println!("Usage: tictactoe [options]\n");
    println!("Options:");
    println!("  --difficulty <easy|medium|hard>  Starting difficulty");
    println!("  --think-ms <n>                   Opponent thinking delay in milliseconds");
    println!("  --version                        Show version information");
    println!("  --help                           Show this help message");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'tictactoe --help' for usage.");
    std::process::exit(1);
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--difficulty" | "-d" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--difficulty needs a value");
                };
                match value.parse::<Difficulty>() {
                    Ok(difficulty) => cli.difficulty = Some(difficulty),
                    Err(e) => fail(&e),
                }
                i += 1;
            }
            "--think-ms" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--think-ms needs a value");
                };
                match value.parse::<u64>() {
                    Ok(ms) => cli.think_ms = Some(ms),
                    Err(_) => fail(&format!("Invalid --think-ms value: {}", value)),
                }
                i += 1;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    cli
}

fn save_all(dir: &Path, config: &mut Config, game: &TicTacToeGame) -> io::Result<()> {
    // Remember the last difficulty picked in-game
    config.difficulty = game.difficulty;
    config.save(dir)?;
    game.score.save(dir)
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    let data_dir = persistence::data_dir()?;
    let mut config = Config::load(&data_dir);

    if let Err(e) = logging::init(&data_dir, &config.log_filter) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    // CLI difficulty is remembered like an in-game pick; the delay is per-session
    let difficulty = cli.difficulty.unwrap_or(config.difficulty);
    let mut session_config = config.clone();
    if let Some(ms) = cli.think_ms {
        session_config.think_delay_ms = ms;
    }

    let mut game = TicTacToeGame::new(difficulty, session_config.think_ticks());
    game.score = Scoreboard::load(&data_dir);
    tracing::info!(
        difficulty = %difficulty,
        think_ticks = game.think_ticks,
        version = build_info::VERSION,
        "starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();
    let mut games_recorded = game.score.total();

    loop {
        terminal.draw(|frame| draw_ui(frame, &game))?;

        // Poll for input (non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match handle_game_input(key_event, &mut game) {
                    InputResult::Quit => break,
                    InputResult::NeedsSave => {
                        game.score.save(&data_dir)?;
                        games_recorded = game.score.total();
                    }
                    InputResult::Continue => {}
                }
            }
        }

        // Game tick every 100ms drives the opponent's thinking delay
        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            process_ai_thinking(&mut game, &mut rng);
            last_tick = Instant::now();
        }

        // Persist the tally as soon as a game is counted
        if game.score.total() != games_recorded {
            game.score.save(&data_dir)?;
            games_recorded = game.score.total();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    save_all(&data_dir, &mut config, &game)?;
    tracing::info!(
        wins = game.score.wins,
        losses = game.score.losses,
        draws = game.score.draws,
        "quit"
    );

    println!("Goodbye!");

    Ok(())
}
