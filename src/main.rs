use clap::{Parser, ValueEnum};
use flightwindow::error::SearchError;
use flightwindow::query::{SearchQuery, parse_window};
use flightwindow::render;
use flightwindow::search::{Event, SearchState, SortKey};
use flightwindow::source::{FlightSource, Mode};
use flightwindow::window::TimeWindow;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file with mock flights
    #[arg(short, long, value_name = "FILE", env = "FLIGHTWINDOW_SCENARIO", default_value = "data/flights.json")]
    scenario: PathBuf,

    /// Where flights come from
    #[arg(short, long, value_enum, env = "FLIGHTWINDOW_MODE", default_value_t = Mode::Mock)]
    mode: Mode,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn paginate(content: &str) {
    let pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match pager {
        Ok(pager) => pager,
        Err(e) => {
            warn!(error = %e, "no pager available");
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show(state: &SearchState) {
    if let Some(error) = &state.error {
        println!("Search failed: {}", error);
        return;
    }
    let visible = state.visible();
    println!("{}", render::status(state, visible.len()));
    if visible.is_empty() {
        println!("No matching flights found.");
    } else if visible.len() > 20 {
        paginate(&render::table(&visible));
    } else {
        println!("{}", render::table(&visible));
    }
}

fn window_event(parts: &[&str], make: fn(TimeWindow) -> Event) -> Result<Event, SearchError> {
    let start = parts.get(1).copied().unwrap_or("");
    let end = parts.get(2).copied().unwrap_or("");
    Ok(make(parse_window(start, end)?))
}

fn run_search(source: &dyn FlightSource, parts: &[&str]) -> Option<Event> {
    let (Some(origin), Some(destination)) = (parts.get(1), parts.get(2)) else {
        println!("Usage: search <from> <to> [YYYY-MM-DD]");
        return None;
    };
    let today = chrono::Local::now().date_naive();
    let date = parts
        .get(3)
        .map(|d| d.to_string())
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let result = SearchQuery::parse(origin, destination, &date, today)
        .and_then(|query| source.search(&query).map(|offers| (query, offers)));
    Some(match result {
        Ok((query, offers)) => Event::Searched { query, offers },
        Err(e) => {
            warn!(error = %e, "search rejected");
            Event::SearchFailed(e.to_string())
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_level);

    let source = args.mode.open(&args.scenario)?;
    match args.mode {
        Mode::Mock => println!("Ready. Loaded mock flights from {}", args.scenario.display()),
        Mode::Live => println!("Ready. Live mode: searches will report that no API is configured"),
    }

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["search", "dep", "arr", "stops", "sort", "clear", "ls", "json", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    let mut state = SearchState::default();

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                let event = match parts[0] {
                    "search" => run_search(source.as_ref(), &parts),
                    "dep" | "arr" => {
                        let make: fn(TimeWindow) -> Event = if parts[0] == "dep" {
                            Event::DepartureWindow
                        } else {
                            Event::ArrivalWindow
                        };
                        match window_event(&parts, make) {
                            Ok(event) => Some(event),
                            Err(e) => {
                                println!("{}. Usage: {} <HH:MM> <HH:MM>, or {} alone to clear", e, parts[0], parts[0]);
                                None
                            }
                        }
                    },
                    "stops" => match parts.get(1).copied() {
                        None | Some("any") => Some(Event::MaxStops(None)),
                        Some(n) => match n.parse::<usize>() {
                            Ok(n) => Some(Event::MaxStops(Some(n))),
                            Err(_) => {
                                println!("Usage: stops <n|any>");
                                None
                            }
                        },
                    },
                    "sort" => match parts.get(1).map(|k| SortKey::from_str(k, true)) {
                        Some(Ok(key)) => Some(Event::Sort(key)),
                        _ => {
                            println!("Usage: sort <price|duration|departure|arrival>");
                            None
                        }
                    },
                    "clear" => Some(Event::ClearFilters),
                    "ls" => {
                        show(&state);
                        None
                    },
                    "json" => {
                        println!("{}", serde_json::to_string_pretty(&state.visible())?);
                        None
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  search <from> <to> [date] - Search flights, date as YYYY-MM-DD (default today)");
                        println!("  dep <HH:MM> <HH:MM>       - Departure window, may wrap midnight (22:00 06:00); 'dep' alone clears");
                        println!("  arr <HH:MM> <HH:MM>       - Arrival window by clock time, whatever day the flight lands");
                        println!("  stops <n|any>             - Limit the number of stops");
                        println!("  sort <key>                - Sort by price, duration, departure or arrival");
                        println!("  clear                     - Remove all filters");
                        println!("  ls                        - Show matching flights");
                        println!("  json                      - Print matching flights as JSON");
                        println!("  help / ?                  - Show this help menu");
                        println!("  exit / quit               - Exit\n");
                        None
                    },
                    "exit" | "quit" => break,
                    _ => {
                        println!("Unknown command: {}", parts[0]);
                        None
                    },
                };

                if let Some(event) = event {
                    let refresh = matches!(event, Event::Searched { .. } | Event::SearchFailed(_));
                    state = state.apply(event);
                    if refresh {
                        show(&state);
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
