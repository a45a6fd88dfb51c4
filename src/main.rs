use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use eventify::application::{export, init, month_view, ConfigService, EventStore, ExportFormat};
use eventify::cli::{format_event_line, format_event_list, format_month, Cli, Commands};
use eventify::domain::{EventCategory, EventDraft, MonthCursor};
use eventify::error::EventifyError;
use eventify::infrastructure::FileSystemRepository;
use std::str::FromStr;
use uuid::Uuid;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), EventifyError> {
    match cli.command {
        Some(Commands::Init { path, category }) => {
            let category = EventCategory::from_str(&category).map_err(EventifyError::Config)?;
            init::init(&path, category)
        }
        Some(Commands::Add {
            date,
            start,
            end,
            title,
            category,
            description,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;

            let category = match category {
                Some(c) => EventCategory::from_str(&c).map_err(EventifyError::Config)?,
                None => config.default_category,
            };

            let draft = EventDraft {
                id: None,
                title,
                category,
                start: start.parse()?,
                end: end.parse()?,
                description,
                date: parse_date(&date)?,
            };

            let store = EventStore::new(repo);
            let event = store.create(draft)?;
            println!("Added event:");
            println!("{}", format_event_line(&event));
            Ok(())
        }
        Some(Commands::Edit {
            id,
            date,
            start,
            end,
            title,
            category,
            description,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EventStore::new(repo);

            // Start from the stored record, apply the requested
            // changes, then replace it wholesale
            let mut event = store.get(parse_id(&id)?)?;
            if let Some(date) = date {
                event.date = parse_date(&date)?;
            }
            if let Some(start) = start {
                event.start = start.parse()?;
            }
            if let Some(end) = end {
                event.end = end.parse()?;
            }
            if let Some(title) = title {
                event.title = title;
            }
            if let Some(category) = category {
                event.category = EventCategory::from_str(&category).map_err(EventifyError::Config)?;
            }
            if let Some(description) = description {
                event.description = description;
            }

            let event = store.update(event)?;
            println!("Updated event:");
            println!("{}", format_event_line(&event));
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EventStore::new(repo);

            let removed = store.delete(parse_id(&id)?)?;
            println!("Deleted event:");
            println!("{}", format_event_line(&removed));
            Ok(())
        }
        Some(Commands::List { date, month, year }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EventStore::new(repo);

            let events = if let Some(date) = date {
                store.list_by_date(parse_date(&date)?)?
            } else if month.is_some() || year.is_some() {
                store.list_by_month(resolve_cursor(month, year)?)?
            } else {
                let mut events = store.list()?;
                events.sort_by_key(|e| (e.date, e.start));
                events
            };

            println!("{}", format_event_list(&events).trim_end());
            Ok(())
        }
        Some(Commands::Month {
            month,
            year,
            prev,
            next,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let store = EventStore::new(repo);

            let mut cursor = resolve_cursor(month, year)?;
            for _ in 0..prev {
                cursor = cursor.prev();
            }
            for _ in 0..next {
                cursor = cursor.next();
            }

            let view = month_view(&store, cursor)?;
            print!("{}", format_month(&view));
            if !view.events.is_empty() {
                println!();
                println!("{}", format_event_list(&view.events).trim_end());
            }
            Ok(())
        }
        Some(Commands::Export {
            format,
            month,
            year,
            out,
        }) => {
            let format = ExportFormat::from_str(&format)?;
            let cursor = resolve_cursor(month, year)?;

            let repo = FileSystemRepository::discover()?;
            let store = EventStore::new(repo);

            let (path, count) = export::export(&store, cursor, format, out.as_deref())?;
            println!("Exported {} events to {}", count, path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: eventify config [--list | <key> [<value>]]");
                println!("Valid keys: category, created");
                Ok(())
            }
        }
        None => {
            println!("eventify - Terminal calendar event manager");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, EventifyError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| EventifyError::Config(format!("Invalid date: '{}'", s)))
}

fn parse_id(s: &str) -> Result<Uuid, EventifyError> {
    Uuid::parse_str(s).map_err(|_| EventifyError::EventNotFound(s.to_string()))
}

/// Resolve optional 1-based month/year flags to a cursor, defaulting
/// to the current month
fn resolve_cursor(month: Option<u32>, year: Option<i32>) -> Result<MonthCursor, EventifyError> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    if !(1..=12).contains(&month) {
        return Err(EventifyError::Config(format!(
            "Invalid month: {} (expected 1-12)",
            month
        )));
    }

    MonthCursor::new(year, month - 1).ok_or_else(|| {
        EventifyError::Config(format!("Invalid month/year: {}/{}", month, year))
    })
}
