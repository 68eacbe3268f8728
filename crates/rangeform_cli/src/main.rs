//! Demo entry point for the range form core.
//!
//! # Responsibility
//! - Exercise the full parse/validate/bind/persist flow against an
//!   in-memory event store.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::Utc;
use rangeform_core::db::open_db_in_memory;
use rangeform_core::{EventFormData, EventService, SqliteEventRepository};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let conn = match open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open event store: {err}");
            std::process::exit(1);
        }
    };
    let repo = match SqliteEventRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("failed to prepare event store: {err}");
            std::process::exit(1);
        }
    };
    let service = EventService::new(repo);
    let now = Utc::now();

    match args.as_slice() {
        [] => {
            println!("rangeform_core version={}", rangeform_core::core_version());
            println!("new event form default: {}", service.render_new_form(now));
        }
        [title, time_range] => {
            let data = EventFormData {
                title: title.clone(),
                time_range: time_range.clone(),
            };

            let id = match service.create_event(&data, now) {
                Ok(id) => id,
                Err(err) => {
                    eprintln!("event rejected: {err}");
                    std::process::exit(2);
                }
            };

            match service.get_event(id) {
                Ok(Some(event)) => {
                    println!("created event {id}");
                    println!("stored title: {}", event.title);
                    println!("edit value:   {}", service.render_edit_form(&event, now));
                    println!("display:      {}", service.display_range(&event));
                }
                Ok(None) => {
                    eprintln!("created event {id} but could not read it back");
                    std::process::exit(1);
                }
                Err(err) => {
                    eprintln!("failed to read event back: {err}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!(
                "usage: rangeform_cli [TITLE \"MM/DD/YYYY hh:mm AM - MM/DD/YYYY hh:mm PM\"]"
            );
            std::process::exit(2);
        }
    }
}
