//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `inscribe_core` linkage and environment configuration.
//! - Replay a short scripted session and print the projected views.

use inscribe_core::{
    Collection, CoreConfig, DateOrder, Label, Note, NotesStore, Priority, Snapshot, SortSelection,
    Tag,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("inscribe_core ping={}", inscribe_core::ping());
    println!("inscribe_core version={}", inscribe_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    match config.init_logging() {
        Ok(true) => println!("logging level={}", config.log_level),
        Ok(false) => println!("logging disabled"),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    let mut store = NotesStore::new();
    store.init(demo_snapshot());
    if let Err(err) = replay_demo(&mut store) {
        eprintln!("demo session failed: {err}");
        return ExitCode::FAILURE;
    }

    for collection in Collection::ALL {
        let titles: Vec<&str> = store
            .visible(collection)
            .iter()
            .map(|note| note.title.as_str())
            .collect();
        println!("{collection}: {titles:?}");
    }
    log::info!("event=cli_demo module=cli status=ok");
    ExitCode::SUCCESS
}

fn demo_snapshot() -> Snapshot {
    let work = Label::new("work");
    let tagged = |title: &str, priority: Priority, updated_at: i64| {
        Note::new(title, "")
            .with_priority(priority)
            .with_tags([Tag::from(&work)])
            .with_updated_at(updated_at)
    };
    Snapshot {
        notes: vec![
            tagged("Standup meeting", Priority::Medium, 3),
            tagged("Quarterly plan", Priority::High, 2),
            Note::new("Groceries", "milk, eggs").with_updated_at(1),
        ],
        labels: vec![work],
        ..Snapshot::default()
    }
}

fn replay_demo(store: &mut NotesStore) -> Result<(), inscribe_core::StoreError> {
    let groceries = store
        .state()
        .notes()
        .iter()
        .find(|note| note.title == "Groceries")
        .map(|note| note.id);
    if let Some(id) = groceries {
        store.archive(id)?;
    }
    store.set_sort(SortSelection::ByDate(DateOrder::NewestFirst));
    Ok(())
}
