mod dates;
mod forms;
mod models;
mod run;
mod store;
mod ui;
mod undo;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Everything lives in memory: each launch starts from the seed data and
    // exit discards whatever was entered.
    let mut store = store::Store::seeded();

    match args.len() {
        1 => run::as_tui(&mut store),
        2.. => run::as_cli(&args, &mut store),
        _ => {
            eprintln!("Usage: wedtui [command]");
            Ok(())
        }
    }
}
