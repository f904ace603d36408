use clap::Parser;
use directories::ProjectDirs;
use shelf::error::{Result, ShelfError};
use shelf::library::Library;
use shelf::model::{BookStatus, SearchField};
use shelf::store::fs::JsonFileStore;
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = JsonFileStore::new(catalog_path(&cli)?);
    let mut library = Library::open(store)?;

    for warning in library.warnings() {
        print::warning(warning);
    }

    match cli.command {
        Commands::Add {
            title,
            author,
            year,
        } => handle_add(&mut library, title, author, year),
        Commands::Remove { id } => handle_remove(&mut library, &id),
        Commands::Find { field, value } => handle_find(&library, &field, &value),
        Commands::List => handle_list(&library),
        Commands::Status { id, status } => handle_status(&mut library, &id, &status),
    }
}

fn catalog_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(path.clone());
    }
    let dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Store("Could not determine the user data directory".into()))?;
    Ok(dirs.data_dir().join("library.json"))
}

fn handle_add(
    library: &mut Library<JsonFileStore>,
    title: String,
    author: String,
    year: i32,
) -> Result<()> {
    let book = library.add_book(title, author, year)?;
    print::success(&format!(
        "Added \"{}\" by {} ({}) with id {}",
        book.title, book.author, book.year, book.id
    ));
    Ok(())
}

fn handle_remove(library: &mut Library<JsonFileStore>, id: &str) -> Result<()> {
    let Some(id) = parse_id(id) else {
        return Ok(());
    };
    match library.remove_book(&id)? {
        Some(book) => print::success(&format!("Removed \"{}\" ({})", book.title, book.id)),
        None => print::warning(&format!("No book with id {}", id)),
    }
    Ok(())
}

fn handle_find(library: &Library<JsonFileStore>, field: &str, value: &str) -> Result<()> {
    let field: SearchField = match field.parse() {
        Ok(field) => field,
        Err(err) => {
            // Recoverable user error: report it, show nothing.
            print::error(&err.to_string());
            return Ok(());
        }
    };
    let matches = library.search(field, value);
    if matches.is_empty() {
        print::info("Nothing found.");
    } else {
        print::print_books(matches);
    }
    Ok(())
}

fn handle_list(library: &Library<JsonFileStore>) -> Result<()> {
    if library.books().is_empty() {
        print::info("The catalog is empty.");
    } else {
        print::print_books(library.books());
    }
    Ok(())
}

fn handle_status(library: &mut Library<JsonFileStore>, id: &str, status: &str) -> Result<()> {
    let new_status: BookStatus = match status.parse() {
        Ok(status) => status,
        Err(err) => {
            print::error(&err.to_string());
            return Ok(());
        }
    };
    let Some(id) = parse_id(id) else {
        return Ok(());
    };
    match library.update_status(&id, new_status)? {
        Some(book) => print::success(&format!("\"{}\" is now {}", book.title, book.status)),
        None => print::warning(&format!("No book with id {}", id)),
    }
    Ok(())
}

fn parse_id(raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) => Some(id),
        Err(_) => {
            print::error(&format!("Invalid book id '{}'", raw));
            None
        }
    }
}
