use colored::Colorize;
use shelf::model::{Book, BookStatus};

pub(crate) fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub(crate) fn success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn warning(message: &str) {
    eprintln!("{}", message.yellow());
}

pub(crate) fn error(message: &str) {
    eprintln!("{}", message.red());
}

pub(crate) fn print_books<'a>(books: impl IntoIterator<Item = &'a Book>) {
    for book in books {
        let status = match book.status {
            BookStatus::Available => book.status.to_string().green(),
            BookStatus::CheckedOut => book.status.to_string().yellow(),
        };
        println!(
            "{}  {} by {} ({})  [{}]",
            book.id.to_string().dimmed(),
            book.title.bold(),
            book.author,
            book.year,
            status
        );
    }
}
