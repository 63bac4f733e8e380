use std::error::Error;

use clap::{Parser, ValueEnum};

use programme_board::source::open_source;
use programme_board::render;
use programme_board::settings;
use programme_board::utils::print_programme;
use programme_board::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Text,
    /// Entry IDs and break markers, for debugging documents
    Debug,
}

/// Renders a conference programme
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path or http(s) URL of the programme document. Defaults to $PROGRAMME_DATA, then data.json
    source: Option<String>,

    /// Only show this day code (e.g. 11)
    #[arg(short, long)]
    day: Option<u32>,

    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let location = args.source.unwrap_or_else(settings::data_location);
    let source = open_source(&location)?;

    let mut page = Page::load(source.as_ref()).await;
    if page.load_state().is_failed() {
        // The page stays usable, it only shows the error notice
        log::warn!("{}", page.load_state());
    }
    page.filter_by_day(args.day);

    match args.format {
        Format::Html => println!("{}", page.render_programme()),
        Format::Text => match page.load_state().programme() {
            Some(programme) => print!("{}", render::programme_text(programme, page.active_day())),
            None => println!("{}", settings::LOAD_ERROR_NOTICE),
        },
        Format::Debug => match page.load_state().programme() {
            Some(programme) => print_programme(programme),
            None => println!("{}", page.load_state()),
        },
    }

    if page.load_state().is_failed() {
        std::process::exit(1);
    }
    Ok(())
}
