mod paths;

use std::fs::File;
use std::io;

use country_picker::session::{Flow, Session};
use country_picker::{DropdownConfig, DropdownError, catalog, markup};
use pagedom::{Rect, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> io::Result<()> {
    paths::rotate_logs();
    let log_file = File::create(paths::log_file())?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file).map_err(io::Error::other)?;

    let countries = catalog::countries();
    let Some(initial) = catalog::find_by_iso("US").or(countries.first()) else {
        return Err(io::Error::other("country catalog is empty"));
    };

    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut session = Session::new(
        markup::page(countries, initial),
        &DropdownConfig::default(),
        Rect::from_size(width, height),
    )
    .map_err(fail)?;

    let result = run(&mut term, &mut session);

    // Restore the screen before reporting.
    drop(term);
    if let Some(selection) = session.finish() {
        println!("Selected {} ({})", selection.code, selection.icon);
    }
    result
}

fn run(term: &mut Terminal, session: &mut Session) -> io::Result<()> {
    loop {
        term.render(session.document())?;

        for raw in term.poll(None)? {
            if session.handle(&raw).map_err(fail)? == Flow::Quit {
                return Ok(());
            }
        }
    }
}

/// Log a dropdown error and turn it into the process error.
fn fail(err: DropdownError) -> io::Error {
    log::error!("{}", err);
    io::Error::other(err)
}
