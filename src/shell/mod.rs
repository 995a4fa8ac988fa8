//! Interactive terminal form
//!
//! A line-oriented stand-in for the article/file form: the operator picks a
//! topic, sort mode and page, triggers the article fetch, and fetches file
//! links for any page URL. Each line runs at most one action and blocks
//! until it completes.

pub mod command;
pub mod render;

pub use command::{COMMANDS, Command, parse_command};

use anyhow::Result;
use log::debug;
use std::io::Write;
use std::ops::ControlFlow;
use termcolor::{ColorChoice, StandardStream, WriteColor};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::actions::{self, NoticeLevel};
use crate::catalog::{ListingQuery, SortMode};
use crate::pipeline::LinkScraper;
use crate::session::ArticleSession;

/// Form selection plus the session's stored article links
#[derive(Debug, Clone)]
pub struct ShellState {
    pub query: ListingQuery,
    pub session: ArticleSession,
}

impl ShellState {
    /// Start on page 1 of the `All` listing for the first configured topic
    #[must_use]
    pub fn new(scraper: &LinkScraper) -> Self {
        let topic = scraper
            .config()
            .topics()
            .first()
            .cloned()
            .unwrap_or_default();
        Self {
            query: ListingQuery::new(topic),
            session: ArticleSession::new(),
        }
    }
}

/// Read commands from stdin until `quit` or end of input
///
/// # Errors
///
/// Returns an error only when stdin or stdout fail.
pub async fn run(scraper: &LinkScraper) -> Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);
    let mut state = ShellState::new(scraper);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    render::banner(&mut out)?;

    loop {
        render::prompt(&mut out, &state.query)?;
        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                render::notice(&mut out, NoticeLevel::Error, &message)?;
                continue;
            }
        };

        if execute(scraper, &mut state, command, &mut out).await?.is_break() {
            break;
        }
    }

    Ok(())
}

/// Apply one command to `state`, writing any output to `out`
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub async fn execute<W: WriteColor>(
    scraper: &LinkScraper,
    state: &mut ShellState,
    command: Command,
    out: &mut W,
) -> Result<ControlFlow<()>> {
    debug!(target: "linkharvest::shell", "{command:?}");

    match command {
        Command::Empty => {}
        Command::Help => render::help(out)?,
        Command::Quit => return Ok(ControlFlow::Break(())),
        Command::Topics => {
            render::list(out, "Featured topics", scraper.config().topics())?;
            let modes: Vec<String> = SortMode::ALL_MODES.iter().map(ToString::to_string).collect();
            render::list(out, "Sort modes", &modes)?;
        }
        Command::Topic(topic) => state.query.topic = topic,
        Command::Sort(sort) => state.query.sort = sort,
        Command::Page(page) => state.query.page = page,
        Command::Articles => {
            let report =
                actions::run_article_action(scraper, &state.query, &mut state.session).await;
            render::notice(out, report.level, &report.message)?;
            show_articles(scraper, state, out)?;
        }
        Command::Show => {
            if state.session.is_empty() {
                render::notice(out, NoticeLevel::Warning, "No article links fetched yet.")?;
            } else {
                show_articles(scraper, state, out)?;
            }
        }
        Command::Files(url) => {
            if !url.trim().is_empty() {
                writeln!(out, "Fetching file links...")?;
            }
            let report = actions::run_file_action(scraper, &url).await;
            render::report(out, &report)?;
        }
        Command::Config => {
            let json = serde_json::to_string_pretty(scraper.config())?;
            writeln!(out, "{json}")?;
        }
    }

    Ok(ControlFlow::Continue(()))
}

fn show_articles<W: WriteColor>(
    scraper: &LinkScraper,
    state: &ShellState,
    out: &mut W,
) -> Result<()> {
    let links = actions::display_links(&state.session, scraper);
    render::links(out, &links)?;
    Ok(())
}
