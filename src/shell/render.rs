//! Coloured terminal output for the shell

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::actions::{ActionReport, NoticeLevel};
use crate::catalog::ListingQuery;

use super::command::COMMANDS;

pub fn banner<W: WriteColor>(out: &mut W) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(out, "\nPDF Link Fetcher From Articles\n")?;
    out.reset()?;
    writeln!(out, "Type 'help' for commands.")?;
    Ok(())
}

pub fn help<W: WriteColor>(out: &mut W) -> io::Result<()> {
    for (command, description) in COMMANDS {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "  {command:<16}")?;
        out.reset()?;
        writeln!(out, " {description}")?;
    }
    Ok(())
}

pub fn prompt<W: WriteColor>(out: &mut W, query: &ListingQuery) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    write!(
        out,
        "[{} | {} | page {}]> ",
        if query.topic.is_empty() { "-" } else { query.topic.as_str() },
        query.sort,
        query.page
    )?;
    out.reset()?;
    out.flush()
}

pub fn notice<W: WriteColor>(out: &mut W, level: NoticeLevel, message: &str) -> io::Result<()> {
    let color = match level {
        NoticeLevel::Success => Color::Green,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    writeln!(out, "{message}")?;
    out.reset()
}

pub fn links<W: WriteColor>(out: &mut W, links: &[String]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
    for link in links {
        writeln!(out, "  {link}")?;
    }
    out.reset()
}

pub fn report<W: WriteColor>(out: &mut W, report: &ActionReport) -> io::Result<()> {
    notice(out, report.level, &report.message)?;
    links(out, &report.links)
}

pub fn list<W: WriteColor>(out: &mut W, title: &str, items: &[String]) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    writeln!(out, "{title}")?;
    out.reset()?;
    for item in items {
        writeln!(out, "  {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::Buffer;

    #[test]
    fn report_prints_message_then_links() {
        let mut buffer = Buffer::no_color();
        let report = ActionReport::success(
            "Files fetched successfully!",
            vec!["https://example.com/a.pdf".to_string()],
        );

        super::report(&mut buffer, &report).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(
            text,
            "Files fetched successfully!\n  https://example.com/a.pdf\n"
        );
    }
}
