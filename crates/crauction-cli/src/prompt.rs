use std::io::{self, BufRead, Write};

use anyhow::Context;

const URL_PROMPT: &str =
    "Please enter a valid auction URL (e.g., https://bids.crauctions.com/auctions/123): ";

/// Returns `url`, or asks for one on stdin when it was not given.
pub(crate) fn url_or_prompt(url: Option<String>) -> anyhow::Result<String> {
    match url {
        Some(url) => Ok(url),
        None => read_url(&mut io::stdin().lock(), &mut io::stdout()),
    }
}

fn read_url(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<String> {
    write!(output, "{URL_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read auction URL from stdin")?;
    if read == 0 {
        anyhow::bail!("no auction URL given");
    }
    Ok(line.trim().to_owned())
}
