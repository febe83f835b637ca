//! Domain list input.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::models::normalize_domain;

/// Collects the domains to check from the command line and the input file.
///
/// Command-line domains come first, then file lines in order. A file path of
/// `-` reads from stdin. Names that normalize to the same domain (case, one
/// trailing dot) are kept once, first spelling wins.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened.
pub async fn read_domains(config: &Config) -> Result<Vec<String>> {
    let mut lines: Vec<String> = config.domains.clone();

    match config.file.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            log::info!("Reading domains from stdin");
            lines.extend(read_lines(BufReader::new(tokio::io::stdin())).await);
        }
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            lines.extend(read_lines(BufReader::new(file)).await);
        }
        None => {}
    }

    let mut seen = HashSet::new();
    let domains: Vec<String> = lines
        .iter()
        .filter_map(|line| domain_from_line(line))
        .filter(|domain| seen.insert(dedup_key(domain)))
        .collect();
    log::info!("{} domain(s) to check", domains.len());
    Ok(domains)
}

// Same key for every spelling that normalizes to one name; invalid names
// fall back to lowercase and are rejected later
fn dedup_key(domain: &str) -> String {
    normalize_domain(domain).unwrap_or_else(|_| domain.trim().to_ascii_lowercase())
}

async fn read_lines<R: AsyncBufRead + Unpin>(reader: R) -> Vec<String> {
    let mut lines = reader.lines();
    let mut collected = Vec::new();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => collected.push(line),
            Ok(None) => break,
            Err(e) => {
                // Unreadable line (e.g. invalid UTF-8) ends the input
                log::warn!("Failed to read line from input: {e}");
                break;
            }
        }
    }
    collected
}

/// Extracts a domain from one input line.
///
/// Blank lines and `#` comments give `None`. A pasted URL is reduced to its
/// host: scheme, userinfo, port, path, query and fragment are stripped.
pub fn domain_from_line(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let without_scheme = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest);
    let authority = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default().trim();

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
