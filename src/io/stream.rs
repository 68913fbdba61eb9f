// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Remote stream URL resolution.
//!
//! Video pages (YouTube and friends) are resolved to a direct media URL by
//! running `yt-dlp` once, before playback starts.

use anyhow::{bail, Context, Result};
use std::process::Command;

/// Default format selector: best single-file stream up to 720p.
pub const DEFAULT_FORMAT: &str = "best[height<=720]";

/// A playable stream and the title of the page it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStream {
    pub url: String,
    pub title: String,
}

/// Runs an external extractor to turn a page URL into a stream URL.
#[derive(Debug, Clone)]
pub struct Resolver {
    program: String,
    format: String,
}

impl Resolver {
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Resolve `page_url` without downloading anything.
    pub fn resolve(&self, page_url: &str) -> Result<ResolvedStream> {
        log::info!("Resolving stream for {} with {}", page_url, self.program);

        let output = Command::new(&self.program)
            .args(["--quiet", "--no-warnings", "--no-playlist", "-f"])
            .arg(&self.format)
            .args(["--print", "title", "--print", "urls"])
            .arg(page_url)
            .output()
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_output(&stdout).with_context(|| format!("Unexpected output from {}", self.program))
    }
}

/// Parse `--print title --print urls` output: the title line followed by
/// one URL per requested format. Only the first URL is used.
fn parse_output(stdout: &str) -> Result<ResolvedStream> {
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(title) = lines.next() else {
        bail!("no title printed");
    };
    let Some(url) = lines.next() else {
        bail!("no stream URL printed");
    };
    if !url.contains("://") {
        bail!("not a URL: {}", url);
    }

    Ok(ResolvedStream {
        url: url.to_string(),
        title: title.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_url() {
        let out = "Town Square Live Cam\nhttps://rr1.example.com/videoplayback?id=1\n";
        let stream = parse_output(out).unwrap();
        assert_eq!(stream.title, "Town Square Live Cam");
        assert_eq!(stream.url, "https://rr1.example.com/videoplayback?id=1");
    }

    #[test]
    fn test_parse_takes_first_of_split_formats() {
        let out = "Clip\n\nhttps://a.example/video\nhttps://a.example/audio\n";
        assert_eq!(parse_output(out).unwrap().url, "https://a.example/video");
    }

    #[test]
    fn test_parse_rejects_missing_url() {
        assert!(parse_output("Only a title\n").is_err());
        assert!(parse_output("").is_err());
        assert!(parse_output("Title\nnot-a-url\n").is_err());
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let resolver = Resolver::new("zonemark-no-such-extractor", DEFAULT_FORMAT);
        assert!(resolver.resolve("https://example.com/watch?v=1").is_err());
    }
}
