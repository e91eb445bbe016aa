//! SDK version extraction and formatting
//!
//! An SDK checkout stores its version as a packed 32-bit integer in
//! `version.txt`: four 8-bit components, most-significant byte first.

use std::fs;
use std::path::Path;

use psdk_git::{self as git, CommandRunner};

use crate::Result;

/// Marker file holding the packed version code.
pub const VERSION_FILENAME: &str = "version.txt";

/// Read the packed version code under `dir`.
///
/// Parses the leading unsigned-integer prefix of `version.txt`, tolerant of
/// trailing whitespace or garbage. A missing file or non-numeric content
/// yields 0.
pub fn read_version_code(dir: &Path) -> u32 {
    match fs::read_to_string(dir.join(VERSION_FILENAME)) {
        Ok(content) => parse_leading_u32(&content),
        Err(_) => 0,
    }
}

fn parse_leading_u32(content: &str) -> u32 {
    let digits: String = content
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Format a packed version code as a dotted version string.
///
/// The code is split into its four big-endian bytes, joined with `.`, and
/// the leading run of `0.` groups is stripped (`4256` -> `[0, 0, 16, 160]`
/// -> `"16.160"`). An all-zero code formats as `"0"`.
pub fn format_version(code: u32) -> String {
    let bytes = code.to_be_bytes();
    let first = bytes
        .iter()
        .position(|&byte| byte != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..]
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Source-control descriptor for the checkout at `dir`.
///
/// Empty when no repository is present (no `.git` in `dir` or its parent);
/// otherwise `"[<branch>] <short-commit> <summary>"`, with `[!detached]`
/// standing in for the branch name when HEAD is detached.
pub fn source_target<R: CommandRunner>(runner: &R, dir: &Path) -> Result<String> {
    if !git::is_repository(dir) {
        return Ok(String::new());
    }

    let commit = git::head_summary(runner, dir)?;
    let branch = git::current_branch(runner, dir)?;
    if branch.is_empty() {
        Ok(format!("[!detached] {commit}"))
    } else {
        Ok(format!("[{branch}] {commit}"))
    }
}
