//! Narrow git queries used for version reconciliation.
//!
//! Query output is returned verbatim (trimmed); a failing query yields an
//! empty string rather than an error, matching the behavior of reading a
//! subprocess's standard output directly.

use std::path::Path;

use crate::runner::CommandRunner;
use crate::{Error, Result};

/// Check whether `dir` sits in a git checkout, either directly or as a
/// subdirectory of one (`.git` in `dir` or in its parent).
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists() || dir.join("..").join(".git").exists()
}

/// Most recent commit of the checkout at `dir`, as `<short-hash> <summary>`.
pub fn head_summary<R: CommandRunner>(runner: &R, dir: &Path) -> Result<String> {
    let output = runner.run("git", &["log", "--oneline", "-n", "1"], dir)?;
    Ok(output.stdout.trim().to_string())
}

/// Currently checked out branch name, empty when HEAD is detached.
pub fn current_branch<R: CommandRunner>(runner: &R, dir: &Path) -> Result<String> {
    let output = runner.run("git", &["branch", "--show-current"], dir)?;
    Ok(output.stdout.trim().to_string())
}

/// Clone `url` inside `dir`; the checkout lands in a subdirectory named
/// after the repository, as `git clone` does.
pub fn clone_repository<R: CommandRunner>(runner: &R, url: &str, dir: &Path) -> Result<()> {
    let output = runner.run("git", &["clone", url], dir)?;
    if output.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed {
            program: "git".to_string(),
            args: format!("clone {url}"),
            status: output.status,
            dir: dir.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandOutput;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Runner returning canned outputs in call order.
    struct FakeRunner {
        outputs: RefCell<Vec<CommandOutput>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeRunner {
        fn new(outputs: Vec<CommandOutput>) -> Self {
            Self {
                outputs: RefCell::new(outputs),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<CommandOutput> {
            let mut call = vec![program.to_string()];
            call.extend(args.iter().map(|a| a.to_string()));
            self.calls.borrow_mut().push(call);
            Ok(self.outputs.borrow_mut().remove(0))
        }
    }

    #[test]
    fn is_repository_detects_own_and_parent_git_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("pokemonsdk");
        fs::create_dir(&nested).unwrap();
        assert!(!is_repository(&nested));

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(is_repository(&nested));

        fs::create_dir(nested.join(".git")).unwrap();
        assert!(is_repository(&nested));
    }

    #[test]
    fn head_summary_trims_trailing_newline() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(vec![CommandOutput {
            stdout: "abc1234 Fix move animation\n".to_string(),
            status: 0,
        }]);

        let summary = head_summary(&runner, temp.path()).unwrap();
        assert_eq!(summary, "abc1234 Fix move animation");
        assert_eq!(
            runner.calls.borrow()[0],
            vec!["git", "log", "--oneline", "-n", "1"]
        );
    }

    #[test]
    fn current_branch_is_empty_when_detached() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(vec![CommandOutput {
            stdout: "\n".to_string(),
            status: 0,
        }]);

        let branch = current_branch(&runner, temp.path()).unwrap();
        assert_eq!(branch, "");
    }

    #[test]
    fn clone_repository_fails_on_non_zero_status() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new(vec![CommandOutput {
            stdout: String::new(),
            status: 128,
        }]);

        let result = clone_repository(&runner, "https://example.com/repo.git", temp.path());
        assert!(matches!(result, Err(Error::CommandFailed { status: 128, .. })));
    }
}
