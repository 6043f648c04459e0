//! CLI definition and the permissive argument resolution rules.
//!
//! Unrecognized flags and surplus positionals are dropped before clap sees
//! the argument list, so stray tokens never abort a run. Precedence: an
//! explicit `--model=` always wins over a positional model name, which wins
//! over the built-in default.

use clap::Parser;
use tracing::debug;

/// Model used when neither `--model=` nor a positional name is given.
pub const DEFAULT_MODEL: &str = "qwen/qwen3-8b";

/// Generate a commit message from a git diff using a local LLM.
#[derive(Parser, Debug)]
#[command(name = "epigraph")]
#[command(about = "Generate a commit message from a git diff using a local LLM")]
#[command(version)]
#[command(after_help = "\
Examples:
  epigraph                               # default model, staged diff
  epigraph qwen3-7b                      # custom model, staged diff
  epigraph --model=qwen3-7b --commit=abc123
  epigraph --dry-run                     # print the message, touch nothing
  epigraph --bump                        # bump the version, then commit")]
pub struct Cli {
    /// Model name (positional form)
    #[arg(value_name = "MODEL")]
    model_positional: Option<String>,

    /// Model name (explicit form, wins over the positional)
    #[arg(long = "model", value_name = "NAME")]
    model: Option<String>,

    /// Generate for the diff introduced by this commit instead of the staged diff
    #[arg(long = "commit", value_name = "HASH")]
    commit: Option<String>,

    /// Print the generated message without committing
    #[arg(long)]
    dry_run: bool,

    /// Bump the package version and stage the manifest before committing
    #[arg(long)]
    bump: bool,
}

/// Resolved, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    pub model_name: String,
    pub target_commit: Option<String>,
    pub dry_run: bool,
    pub bump_version: bool,
}

impl Cli {
    /// Apply the precedence rules and produce the run configuration.
    pub fn resolve(self) -> InvocationConfig {
        let model_name = self
            .model
            .filter(|m| !m.is_empty())
            .or(self.model_positional.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        InvocationConfig {
            model_name,
            // `--commit=` with no value means the staged diff
            target_commit: self.commit.filter(|c| !c.is_empty()),
            dry_run: self.dry_run,
            bump_version: self.bump,
        }
    }
}

/// Parse the process arguments into an [`InvocationConfig`].
///
/// `--help`/`-h` prints usage and exits 0 before anything else runs.
pub fn parse_invocation() -> InvocationConfig {
    let args = filter_known(std::env::args());
    Cli::parse_from(args).resolve()
}

/// Drop tokens clap would reject from the raw argument list.
///
/// Keeps the program name, the first positional, and known flags. Value
/// flags count as known only in their `--flag=value` form; a bare `--model`
/// or `--commit` is dropped like any stray flag. Dropped tokens are
/// debug-logged, never errors.
fn filter_known<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    const KNOWN_FLAGS: &[&str] = &["--dry-run", "--bump", "--help", "-h", "--version", "-V"];
    const KNOWN_VALUE_FLAGS: &[&str] = &["--model", "--commit"];

    let mut iter = args.into_iter();
    let mut kept: Vec<String> = iter.next().into_iter().collect();
    let mut seen_positional = false;

    for arg in iter {
        if !arg.starts_with('-') {
            if seen_positional {
                debug!("Ignoring surplus positional '{arg}'");
            } else {
                seen_positional = true;
                kept.push(arg);
            }
            continue;
        }

        if KNOWN_FLAGS.contains(&arg.as_str()) {
            kept.push(arg);
            continue;
        }

        match arg.split_once('=') {
            Some((name, _)) if KNOWN_VALUE_FLAGS.contains(&name) => kept.push(arg),
            _ => debug!("Ignoring unrecognized flag '{arg}'"),
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(args: &[&str]) -> InvocationConfig {
        let raw: Vec<String> = std::iter::once("epigraph".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        Cli::parse_from(filter_known(raw)).resolve()
    }

    #[test]
    fn test_defaults() {
        let config = resolve(&[]);
        assert_eq!(config.model_name, DEFAULT_MODEL);
        assert_eq!(config.target_commit, None);
        assert!(!config.dry_run);
        assert!(!config.bump_version);
    }

    #[test]
    fn test_positional_model() {
        let config = resolve(&["qwen3-7b"]);
        assert_eq!(config.model_name, "qwen3-7b");
    }

    #[test]
    fn test_explicit_model_wins_over_positional() {
        let config = resolve(&["--model=foo", "bar"]);
        assert_eq!(config.model_name, "foo");
    }

    #[test]
    fn test_explicit_model_wins_regardless_of_order() {
        let config = resolve(&["bar", "--model=foo"]);
        assert_eq!(config.model_name, "foo");
    }

    #[test]
    fn test_empty_model_flag_falls_back_to_default() {
        let config = resolve(&["--model="]);
        assert_eq!(config.model_name, DEFAULT_MODEL);
    }

    #[test]
    fn test_commit_flag_selects_commit_scope() {
        let config = resolve(&["--commit=abc123"]);
        assert_eq!(config.target_commit.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_empty_commit_flag_selects_staged_scope() {
        let config = resolve(&["--commit="]);
        assert_eq!(config.target_commit, None);
    }

    #[test]
    fn test_no_commit_flag_selects_staged_scope() {
        let config = resolve(&["--dry-run"]);
        assert_eq!(config.target_commit, None);
        assert!(config.dry_run);
    }

    #[test]
    fn test_bump_and_dry_run_flags() {
        let config = resolve(&["--dry-run", "--bump"]);
        assert!(config.dry_run);
        assert!(config.bump_version);
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        let config = resolve(&["--frobnicate", "--model=foo", "--verbose=3"]);
        assert_eq!(config.model_name, "foo");
    }

    #[test]
    fn test_unknown_short_flag_is_ignored() {
        let config = resolve(&["-x", "qwen3-7b"]);
        assert_eq!(config.model_name, "qwen3-7b");
    }

    #[test]
    fn test_surplus_positionals_are_ignored() {
        let config = resolve(&["qwen3-7b", "extra", "more"]);
        assert_eq!(config.model_name, "qwen3-7b");
        assert_eq!(config.target_commit, None);
    }

    #[test]
    fn test_bare_value_flag_degrades_to_positional() {
        // without '=', the flag is dropped and its value becomes positional
        let config = resolve(&["--model", "qwen3-7b"]);
        assert_eq!(config.model_name, "qwen3-7b");
    }

    #[test]
    fn test_bare_commit_flag_is_ignored() {
        let config = resolve(&["--commit"]);
        assert_eq!(config.target_commit, None);
        assert_eq!(config.model_name, DEFAULT_MODEL);
    }

    #[test]
    fn test_filter_keeps_program_name_and_first_positional() {
        let raw = vec![
            "epigraph".to_string(),
            "model-a".to_string(),
            "model-b".to_string(),
            "--bogus".to_string(),
            "--bump".to_string(),
        ];
        let kept = filter_known(raw);
        assert_eq!(kept, vec!["epigraph", "model-a", "--bump"]);
    }
}
