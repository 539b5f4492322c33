//! Output management and formatting.

use std::io::{self, IsTerminal};
use std::path::{Component, Path};

use console::Term;
use owo_colors::OwoColorize;
use serde_json::Value;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Tree summary of a package: `root/` followed by its entries.
    pub fn tree(&self, root: &str, entries: &[TreeEntry<'_>]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut lines = render_tree(entries).into_iter();
        self.term.write_line(&format!("{root}/"))?;
        lines.try_for_each(|line| {
            let line = if self.no_color {
                line
            } else if line.ends_with('/') {
                line.blue().bold().to_string()
            } else {
                line
            };
            self.term.write_line(&line)
        })
    }

    /// Pretty JSON document; printed even in quiet mode.
    pub fn json(&self, value: &Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// One path of a tree summary, relative to the package root.
#[derive(Debug, Clone, Copy)]
pub struct TreeEntry<'a> {
    pub path: &'a Path,
    pub is_dir: bool,
}

struct Node {
    name: String,
    is_dir: bool,
    children: Vec<Node>,
}

fn insert(nodes: &mut Vec<Node>, parts: &[String], is_dir: bool) {
    let Some((first, rest)) = parts.split_first() else {
        return;
    };
    let index = match nodes.iter().position(|n| &n.name == first) {
        Some(index) => index,
        None => {
            nodes.push(Node {
                name: first.clone(),
                is_dir: is_dir || !rest.is_empty(),
                children: Vec::new(),
            });
            nodes.len() - 1
        }
    };
    insert(&mut nodes[index].children, rest, is_dir);
}

fn draw(nodes: &[Node], prefix: &str, lines: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let slash = if node.is_dir { "/" } else { "" };
        lines.push(format!("{prefix}{branch}{}{slash}", node.name));

        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        draw(&node.children, &nested, lines);
    }
}

/// Box-drawing lines for `entries`, keeping their order within each level.
pub fn render_tree(entries: &[TreeEntry<'_>]) -> Vec<String> {
    let mut roots = Vec::new();
    for entry in entries {
        let parts: Vec<String> = entry
            .path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        insert(&mut roots, &parts, entry.is_dir);
    }

    let mut lines = Vec::new();
    draw(&roots, "", &mut lines);
    lines
}

// ── tests ─────────────────────────────────────────────────────────────────────
