//! Argument partitioner: raw args → host args + component args.
//!
//! Mirrors the tokenization of a POSIX/GNU flag parser, but instead of
//! rejecting unknown flags it hands them (and their probable values) to the
//! component. Only membership in the host [`FlagSet`] decides ownership.
//!
//! The component's flag definitions are never loaded, so for a component
//! flag we cannot know whether it takes a value. We peek at the next token:
//! if it does not start with `-` it is treated as the flag's value. A
//! value-less component flag followed by a positional will swallow that
//! positional; both still end up with the component.

use std::iter::Peekable;
use std::slice::Iter;

use crate::args::registry::FlagSet;

/// Output of one [`partition`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionResult {
    /// Tokens forwarded to the component, in original order.
    pub component_args: Vec<String>,
    /// Tokens for the host CLI's own parser, in original order.
    pub host_args: Vec<String>,
}

type Args<'a> = Peekable<Iter<'a, String>>;

/// Split `args` into host-bound and component-bound tokens.
///
/// Total and side-effect free: every token lands in exactly one bucket and a
/// consumed flag value travels with its flag.
pub fn partition(flags: &FlagSet, args: &[String]) -> PartitionResult {
    let mut out = PartitionResult::default();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        // The component must always be able to render its own help.
        if arg == "help" || arg == "--help" || arg == "-h" {
            out.component_args.push(arg.clone());
            continue;
        }

        if arg.len() < 2 || !arg.starts_with('-') {
            out.component_args.push(arg.clone());
            continue;
        }

        if arg == "--" {
            out.component_args.push(arg.clone());
            out.component_args.extend(iter.by_ref().cloned());
            break;
        }

        if let Some(name) = arg.strip_prefix("--") {
            out.long_flag(flags, arg, name, &mut iter);
        } else {
            out.short_flag(flags, arg, &mut iter);
        }
    }

    out
}

fn looks_like_value(next: &str) -> bool {
    !next.starts_with('-')
}

impl PartitionResult {
    fn long_flag(&mut self, flags: &FlagSet, arg: &str, name: &str, iter: &mut Args<'_>) {
        // `---x` and `--=x` are not legal flags; let the component complain.
        if name.starts_with('-') || name.starts_with('=') {
            self.component_args.push(arg.to_string());
            return;
        }

        let (name, inline_value) = match name.split_once('=') {
            Some((name, _)) => (name, true),
            None => (name, false),
        };

        let Some(def) = flags.lookup(name) else {
            self.component_args.push(arg.to_string());
            if let Some(next) = iter.next_if(|next| looks_like_value(next)) {
                self.component_args.push(next.clone());
            }
            return;
        };

        self.host_args.push(arg.to_string());
        if inline_value || def.takes_optional_value {
            return;
        }
        // '--flag value'; a missing value is left for the host parser to report
        if let Some(next) = iter.next() {
            self.host_args.push(next.clone());
        }
    }

    fn short_flag(&mut self, flags: &FlagSet, arg: &str, iter: &mut Args<'_>) {
        let cluster = &arg[1..];
        let mut chars = cluster.chars();
        let Some(shorthand) = chars.next() else {
            self.component_args.push(arg.to_string());
            return;
        };
        let rest = chars.as_str();

        // An unknown leading shorthand may own the rest of the cluster as its
        // value (`-n1234`, `-x=value`), so the cluster is never split.
        let Some(def) = flags.shorthand_lookup(shorthand) else {
            self.component_args.push(arg.to_string());
            if rest.is_empty() {
                if let Some(next) = iter.next_if(|next| looks_like_value(next)) {
                    self.component_args.push(next.clone());
                }
            }
            return;
        };

        self.host_args.push(arg.to_string());
        // '-f=value', '-f' with optional value, or '-fvalue'
        if rest.starts_with('=') || def.takes_optional_value || !rest.is_empty() {
            return;
        }
        if let Some(next) = iter.next() {
            self.host_args.push(next.clone());
        }
    }
}
