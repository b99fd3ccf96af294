//! Flag registry: the host CLI's own flags as a read-only lookup table.

use std::collections::HashMap;

use clap::Command;

/// A single host flag definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDef {
    /// Long form without dashes (e.g., "profile").
    pub name: String,
    /// Optional single-character alias (e.g., 'p').
    pub shorthand: Option<char>,
    /// Bare `--flag` is complete on its own (boolean switches).
    pub takes_optional_value: bool,
}

impl FlagDef {
    /// A flag that always needs an explicit value (`--profile prod`).
    pub fn with_value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            takes_optional_value: false,
        }
    }

    /// A flag that is complete without a value (`--debug`).
    pub fn switch(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shorthand: None,
            takes_optional_value: true,
        }
    }

    pub fn short(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }
}

/// Ordered, name-unique collection of [`FlagDef`]s.
///
/// Queryable by long name and by shorthand character. Inserting a name that
/// already exists replaces the previous definition in place.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    defs: Vec<FlagDef>,
    by_name: HashMap<String, usize>,
    by_shorthand: HashMap<char, usize>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the flag set from a clap command's non-positional arguments.
    ///
    /// The command is built first so clap's generated `--help` is included.
    pub fn from_command(mut cmd: Command) -> Self {
        cmd.build();

        let mut set = Self::new();
        for arg in cmd.get_arguments().filter(|a| !a.is_positional()) {
            let name = match arg.get_long() {
                Some(long) => long.to_string(),
                None => arg.get_id().as_str().to_string(),
            };
            let optional_value = !arg.get_action().takes_values()
                || arg
                    .get_num_args()
                    .map(|range| range.min_values() == 0)
                    .unwrap_or(false);

            set.insert(FlagDef {
                name,
                shorthand: arg.get_short(),
                takes_optional_value: optional_value,
            });
        }
        set
    }

    /// Add a definition, replacing any existing one with the same name.
    pub fn insert(&mut self, def: FlagDef) {
        let idx = match self.by_name.get(&def.name) {
            Some(&idx) => {
                if let Some(old) = self.defs[idx].shorthand {
                    // another definition may have claimed the shorthand since
                    if self.by_shorthand.get(&old) == Some(&idx) {
                        self.by_shorthand.remove(&old);
                    }
                }
                self.defs[idx] = def;
                idx
            }
            None => {
                self.defs.push(def);
                let idx = self.defs.len() - 1;
                self.by_name.insert(self.defs[idx].name.clone(), idx);
                idx
            }
        };

        if let Some(c) = self.defs[idx].shorthand {
            self.by_shorthand.insert(c, idx);
        }
    }

    pub fn with(mut self, def: FlagDef) -> Self {
        self.insert(def);
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&FlagDef> {
        self.by_name.get(name).map(|&idx| &self.defs[idx])
    }

    pub fn shorthand_lookup(&self, shorthand: char) -> Option<&FlagDef> {
        self.by_shorthand.get(&shorthand).map(|&idx| &self.defs[idx])
    }
}
