//! Command options and their defaults.

use std::str::FromStr;

use twocalc_codec::{Layout, Mode, MAX_DEPTH};

/// Flags that take a value.
const VALUE_FLAGS: [&str; 4] = ["--seed", "--depth", "--max-depth", "-o"];

/// Default depth bound of the flat encoding.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Default depth of generated expressions.
pub const DEFAULT_DEPTH: usize = 3;

/// Parameters of the flat codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    pub max_depth: usize,
    pub mode: Mode,
    pub layout: Layout,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            mode: Mode::Strict,
            layout: Layout::Canonical,
        }
    }
}

impl CodecConfig {
    pub fn from_options(opts: &Options<'_>) -> Result<Self, i32> {
        let defaults = Self::default();
        Ok(Self {
            max_depth: opts.parse("--max-depth")?.unwrap_or(defaults.max_depth),
            mode: if opts.has("--resilient") {
                Mode::Resilient
            } else {
                defaults.mode
            },
            layout: if opts.has("--legacy") {
                Layout::Legacy
            } else {
                defaults.layout
            },
        })
    }
}

/// Parameters of the expression generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub seed: u64,
    pub depth: usize,
}

impl GenerateConfig {
    /// `--seed` is required; `--depth` falls back to `default_depth` and
    /// may not exceed [`MAX_DEPTH`].
    pub fn from_options(opts: &Options<'_>, default_depth: usize) -> Result<Self, i32> {
        let Some(seed) = opts.parse("--seed")? else {
            eprintln!("error: --seed is required");
            return Err(1);
        };
        let depth = opts.parse("--depth")?.unwrap_or(default_depth);
        if depth > MAX_DEPTH {
            eprintln!("error: --depth {depth} exceeds the maximum of {MAX_DEPTH}");
            return Err(1);
        }
        Ok(Self { seed, depth })
    }
}

/// Read-only view over a command's arguments.
pub struct Options<'a> {
    args: &'a [String],
}

impl<'a> Options<'a> {
    pub fn new(args: &'a [String]) -> Self {
        Self { args }
    }

    /// The value following `name`, if present.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.args
            .windows(2)
            .find(|pair| pair[0] == name)
            .map(|pair| pair[1].as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.args.iter().any(|a| a == name)
    }

    /// First argument that is neither a flag nor a flag's value.
    pub fn input(&self) -> Option<&'a str> {
        let mut skip_next = false;
        for arg in self.args {
            if skip_next {
                skip_next = false;
                continue;
            }
            if VALUE_FLAGS.contains(&arg.as_str()) {
                skip_next = true;
                continue;
            }
            if !arg.starts_with('-') {
                return Some(arg);
            }
        }
        None
    }

    /// Parse the value of `name`, reporting malformed values.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>, i32> {
        match self.value(name) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                eprintln!("error: invalid value '{raw}' for {name}");
                1
            }),
        }
    }
}
