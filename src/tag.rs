//! Build tag generation.
//!
//! A tag labels a build artifact as `<major.minor>-<adjective>-<noun>`, e.g.
//! `1.83-brave-otter`. The words are drawn from a cryptographically strong
//! source so tags are hard to guess and rarely collide across builds.

use rand::{CryptoRng, RngCore};

#[rustfmt::skip]
pub const ADJECTIVES: [&str; 70] = [
    "admiring", "agile", "ancient", "bold", "brave",
    "bright", "calm", "clever", "cool", "cosmic",
    "daring", "eager", "elegant", "epic", "fearless",
    "fierce", "flying", "focused", "friendly", "gentle",
    "gifted", "golden", "graceful", "happy", "hopeful",
    "hungry", "jolly", "keen", "kind", "laughing",
    "lively", "lucky", "magical", "mighty", "modest",
    "musing", "nifty", "noble", "peaceful", "polite",
    "proud", "quick", "quiet", "rapid", "relaxed",
    "sharp", "shiny", "silent", "sleepy", "smart",
    "smooth", "snappy", "solid", "speedy", "stoic",
    "sunny", "sweet", "swift", "tender", "thirsty",
    "trusting", "upbeat", "vibrant", "vigilant", "warm",
    "wise", "witty", "wonderful", "zealous", "zen",
];

#[rustfmt::skip]
pub const NOUNS: [&str; 85] = [
    "albatross", "antelope", "badger", "bear", "beaver",
    "bird", "buffalo", "butterfly", "camel", "cat",
    "cheetah", "cobra", "condor", "crane", "deer",
    "dolphin", "dragon", "eagle", "elephant", "falcon",
    "ferret", "finch", "firefly", "fish", "flamingo",
    "fox", "frog", "gazelle", "giraffe", "goose",
    "gorilla", "hawk", "hedgehog", "heron", "horse",
    "hummingbird", "jaguar", "jellyfish", "kangaroo", "koala",
    "lemur", "leopard", "lion", "lizard", "lynx",
    "mammoth", "meerkat", "moose", "narwhal", "newt",
    "octopus", "orca", "otter", "owl", "panda",
    "panther", "parrot", "peacock", "pelican", "penguin",
    "phoenix", "pigeon", "puma", "rabbit", "raccoon",
    "raven", "salmon", "seahorse", "seal", "shark",
    "sparrow", "spider", "squid", "stork", "swan",
    "tiger", "toucan", "turtle", "unicorn", "viper",
    "walrus", "whale", "wolf", "wombat", "zebra",
];

pub const USAGE: &str = "\
Usage: taggen [--name|--version|--help]
  (no args)  Print full tag: <rust-version>-<random-name>
  --name     Print only random name
  --version  Print only Rust version";

/// Reduce a toolchain version string to `major.minor`.
///
/// Everything before the first digit is treated as the runtime name and
/// dropped, as is anything after the first whitespace. With fewer than two
/// dot-separated components the remainder is returned as is.
///
/// ```
/// assert_eq!(mjolnir::tag::short_version("go1.23.4"), "1.23");
/// assert_eq!(mjolnir::tag::short_version("rustc 1.83.0 (90b35a623 2024-11-26)"), "1.83");
/// ```
pub fn short_version(runtime_version: &str) -> String {
    let trimmed = runtime_version.trim();
    let Some(start) = trimmed.find(|c: char| c.is_ascii_digit()) else {
        return trimmed.to_string();
    };
    let number = trimmed[start..].split_whitespace().next().unwrap_or_default();

    let mut parts = number.split('.');
    match (parts.next(), parts.next()) {
        (Some(major), Some(minor)) => format!("{}.{}", major, minor),
        _ => number.to_string(),
    }
}

/// Uniform index in `0..len`, by rejection sampling over 64-bit draws.
///
/// `len` must be non-zero.
pub fn random_index<R>(rng: &mut R, len: usize) -> Result<usize, rand::Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    debug_assert!(len > 0, "cannot pick from an empty list");
    let len = len as u64;
    // Largest multiple of len that fits; draws at or above it would bias low indices
    let zone = u64::MAX - u64::MAX % len;

    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let draw = u64::from_le_bytes(buf);
        if draw < zone {
            return Ok((draw % len) as usize);
        }
    }
}

/// Pick one word uniformly, falling back to the first word if the random
/// source fails.
pub fn pick_word<R>(rng: &mut R, words: &[&'static str]) -> &'static str
where
    R: RngCore + CryptoRng + ?Sized,
{
    match random_index(rng, words.len()) {
        Ok(index) => words[index],
        Err(e) => {
            tracing::debug!(error = %e, "random source failed, using first word");
            words[0]
        }
    }
}

/// A random `adjective-noun` pair.
pub fn random_name<R>(rng: &mut R) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    format!("{}-{}", pick_word(rng, &ADJECTIVES), pick_word(rng, &NOUNS))
}

/// Full tag: `<major.minor>-<adjective>-<noun>`.
pub fn generate_tag<R>(runtime_version: &str, rng: &mut R) -> String
where
    R: RngCore + CryptoRng + ?Sized,
{
    format!("{}-{}", short_version(runtime_version), random_name(rng))
}

/// What `taggen` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCommand {
    Full,
    Name,
    Version,
    Help,
}

impl TagCommand {
    /// Select the command from the first argument. Unknown arguments fall
    /// back to the full tag.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("--name") => TagCommand::Name,
            Some("--version") => TagCommand::Version,
            Some("--help") | Some("-h") => TagCommand::Help,
            _ => TagCommand::Full,
        }
    }

    /// Produce the output line(s) for this command.
    pub fn render<R>(self, runtime_version: &str, rng: &mut R) -> String
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        match self {
            TagCommand::Full => generate_tag(runtime_version, rng),
            TagCommand::Name => random_name(rng),
            TagCommand::Version => short_version(runtime_version),
            TagCommand::Help => USAGE.to_string(),
        }
    }
}
