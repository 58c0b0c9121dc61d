//! Command-line surface of `sha256-extend`.
//!
//! There is no configuration file and no environment lookup: everything comes
//! from the four required options below.

use core::fmt;

use crate::{Forgery, KeyLengthError, parse_key_length};

pub const USAGE: &str = "\
sha256-extend: SHA-256 length-extension forgery

USAGE:
    sha256-extend -s <HASH> -k <KEY_LEN> (-m <TEXT> | --message-hex <HEX>) (-a <TEXT> | --append-hex <HEX>)

OPTIONS:
    -s, --hash HASH         Known hash of (secret || message), 64 hex characters
    -a, --append TEXT       Data to append, i.e. (secret || message || append)
        --append-hex HEX    Data to append, given as hex bytes
    -k, --key-length N      Length of the secret that was hashed, in bytes
    -m, --message TEXT      Known message
        --message-hex HEX   Known message, given as hex bytes
    -v, --verbose           Print the forged stream layout to stderr
    -h, --help              Show this help message
";

/// Parsed options for one forgery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
  /// Known hash, validated later by [`forge`](crate::forge).
  pub hash: String,
  pub append: Vec<u8>,
  pub key_length: u64,
  pub message: Vec<u8>,
  pub verbose: bool,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
  Help,
  Forge(Args),
}

/// Command-line parse failure.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ArgsError {
  /// A flag that takes a value was last on the line.
  MissingValue(&'static str),
  /// A required option was never given.
  MissingOption(&'static str),
  /// Flag not recognized.
  Unknown(String),
  /// `--append-hex` / `--message-hex` value is not valid hex.
  InvalidHex { flag: &'static str, reason: hex::FromHexError },
  /// `--key-length` value rejected.
  InvalidKeyLength(KeyLengthError),
}

impl fmt::Display for ArgsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
      Self::MissingOption(flag) => write!(f, "missing required option {flag}"),
      Self::Unknown(arg) => write!(f, "unknown argument: {arg}"),
      Self::InvalidHex { flag, reason } => write!(f, "{flag}: {reason}"),
      Self::InvalidKeyLength(err) => write!(f, "invalid key length: {err}"),
    }
  }
}

impl core::error::Error for ArgsError {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::InvalidHex { reason, .. } => Some(reason),
      Self::InvalidKeyLength(err) => Some(err),
      _ => None,
    }
  }
}

/// Parse arguments, not including the program name.
///
/// `--help` anywhere wins over everything else, including errors in later
/// arguments. When an option is repeated the last value is used.
///
/// # Errors
///
/// [`ArgsError`] describing the first problem found.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  let mut hash = None;
  let mut append = None;
  let mut key_length = None;
  let mut message = None;
  let mut verbose = false;

  let mut iter = args.into_iter().map(Into::into);
  while let Some(arg) = iter.next() {
    let mut value = |flag: &'static str| iter.next().ok_or(ArgsError::MissingValue(flag));
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => return Ok(Command::Help),
      "--verbose" | "-v" => verbose = true,
      "--hash" | "-s" => hash = Some(value("--hash")?),
      "--append" | "-a" => append = Some(value("--append")?.into_bytes()),
      "--append-hex" => append = Some(decode_hex("--append-hex", &value("--append-hex")?)?),
      "--message" | "-m" => message = Some(value("--message")?.into_bytes()),
      "--message-hex" => message = Some(decode_hex("--message-hex", &value("--message-hex")?)?),
      "--key-length" | "-k" => {
        let text = value("--key-length")?;
        key_length = Some(parse_key_length(&text).map_err(ArgsError::InvalidKeyLength)?);
      }
      other => return Err(ArgsError::Unknown(other.to_string())),
    }
  }

  Ok(Command::Forge(Args {
    hash: hash.ok_or(ArgsError::MissingOption("--hash"))?,
    append: append.ok_or(ArgsError::MissingOption("--append"))?,
    key_length: key_length.ok_or(ArgsError::MissingOption("--key-length"))?,
    message: message.ok_or(ArgsError::MissingOption("--message"))?,
    verbose,
  }))
}

fn decode_hex(flag: &'static str, text: &str) -> Result<Vec<u8>, ArgsError> {
  hex::decode(text.trim()).map_err(|reason| ArgsError::InvalidHex { flag, reason })
}

/// The three output lines: forged hash, forged message, and its hex.
///
/// Non-printable bytes in the message are shown as `\xNN` escapes.
#[must_use]
pub fn render(forgery: &Forgery) -> String {
  format!(
    "[*] New SHA 256 hash: {}\n[*] Changed message: {}\n[*] Changed message (hex): {}\n",
    forgery.digest_hex(),
    forgery.message().escape_ascii(),
    hex::encode(forgery.message()),
  )
}
