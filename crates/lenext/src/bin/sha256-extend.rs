//! SHA-256 length-extension forgery from the command line.
//!
//! Usage:
//!   sha256-extend -s <HASH> -a <APPEND> -k <KEY_LEN> -m <MESSAGE>
//!   sha256-extend -s <HASH> --append-hex <HEX> -k <KEY_LEN> -m <MESSAGE> --verbose

use std::{env, process::ExitCode};

use lenext::{
  cli::{self, Command},
  diag,
};

fn main() -> ExitCode {
  let args = match cli::parse_args(env::args().skip(1)) {
    Ok(Command::Forge(args)) => args,
    Ok(Command::Help) => {
      eprint!("{}", cli::USAGE);
      return ExitCode::SUCCESS;
    }
    Err(err) => {
      eprintln!("Error: {err}");
      eprintln!("Run with --help for usage information.");
      return ExitCode::FAILURE;
    }
  };

  if args.verbose {
    eprintln!("{}", diag::diagnose(args.key_length, args.message.len(), args.append.len()));
  }

  match lenext::forge(&args.append, &args.hash, args.key_length, &args.message) {
    Ok(forgery) => {
      print!("{}", cli::render(&forgery));
      ExitCode::SUCCESS
    }
    Err(err) => {
      eprintln!("Error: {err}");
      ExitCode::FAILURE
    }
  }
}
