#![no_main]

use hashes::State;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let Ok(text) = core::str::from_utf8(data) else {
    return;
  };
  match State::from_hex(text) {
    Ok(state) => assert_eq!(state.to_hex(), text.to_ascii_lowercase()),
    Err(_) => assert!(text.len() != 64 || !text.bytes().all(|b| b.is_ascii_hexdigit())),
  }
});
