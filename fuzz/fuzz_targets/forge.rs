#![no_main]

use libfuzzer_sys::fuzz_target;

fn sha2_ref(data: &[u8]) -> [u8; 32] {
  use sha2::Digest as _;
  let out = sha2::Sha256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes
}

// Layout: [secret_len, message_len, secret.., message.., appended..]
fuzz_target!(|data: &[u8]| {
  let [secret_len, message_len, rest @ ..] = data else {
    return;
  };
  let (secret_len, message_len) = (*secret_len as usize, *message_len as usize);
  if rest.len() < secret_len + message_len {
    return;
  }
  let (secret, rest) = rest.split_at(secret_len);
  let (message, appended) = rest.split_at(message_len);

  let mut keyed = secret.to_vec();
  keyed.extend_from_slice(message);
  let known = hashes::State::from(sha2_ref(&keyed)).to_hex();

  let forged = lenext::forge(appended, &known, secret.len(), message).expect("valid inputs must forge");

  let mut verifier = secret.to_vec();
  verifier.extend_from_slice(forged.message());
  assert_eq!(sha2_ref(&verifier), *forged.digest());
});
