use hashes::{Sha256, State, crypto::sha256::build_padding};
use lenext::{Error, KeyLengthError, MalformedDigest, diag, forge};
use proptest::prelude::*;

fn sha2_ref(data: &[u8]) -> [u8; 32] {
  use sha2::Digest as _;
  let out = sha2::Sha256::digest(data);
  let mut bytes = [0u8; 32];
  bytes.copy_from_slice(&out);
  bytes
}

fn keyed_hex(secret: &[u8], message: &[u8]) -> String {
  let mut data = secret.to_vec();
  data.extend_from_slice(message);
  State::from(Sha256::digest(&data)).to_hex()
}

fn verify(secret: &[u8], message: &[u8], digest: &[u8; 32]) -> bool {
  let mut data = secret.to_vec();
  data.extend_from_slice(message);
  sha2_ref(&data) == *digest
}

#[test]
fn admin_flag_scenario() {
  let known = keyed_hex(b"key123", b"user=guest");
  assert_eq!(known, "163aee92c92be150037d006d060cbc54048227483beb28fee6e5bbab5a46ef70");

  let forged = forge(b"&admin=true", &known, 6, b"user=guest").unwrap();
  assert_eq!(
    forged.digest_hex(),
    "65151def802fd834333cc1f2c16215212c1d0331d5babddb1f22f610210e6eaa"
  );
  assert_eq!(
    hex::encode(forged.message()),
    "757365723d67756573748000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000802661646d696e3d74727565"
  );
  assert!(verify(b"key123", forged.message(), forged.digest()));
}

#[test]
fn text_and_bytes_are_interchangeable() {
  let known = keyed_hex(b"key123", b"user=guest");
  let from_text = forge("&admin=true", &known, 6i32, "user=guest").unwrap();
  let from_bytes = forge(b"&admin=true".to_vec(), &known, 6usize, b"user=guest".as_slice()).unwrap();
  assert_eq!(from_text, from_bytes);
}

#[test]
fn empty_secret_message_and_append() {
  let known = keyed_hex(b"", b"");
  let forged = forge(b"", &known, 0u64, b"").unwrap();

  let mut expected_message = vec![0x80];
  expected_message.resize(64, 0);
  assert_eq!(forged.message(), &expected_message[..]);
  assert_eq!(
    forged.digest_hex(),
    "a9e8913b13864096b9ea592f9548c87654aaf8df24e3437645fac174d1036e1c"
  );
  assert!(verify(b"", forged.message(), forged.digest()));
}

#[test]
fn multi_block_message_and_append() {
  let secret = [b's'; 20];
  let message: Vec<u8> = (0u8..150).collect();
  let appended = [b'x'; 70];

  let known = keyed_hex(&secret, &message);
  let forged = forge(appended, &known, 20, &message).unwrap();

  assert_eq!(forged.message().len(), 172 + 70);
  assert_eq!(
    forged.digest_hex(),
    "159d05e94285a272c70ac791f1b37517563811d19a54468569179d0f3d1d43c9"
  );
  assert!(verify(&secret, forged.message(), forged.digest()));
}

#[test]
fn wrong_secret_length_does_not_verify() {
  let known = keyed_hex(b"key123", b"user=guest");
  for guess in [5u64, 7] {
    let forged = forge(b"&admin=true", &known, guess, b"user=guest").unwrap();
    assert!(!verify(b"key123", forged.message(), forged.digest()), "guess={guess}");
  }
}

#[test]
fn hashed_tail_is_the_verifiers_final_blocks() {
  let secret = b"key123";
  let known = keyed_hex(secret, b"user=guest");
  let forged = forge(b"&admin=true", &known, 6, b"user=guest").unwrap();

  // The verifier hashes secret ‖ message(); its padded stream ends with the tail.
  let mut stream = secret.to_vec();
  stream.extend_from_slice(forged.message());
  let padded = build_padding(&stream, 0);
  assert!(padded.ends_with(forged.hashed_tail()));
  assert_eq!(padded.len(), 6 + 58 + forged.hashed_tail().len());
}

#[test]
fn diagnostics_agree_with_forge() {
  let known = keyed_hex(b"0123456789abcdef0123", b"comment=hello");
  let forged = forge(b";role=root", &known, 20, b"comment=hello").unwrap();
  let d = diag::diagnose(20, 13, 10);

  assert_eq!(d.victim_padded_len + d.appended_len, forged.message().len());
  assert_eq!(d.tail_len, forged.hashed_tail().len());
  assert_eq!(d.blocks * 64, forged.hashed_tail().len());
  assert_eq!(d.tail_prior_len, 20 + d.victim_padded_len as u64);
}

#[test]
fn malformed_digest_is_rejected() {
  let known = keyed_hex(b"key123", b"user=guest");

  assert_eq!(
    forge(b"x", &known[..63], 6, b"m"),
    Err(Error::MalformedDigest(MalformedDigest::Length { found: 63 }))
  );

  let mut bad = known.clone();
  bad.replace_range(40..41, "z");
  assert_eq!(
    forge(b"x", &bad, 6, b"m"),
    Err(Error::MalformedDigest(MalformedDigest::NonHex { index: 40 }))
  );
}

#[test]
fn negative_key_length_is_rejected() {
  let known = keyed_hex(b"key123", b"user=guest");
  assert_eq!(
    forge(b"x", &known, -1, b"m"),
    Err(Error::InvalidKeyLength(KeyLengthError::Negative))
  );
}

#[test]
fn chained_forgeries_stay_valid() {
  let secret = b"topsecret";
  let first = forge(b"&a=1", &keyed_hex(secret, b"q=0"), secret.len(), b"q=0").unwrap();
  let second = forge(b"&b=2", &first.digest_hex(), secret.len(), first.message()).unwrap();
  assert!(verify(secret, second.message(), second.digest()));
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(128))]

  #[test]
  fn forgery_verifies_against_sha2(
    secret in proptest::collection::vec(any::<u8>(), 0..200),
    message in proptest::collection::vec(any::<u8>(), 0..300),
    appended in proptest::collection::vec(any::<u8>(), 0..300),
  ) {
    let known = keyed_hex(&secret, &message);
    let forged = forge(&appended, &known, secret.len(), &message).unwrap();

    let mut expected_message = build_padding(&message, secret.len() as u64);
    expected_message.extend_from_slice(&appended);
    prop_assert_eq!(forged.message(), &expected_message[..]);
    prop_assert!(verify(&secret, forged.message(), forged.digest()));
  }
}
