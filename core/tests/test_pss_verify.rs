// Verification: every rejection path collapses to `None`.

use pss_core::constants::{MAX_KEY_BITS, PSS_TRAILER};
use pss_core::crypto::{DigestAlg, HashFunction};
use pss_core::pss::{pss_encode, pss_verify};

fn sha256(msg: &[u8]) -> Vec<u8> {
    let mut h = DigestAlg::Sha256.instance();
    h.update(msg);
    h.finalize()
}

fn encode_2048(salt: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"scenario");
    let em = pss_encode(&mut hash, &digest, salt, 2048).unwrap();
    (digest, em)
}

// ## 1️⃣ Concrete scenarios

#[test]
fn scenario_a_round_trip_and_bad_trailer() {
    let (digest, mut em) = encode_2048(&[0x5Cu8; 32]);
    let mut hash = DigestAlg::Sha256.instance();

    assert_eq!(pss_verify(&mut hash, &em, &digest, 2048), Some(32));

    *em.last_mut().unwrap() = 0xBD;
    assert_eq!(pss_verify(&mut hash, &em, &digest, 2048), None);
}

#[test]
fn scenario_b_key_bits_one_short_of_margin() {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"anything");
    let key_bits = 8 * 32 + 8;

    for candidate in [vec![0u8; 34], vec![PSS_TRAILER; 34], vec![0xFFu8; 2], vec![]] {
        assert_eq!(pss_verify(&mut hash, &candidate, &digest, key_bits), None);
    }
}

// ## 2️⃣ Structural checks

#[test]
fn wrong_expected_digest_length_rejected() {
    let (digest, em) = encode_2048(&[1u8; 32]);
    let mut hash = DigestAlg::Sha256.instance();
    assert_eq!(pss_verify(&mut hash, &em, &digest[..31], 2048), None);

    let mut long = digest.clone();
    long.push(0);
    assert_eq!(pss_verify(&mut hash, &em, &long, 2048), None);
}

#[test]
fn candidate_length_bounds() {
    let (digest, em) = encode_2048(&[1u8; 32]);
    let mut hash = DigestAlg::Sha256.instance();

    assert_eq!(pss_verify(&mut hash, &[], &digest, 2048), None);
    assert_eq!(pss_verify(&mut hash, &[PSS_TRAILER], &digest, 2048), None);

    // longer than the key
    let mut padded = vec![0u8];
    padded.extend_from_slice(&em);
    assert_eq!(pss_verify(&mut hash, &padded, &digest, 2048), None);
}

#[test]
fn wrong_digest_rejected() {
    let (_, em) = encode_2048(&[9u8; 32]);
    let mut hash = DigestAlg::Sha256.instance();
    assert_eq!(pss_verify(&mut hash, &em, &sha256(b"other"), 2048), None);
}

#[test]
fn wrong_hash_rejected() {
    let (digest, em) = encode_2048(&[9u8; 32]);
    let mut hash = DigestAlg::Sha3_256.instance();
    assert_eq!(pss_verify(&mut hash, &em, &digest, 2048), None);
}

#[test]
fn bits_above_key_size_rejected() {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"top bits");

    // a 2047-bit key leaves the top bit of byte 0 unused; force it on
    let mut forced = pss_encode(&mut hash, &digest, &[3u8; 32], 2047).unwrap();
    assert_eq!(pss_verify(&mut hash, &forced, &digest, 2047), Some(32));
    forced[0] |= 0x80;
    assert_eq!(pss_verify(&mut hash, &forced, &digest, 2047), None);

    // a 2048-bit block with its top bit set cannot belong to a 2047-bit key
    let em = (0u8..=255)
        .map(|seed| pss_encode(&mut hash, &digest, &[seed; 32], 2048).unwrap())
        .find(|em| em[0] & 0x80 != 0)
        .expect("some salt sets the top bit");
    assert_eq!(pss_verify(&mut hash, &em, &digest, 2048), Some(32));
    assert_eq!(pss_verify(&mut hash, &em, &digest, 2047), None);
}

#[test]
fn huge_key_bits_rejected_without_allocation() {
    let (digest, em) = encode_2048(&[1u8; 32]);
    let mut hash = DigestAlg::Sha256.instance();
    assert_eq!(pss_verify(&mut hash, &em, &digest, usize::MAX), None);
    assert_eq!(pss_verify(&mut hash, &em, &digest, MAX_KEY_BITS + 1), None);
}

#[test]
fn all_zero_and_all_ones_blocks_rejected() {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"junk");

    let mut zeros = vec![0u8; 256];
    zeros[255] = PSS_TRAILER;
    assert_eq!(pss_verify(&mut hash, &zeros, &digest, 2048), None);

    let mut ones = vec![0xFFu8; 256];
    ones[255] = PSS_TRAILER;
    assert_eq!(pss_verify(&mut hash, &ones, &digest, 2048), None);
}

// ## 3️⃣ Leading zero bytes dropped upstream

#[test]
fn short_candidate_is_left_padded() {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"leading zero");

    // find a salt whose encoding starts with 0x00 (expected within ~256 tries)
    let em = (0u32..5000)
        .map(|i| {
            let mut salt = [0u8; 32];
            salt[..4].copy_from_slice(&i.to_be_bytes());
            pss_encode(&mut hash, &digest, &salt, 2048).unwrap()
        })
        .find(|em| em[0] == 0)
        .expect("no encoding with a leading zero byte");

    assert_eq!(pss_verify(&mut hash, &em, &digest, 2048), Some(32));
    assert_eq!(pss_verify(&mut hash, &em[1..], &digest, 2048), Some(32));
}

// ## 4️⃣ Tamper sensitivity

#[test]
fn every_single_bit_flip_is_rejected() {
    let mut hash = DigestAlg::Sha256.instance();
    let digest = sha256(b"tamper");
    let em = pss_encode(&mut hash, &digest, &[0xA5u8; 32], 1023).unwrap();
    assert_eq!(pss_verify(&mut hash, &em, &digest, 1023), Some(32));

    for byte in 0..em.len() {
        for bit in 0..8 {
            let mut tampered = em.clone();
            tampered[byte] ^= 1 << bit;
            assert_eq!(
                pss_verify(&mut hash, &tampered, &digest, 1023),
                None,
                "flip at byte {byte} bit {bit} accepted"
            );
        }
    }
}

// ## 5️⃣ Interop: block recovered from an OpenSSL RSA-PSS signature
// (1024-bit modulus, SHA-256, salt 32, message "interop with openssl", EM = s^e mod n)

const OPENSSL_EM: &str = "53fe6459fd0a140c92b2d73c732a15e6c8c5d71083faa050f42f4156e7063c37\
                          4edd3228455e8ee30418e98972b76f1fe999d69490075cf642efd59b7737394d\
                          d8350aae2080f634bec1f05db5ae5f6e9a9e118195dde8a65e9f2e9171fd2b56\
                          56e501cadbd2d3a75a8f54bf2eaa26666029063a60064bc67519a96bc648f6bc";

#[test]
fn verifies_openssl_produced_block() {
    let em = hex::decode(OPENSSL_EM).unwrap();
    let digest = sha256(b"interop with openssl");
    assert_eq!(
        hex::encode(&digest),
        "09bf82fe8c883d1e98dc440a544a6ee8f69b31dd2a713a43f9ec18e1da78ec95"
    );

    let mut hash = DigestAlg::Sha256.instance();
    assert_eq!(pss_verify(&mut hash, &em, &digest, 1023), Some(32));
    assert_eq!(pss_verify(&mut hash, &em, &sha256(b"interop with openssl!"), 1023), None);
    // byte 0 has 7 significant bits: too many for a 1022-bit key
    assert_eq!(pss_verify(&mut hash, &em, &digest, 1022), None);
}
