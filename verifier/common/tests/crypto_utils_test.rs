use tcg_common_verifier::{AlgorithmId, DigestCalculator};

/// Test Objective: Verify digest computation against FIPS 180 known-answer vectors
/// Expected Result: Computed digests of "abc" match the published values
#[test]
fn test_compute_digest_known_vectors() {
    let cases = [
        (AlgorithmId::Sha1, "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (AlgorithmId::Sha256, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"),
        (
            AlgorithmId::Sha384,
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7",
        ),
        (
            AlgorithmId::Sha512,
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
        ),
    ];

    for (alg, expected_hex) in cases {
        let digest = DigestCalculator::compute_digest(alg, b"abc").unwrap();
        assert_eq!(hex::encode(&digest), expected_hex.replace(char::is_whitespace, ""), "algorithm {}", alg);
    }
}

/// Test Objective: Verify the digests of a normal all-zero separator payload
/// Expected Result: Matches the well-known values seen in real PC Client logs
#[test]
fn test_compute_digest_separator_payload() {
    let payload = [0u8; 4];

    let sha1 = DigestCalculator::compute_digest(AlgorithmId::Sha1, &payload).unwrap();
    assert_eq!(hex::encode(&sha1), "9069ca78e7450a285173431b3e52c5c25299e473");

    let sha256 = DigestCalculator::compute_digest(AlgorithmId::Sha256, &payload).unwrap();
    assert_eq!(hex::encode(&sha256), "df3f619804a92fdb4057192dc43dd748ea778adc52bc498ce80524c014b81119");
}

/// Test Objective: Verify digest lengths match the algorithm's fixed size
/// Expected Result: Output length equals digest_size() for every algorithm
#[test]
fn test_compute_digest_lengths() {
    for alg in [AlgorithmId::Sha1, AlgorithmId::Sha256, AlgorithmId::Sha384, AlgorithmId::Sha512] {
        let digest = DigestCalculator::compute_digest(alg, b"").unwrap();
        assert_eq!(digest.len(), alg.digest_size());
    }
}

/// Test Objective: Verify the all-zero digest helper
/// Expected Result: Correct length and every byte zero
#[test]
fn test_zero_digest() {
    for alg in [AlgorithmId::Sha1, AlgorithmId::Sha256, AlgorithmId::Sha384, AlgorithmId::Sha512] {
        let zero = DigestCalculator::zero_digest(alg);
        assert_eq!(zero.len(), alg.digest_size());
        assert!(zero.iter().all(|b| *b == 0));
    }
}
