use sha3nist_corelib::{hash, hash_to_vec, init, KeccakState};
use tiny_keccak::{Hasher, Sha3};

#[test]
fn sha3_256_empty_message() {
    let mut out = [0u8; 32];
    hash(256, b"", 0, &mut out).unwrap();
    assert_eq!(
        hex::encode(out),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
}

#[test]
fn empty_message_all_lengths() {
    let vectors = [
        (
            224,
            "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
        ),
        (
            256,
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        ),
        (
            384,
            "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a\
             c3713831264adb47fb6bd1e058d5f004",
        ),
        (
            512,
            "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
             15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
        ),
    ];
    for (bits, expected) in vectors {
        assert_eq!(hex::encode(hash_to_vec(bits, b"").unwrap()), expected);
    }
}

#[test]
fn abc_vectors() {
    assert_eq!(
        hex::encode(hash_to_vec(256, b"abc").unwrap()),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );
    assert_eq!(
        hex::encode(hash_to_vec(512, b"abc").unwrap()),
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
    );
}

#[test]
fn one_shot_equals_streaming_for_every_length() {
    let msg: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    for bits in [224u32, 256, 384, 512] {
        for len in [0usize, 1, 71, 72, 73, 143, 144, 145, 1000] {
            let mut state = init(bits).unwrap();
            state.update(&msg[..len], len * 8).unwrap();
            let streamed = state.finalize_to_vec().unwrap();

            let mut one_shot = vec![0u8; bits as usize / 8];
            hash(bits, &msg, len * 8, &mut one_shot).unwrap();
            assert_eq!(streamed, one_shot, "bits={bits} len={len}");
        }
    }
}

#[test]
fn agrees_with_tiny_keccak() {
    let msg = b"streaming hash over a fixed-width sponge";
    let mut reference = Sha3::v256();
    reference.update(msg);
    let mut expected = [0u8; 32];
    reference.finalize(&mut expected);
    assert_eq!(hash_to_vec(256, msg).unwrap(), expected.to_vec());
}

#[test]
fn bit_tail_carries_the_sha3_suffix() {
    // Keccak padding over M || 01 is SHA3(M). The two suffix bits are the top
    // bits of the tail byte; the aligner moves them into place.
    let msg = b"partial byte path";
    let mut input = msg.to_vec();
    input.push(0b1000_0000);

    let mut state = KeccakState::init(256).unwrap();
    state.update(&input, msg.len() * 8 + 2).unwrap();
    let digest = state.finalize_to_vec().unwrap();

    assert_eq!(digest, hash_to_vec(256, msg).unwrap());
}

#[test]
fn tail_garbage_does_not_change_the_digest() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    hash(256, &[0x5A, 0b1100_0000], 11, &mut a).unwrap();
    hash(256, &[0x5A, 0b1101_1111], 11, &mut b).unwrap();
    assert_eq!(a, b);

    let mut c = [0u8; 32];
    hash(256, &[0x5A, 0b1110_0000], 11, &mut c).unwrap();
    assert_ne!(a, c);
}
