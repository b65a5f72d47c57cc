//! Chaskey-LTS CTR tests

use chaskey::{ChaskeyCtr, ChaskeyCtrCore, Error, new_ctr, process, process_in_place};
use cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use hex_literal::hex;
use std::collections::HashSet;

cipher::stream_cipher_seek_test!(chaskey_ctr_seek, ChaskeyCtr);

const KEY_REF: [u8; 16] = *b"0123456789012345";

const IV_REF: [u8; 16] = *b"0000000000000000";

const KEY0: [u8; 16] = [0; 16];

const KEY1: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

const IV0: [u8; 16] = [0; 16];

const IV1: [u8; 16] = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff");

const IV_WRAP: [u8; 16] = hex!("fffffffffffffffffffffffffffffffe");

const EXPECTED_KEY0_IV0: [u8; 48] = hex!(
    "00000000000000000000000000000000"
    "827a6b95b23fc564830b1795b9c9d5ba"
    "2ebacf461c5b6c1792d8a2ca62a17e3a"
);

const EXPECTED_KEY1_IV1: [u8; 40] = hex!(
    "3c2ab948775f46a7bdf6a840b69cf325"
    "401ffd04782c9f5beced3458556c5dc8"
    "20b101ca172feb82"
);

const EXPECTED_KEY1_IV_WRAP: [u8; 48] = hex!(
    "813e0e72c9930b552f0183754aa353da"
    "53e5c08afa809e19f8f8204e959a90f0"
    "6f7f63643cbb612fb78f949c4d9b4799"
);

const PLAINTEXT_FOX: &[u8; 44] = b"The quick brown fox jumps over the lazy dog.";

const CIPHERTEXT_FOX: [u8; 44] = hex!(
    "19dddcf592e38b32f04d70d5bb72919a"
    "22066f5f5710ad5fae5244cfc14cb28d"
    "c71ed98d90f9e34f4989eca3"
);

#[test]
fn reference_encrypt() {
    let mut cipher = ChaskeyCtr::new(&KEY_REF.into(), &IV_REF.into());
    let mut buf = *b"foo";
    cipher.apply_keystream(&mut buf);
    assert_eq!(buf, hex!("2bdad6"));
}

#[test]
fn reference_decrypt() {
    let mut cipher = ChaskeyCtr::new(&KEY_REF.into(), &IV_REF.into());
    let mut buf = hex!("2bdad6");
    cipher.apply_keystream(&mut buf);
    assert_eq!(&buf, b"foo");
}

#[test]
fn chaskey_key0_iv0() {
    let mut cipher = ChaskeyCtr::new(&KEY0.into(), &IV0.into());
    let mut buf = [0; 48];

    cipher.apply_keystream(&mut buf);

    assert_eq!(buf, EXPECTED_KEY0_IV0);
}

#[test]
fn chaskey_key1_iv1() {
    for n in 1..40 {
        let mut cipher = ChaskeyCtr::new(&KEY1.into(), &IV1.into());
        let mut buf = EXPECTED_KEY1_IV1;
        for chunk in buf.chunks_mut(n) {
            cipher.apply_keystream(chunk);
        }
        assert!(buf.iter().all(|&v| v == 0));
    }
}

#[test]
fn chaskey_counter_block_wraps() {
    let mut cipher = ChaskeyCtr::new(&KEY1.into(), &IV_WRAP.into());
    let mut buf = [0; 48];

    cipher.apply_keystream(&mut buf);

    assert_eq!(buf, EXPECTED_KEY1_IV_WRAP);
}

#[test]
fn chaskey_message() {
    let ciphertext = process(&KEY_REF, &IV_REF, PLAINTEXT_FOX).unwrap();
    assert_eq!(ciphertext, CIPHERTEXT_FOX);

    let plaintext = process(&KEY_REF, &IV_REF, &ciphertext).unwrap();
    assert_eq!(&plaintext[..], &PLAINTEXT_FOX[..]);
}

#[test]
fn session_continues_keystream() {
    let mut cipher = ChaskeyCtr::new(&KEY_REF.into(), &IV_REF.into());
    let mut buf = *PLAINTEXT_FOX;
    let (head, tail) = buf.split_at_mut(7);
    cipher.apply_keystream(head);
    cipher.apply_keystream(tail);
    assert_eq!(buf, CIPHERTEXT_FOX);
    assert_eq!(cipher.current_pos::<u64>(), 44);
}

#[test]
fn seek_into_block() {
    let mut cipher = ChaskeyCtr::new(&KEY1.into(), &IV1.into());
    cipher.seek(21u32);
    let mut buf = [0; 19];
    cipher.apply_keystream(&mut buf);
    assert_eq!(buf, EXPECTED_KEY1_IV1[21..]);
}

#[test]
fn short_nonce_is_zero_padded() {
    let short = process(&KEY1, &hex!("010203"), &[0; 20]).unwrap();
    let padded = process(&KEY1, &hex!("01020300000000000000000000000000"), &[0; 20]).unwrap();
    assert_eq!(short, padded);
    assert_eq!(short, hex!("f1658fb6519c6cd72c76714417f4b2ddd4d0119a"));
}

#[test]
fn empty_nonce_is_zero_nonce() {
    let mut buf = [0; 48];
    process_in_place(&KEY0, &[], &mut buf).unwrap();
    assert_eq!(buf, EXPECTED_KEY0_IV0);
}

#[test]
fn output_length_matches_input() {
    for len in [0, 1, 15, 16, 17, 37, 64, 1000] {
        let input = vec![0xa5; len];
        let output = process(&KEY_REF, &IV_REF, &input).unwrap();
        assert_eq!(output.len(), len);
    }
}

#[test]
fn xor_involution() {
    let message: Vec<u8> = (0..=255u8).cycle().take(300).collect();
    for len in 0..=message.len() {
        let m = &message[..len];
        let ct = process(&KEY1, &IV1, m).unwrap();
        let pt = process(&KEY1, &IV1, &ct).unwrap();
        assert_eq!(pt, m);
    }
}

#[test]
fn round_trip_empty_and_single_byte() {
    assert_eq!(process(&KEY1, &IV0, &[]).unwrap(), Vec::<u8>::new());

    let ct = process(&KEY1, &IV0, &[0x42]).unwrap();
    assert_eq!(ct.len(), 1);
    assert_eq!(process(&KEY1, &IV0, &ct).unwrap(), [0x42]);
}

#[test]
fn distinct_keystream_blocks() {
    let core = ChaskeyCtrCore::new(&KEY1.into(), &IV1.into());
    let mut seen = HashSet::new();
    for counter in 0..(1u64 << 20) {
        let block = core.keystream_block(counter);
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&block);
        assert!(seen.insert(bytes), "repeated keystream block at {counter}");
    }
}

#[test]
fn invalid_lengths() {
    let mut buf = [0u8; 4];
    assert_eq!(
        process_in_place(&KEY_REF[..15], &IV_REF, &mut buf),
        Err(Error::InvalidKeyLength)
    );
    assert_eq!(
        process_in_place(&[0; 17], &IV_REF, &mut buf),
        Err(Error::InvalidKeyLength)
    );
    assert_eq!(
        process_in_place(&KEY_REF, &[0; 17], &mut buf),
        Err(Error::InvalidNonceLength)
    );
    // nothing was written
    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn counter_exhausted() {
    let mut cipher = new_ctr(&KEY1, &IV1).unwrap();
    cipher.seek(u128::from(u64::MAX - 1) * 16);

    let mut block = [0u8; 16];
    assert!(cipher.try_apply_keystream(&mut block).is_ok());

    let mut byte = [0u8; 1];
    let err = cipher.try_apply_keystream(&mut byte).unwrap_err();
    assert_eq!(Error::from(err), Error::CounterExhausted);
    assert_eq!(byte, [0]);
}
