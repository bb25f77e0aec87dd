use types::{PUBKEY_LEN, Pubkey, SUCCESS};

#[test]
fn test_hex_formatting() {
    let mut bytes = [0u8; PUBKEY_LEN];
    bytes[0] = 0x01;
    bytes[1] = 0xab;
    bytes[31] = 0xff;
    let key = Pubkey::new(bytes);

    let rendered = format!("{}", key);
    assert_eq!(rendered.len(), PUBKEY_LEN * 2);
    assert!(rendered.starts_with("01ab"));
    assert!(rendered.ends_with("ff"));
    assert_eq!(format!("{:?}", key), rendered);
}

#[test]
fn test_from_slice_round_trip() {
    let bytes: Vec<u8> = (0..PUBKEY_LEN as u8).collect();
    let key = Pubkey::from_slice(&bytes);

    assert_eq!(key.to_bytes().as_slice(), bytes.as_slice());
    assert_eq!(key, Pubkey::from_slice(&bytes));
}

#[test]
fn test_success_is_zero() {
    assert_eq!(SUCCESS, 0);
}
