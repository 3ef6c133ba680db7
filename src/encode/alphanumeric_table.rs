/// Symbol value of `c` in the 45-character alphanumeric alphabet.
pub const fn value(c: char) -> Option<u8> {
    Some(match c {
        '0'..='9' => c as u8 - b'0',
        'A'..='Z' => c as u8 - b'A' + 10,
        ' ' => 36,
        '$' => 37,
        '%' => 38,
        '*' => 39,
        '+' => 40,
        '-' => 41,
        '.' => 42,
        '/' => 43,
        ':' => 44,
        _ => return None,
    })
}

#[test]
fn test_table_matches_charset() {
    const CHARSET: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

    for (i, c) in CHARSET.iter().enumerate() {
        assert_eq!(value(*c as char), Some(i as u8));
    }

    assert_eq!(value('a'), None);
    assert_eq!(value('!'), None);
    assert_eq!(value('é'), None);
}
