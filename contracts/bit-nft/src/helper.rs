use super::*;

/// Append the decimal rendering of `value` to `string`.
pub fn push_decimal(string: &mut String, value: u32) {
    // u32::MAX has ten decimal digits.
    let mut digits = [0u8; 10];
    let mut remaining = value;
    let mut length = 0;
    loop {
        digits[length] = b'0' + (remaining % 10) as u8;
        remaining /= 10;
        length += 1;
        if remaining == 0 {
            break;
        }
    }
    while length > 0 {
        length -= 1;
        string.push(digits[length] as char);
    }
}

/// Decimal rendering of `value`.
pub fn decimal_string(value: u32) -> String {
    let mut string = String::new();
    push_decimal(&mut string, value);
    string
}

/// Build a token id from a mint sequence number. Token ids are the ASCII
/// decimal rendering of the sequence number.
pub fn token_id_from_sequence(sequence: u32) -> ContractTokenId {
    TokenIdVec(decimal_string(sequence).into_bytes())
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn decimal_formatting() {
        let cases: [(u32, &str); 6] = [
            (0, "0"),
            (1, "1"),
            (9, "9"),
            (10, "10"),
            (1234, "1234"),
            (u32::MAX, "4294967295"),
        ];
        for (value, expected) in cases.iter() {
            claim_eq!(decimal_string(*value), String::from(*expected));
        }
    }

    #[concordium_test]
    fn token_id_rendering() {
        claim_eq!(token_id_from_sequence(7), TokenIdVec(b"7".to_vec()));
        claim_eq!(token_id_from_sequence(20), TokenIdVec(b"20".to_vec()));
    }
}
