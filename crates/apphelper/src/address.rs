//! Throwaway cryptocurrency address generation.

use rand::Rng;

/// Base58 alphabet (no `0`, `O`, `I`, `l`).
const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of a P2PKH address, including the leading version character.
const ADDRESS_LEN: usize = 34;

/// Generate a random P2PKH-shaped Bitcoin address string.
///
/// The result has the right shape (leading `1`, Base58 alphabet, 34 chars)
/// but is not derived from any key: it is meant for fixtures, placeholders,
/// and demo data, never for receiving funds.
pub fn btc_address() -> String {
    let mut rng = rand::thread_rng();
    let mut address = String::with_capacity(ADDRESS_LEN);
    address.push('1');
    for _ in 1..ADDRESS_LEN {
        let idx = rng.gen_range(0..ALPHABET.len());
        address.push(ALPHABET[idx] as char);
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_shape() {
        let addr = btc_address();
        assert_eq!(addr.len(), ADDRESS_LEN);
        assert!(addr.starts_with('1'));
        assert!(addr.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_addresses_differ() {
        assert_ne!(btc_address(), btc_address());
    }
}
