//! Payout wallet address helpers.

/// Required prefix of a wallet address.
pub const WALLET_PREFIX: &str = "0x";

/// Total length of a wallet address, prefix included.
pub const WALLET_LEN: usize = 42;

const SHORT_HEAD: usize = 10;
const SHORT_TAIL: usize = 8;

/// Check the wallet format: `0x` followed by exactly 40 more characters.
///
/// Only the prefix and length are checked, not the hex digits.
pub fn is_valid_wallet(wallet: &str) -> bool {
    wallet.starts_with(WALLET_PREFIX) && wallet.chars().count() == WALLET_LEN
}

/// Shorten a wallet for table display, e.g. `0x12345678...9abcdef0`.
pub fn shorten_wallet(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() <= SHORT_HEAD + SHORT_TAIL {
        return wallet.to_string();
    }
    let head: String = chars[..SHORT_HEAD].iter().collect();
    let tail: String = chars[chars.len() - SHORT_TAIL..].iter().collect();
    format!("{head}...{tail}")
}
