//! Revert-reason extraction
//!
//! The demo flows deliberately trip contract guards and print the reason
//! the contract gave. Nodes surface that reason either as the ABI-encoded
//! `Error(string)` payload in the JSON-RPC error data, or folded into the
//! error message as `execution reverted: <reason>`.

use alloy::contract::Error as ContractError;

/// 4-byte selector of `Error(string)`.
const ERROR_SELECTOR: [u8; 4] = [0x08, 0xc3, 0x79, 0xa0];

const REVERTED_MARKER: &str = "execution reverted";

/// Pull the revert reason out of a failed contract call, if there is one.
pub fn revert_reason(err: &ContractError) -> Option<String> {
    let ContractError::TransportError(rpc_err) = err else {
        return None;
    };
    let payload = rpc_err.as_error_resp()?;

    // Prefer the ABI-encoded payload; it survives node-specific phrasing.
    if let Some(data) = payload.data.as_ref() {
        let text = data.get().trim_matches('"');
        if let Some(stripped) = text.strip_prefix("0x") {
            if let Some(reason) = hex::decode(stripped)
                .ok()
                .and_then(|bytes| decode_error_string(&bytes))
            {
                return Some(reason);
            }
        }
    }

    reason_from_message(&payload.message)
}

/// Decode the standard `Error(string)` ABI payload.
pub fn decode_error_string(data: &[u8]) -> Option<String> {
    let body = data.strip_prefix(ERROR_SELECTOR.as_slice())?;

    let offset = read_word(body.get(..32)?)?;
    let len = read_word(body.get(offset..offset + 32)?)?;
    let bytes = body.get(offset + 32..offset + 32 + len)?;

    String::from_utf8(bytes.to_vec()).ok()
}

/// Fall back to the `execution reverted: <reason>` message text.
fn reason_from_message(message: &str) -> Option<String> {
    let (_, rest) = message.split_once(REVERTED_MARKER)?;
    let reason = rest.trim_start_matches(':').trim();
    if reason.is_empty() {
        None
    } else {
        Some(reason.to_string())
    }
}

/// Read a 32-byte ABI word holding a small unsigned integer.
fn read_word(word: &[u8]) -> Option<usize> {
    if word.len() != 32 || word[..24].iter().any(|b| *b != 0) {
        return None;
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&word[24..]);
    Some(u64::from_be_bytes(buf) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ABI-encode `Error(reason)` the way a contract revert does.
    fn encode_error(reason: &str) -> Vec<u8> {
        let mut data = ERROR_SELECTOR.to_vec();

        let mut offset = [0u8; 32];
        offset[31] = 0x20;
        data.extend_from_slice(&offset);

        let mut len = [0u8; 32];
        len[24..].copy_from_slice(&(reason.len() as u64).to_be_bytes());
        data.extend_from_slice(&len);

        let mut bytes = reason.as_bytes().to_vec();
        bytes.resize(bytes.len().div_ceil(32) * 32, 0);
        data.extend_from_slice(&bytes);

        data
    }

    #[test]
    fn test_decode_error_string() {
        let data = encode_error("Item already registered");
        assert_eq!(
            decode_error_string(&data).as_deref(),
            Some("Item already registered")
        );
    }

    #[test]
    fn test_decode_empty_reason() {
        let data = encode_error("");
        assert_eq!(decode_error_string(&data).as_deref(), Some(""));
    }

    #[test]
    fn test_wrong_selector_rejected() {
        let mut data = encode_error("nope");
        data[0] = 0xff;
        assert_eq!(decode_error_string(&data), None);
    }

    #[test]
    fn test_truncated_payload_rejected() {
        let data = encode_error("Item already registered");
        assert_eq!(decode_error_string(&data[..40]), None);
    }

    #[test]
    fn test_reason_from_message() {
        assert_eq!(
            reason_from_message("execution reverted: Only the owner may burn").as_deref(),
            Some("Only the owner may burn")
        );
        assert_eq!(reason_from_message("execution reverted"), None);
        assert_eq!(reason_from_message("nonce too low"), None);
    }
}
