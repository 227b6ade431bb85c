//! Binary security identifiers (SIDs) as found in `objectSid` and `tokenGroups`.
//!
//! Layout: revision (1 byte), sub-authority count `n` (1 byte), identifier authority
//! (6 bytes, big-endian), then `n` sub-authorities (4 bytes each, little-endian).

use std::fmt::Write as _;

const HEADER_LEN: usize = 8;

/// Renders a binary SID in its `S-1-5-21-...` string form.
///
/// Returns `None` if `bytes` is not a well-formed SID.
pub fn format_sid(bytes: &[u8]) -> Option<String> {
    if bytes.len() < HEADER_LEN {
        return None;
    }

    let revision = bytes[0];
    let count = bytes[1] as usize;
    if bytes.len() != HEADER_LEN + count * 4 {
        return None;
    }

    let authority = bytes[2..HEADER_LEN]
        .iter()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));

    let mut out = format!("S-{revision}-{authority}");
    for chunk in bytes[HEADER_LEN..].chunks_exact(4) {
        let sub = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let _ = write!(out, "-{sub}");
    }
    Some(out)
}

/// SID of the account's primary group: the account's domain SID with its last
/// sub-authority replaced by `primaryGroupID`.
///
/// Returns `None` if `account_sid` is malformed or has no sub-authority.
pub fn primary_group_sid(account_sid: &[u8], primary_group_id: u32) -> Option<Vec<u8>> {
    format_sid(account_sid)?;
    if account_sid[1] == 0 {
        return None;
    }

    let mut sid = account_sid.to_vec();
    let rid_at = sid.len() - 4;
    sid[rid_at..].copy_from_slice(&primary_group_id.to_le_bytes());
    Some(sid)
}

/// Escapes arbitrary bytes for use as an LDAP filter value (`\xx` per byte).
pub fn escape_filter_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        let _ = write!(out, "\\{byte:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // S-1-5-32-544 (BUILTIN\Administrators)
    const ADMINISTRATORS: [u8; 16] = [
        0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05, 0x20, 0x00, 0x00, 0x00, 0x20, 0x02, 0x00,
        0x00,
    ];

    #[test]
    fn formats_builtin_sid() {
        assert_eq!(format_sid(&ADMINISTRATORS).as_deref(), Some("S-1-5-32-544"));
    }

    #[test]
    fn rejects_truncated_sid() {
        assert_eq!(format_sid(&ADMINISTRATORS[..12]), None);
        assert_eq!(format_sid(&[0x01]), None);
    }

    #[test]
    fn derives_primary_group_from_account_sid() {
        // S-1-5-21-1-2-3-1104
        let mut account = vec![0x01, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05];
        for sub in [21u32, 1, 2, 3, 1104] {
            account.extend_from_slice(&sub.to_le_bytes());
        }

        let primary = primary_group_sid(&account, 513).unwrap();

        assert_eq!(format_sid(&primary).as_deref(), Some("S-1-5-21-1-2-3-513"));
    }

    #[test]
    fn primary_group_needs_a_sub_authority() {
        assert_eq!(primary_group_sid(&[0x01, 0x00, 0, 0, 0, 0, 0, 5], 513), None);
        assert_eq!(primary_group_sid(&ADMINISTRATORS[..10], 513), None);
    }

    #[test]
    fn escapes_every_byte() {
        assert_eq!(escape_filter_bytes(&[0x01, 0x2a, 0xff]), "\\01\\2a\\ff");
        assert_eq!(escape_filter_bytes(&[]), "");
    }
}
