//! Conversion from raw `ldap3` search entries into directory records.
//!
//! Attribute names are matched case-insensitively; servers are free to return them in any case.

use adgroups_common::directory::{GroupRecord, UserRecord};
use ldap3::SearchEntry;

/// First textual value of `name`, if any.
pub fn first_value(entry: &SearchEntry, name: &str) -> Option<String> {
    entry
        .attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first().cloned())
}

/// All values of `name` as raw bytes.
///
/// `ldap3` only files an attribute under `bin_attrs` when one of its values is not valid UTF-8,
/// so binary attributes such as SIDs may just as well sit in `attrs`.
pub fn binary_values(entry: &SearchEntry, name: &str) -> Vec<Vec<u8>> {
    if let Some((_, values)) = entry
        .bin_attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
    {
        return values.clone();
    }

    entry
        .attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, values)| values.iter().cloned().map(String::into_bytes).collect())
        .unwrap_or_default()
}

pub fn to_group_record(entry: &SearchEntry) -> GroupRecord {
    let distinguished_name = first_value(entry, "distinguishedName")
        .or_else(|| Some(entry.dn.clone()).filter(|dn| !dn.is_empty()));

    GroupRecord {
        display_name: first_value(entry, "displayName"),
        common_name: first_value(entry, "cn"),
        account_name: first_value(entry, "sAMAccountName"),
        distinguished_name,
    }
}

/// `requested` is used when the entry does not echo its own `sAMAccountName`.
pub fn to_user_record(entry: SearchEntry, requested: &str) -> UserRecord {
    let account_name =
        first_value(&entry, "sAMAccountName").unwrap_or_else(|| requested.to_string());
    let security_id = binary_values(&entry, "objectSid").into_iter().next();
    let primary_group_id =
        first_value(&entry, "primaryGroupID").and_then(|rid| rid.trim().parse().ok());

    UserRecord {
        account_name,
        distinguished_name: entry.dn,
        security_id,
        primary_group_id,
    }
}
