//! LDAP search filters used against Active Directory.

use ldap3::ldap_escape;

use crate::sid::escape_filter_bytes;

/// OID of `LDAP_MATCHING_RULE_IN_CHAIN`, which walks nested memberships server-side.
pub const MATCHING_RULE_IN_CHAIN: &str = "1.2.840.113556.1.4.1941";

/// Matches a user account by short logon name.
pub fn user_by_account_name(account_name: &str) -> String {
    format!(
        "(&(objectCategory=person)(objectClass=user)(sAMAccountName={}))",
        ldap_escape(account_name)
    )
}

/// Matches every object whose `objectSid` is one of `sids`.
pub fn any_object_sid(sids: &[Vec<u8>]) -> String {
    let clauses: String = sids
        .iter()
        .map(|sid| format!("(objectSid={})", escape_filter_bytes(sid)))
        .collect();
    format!("(|{clauses})")
}

/// Matches every group `user_dn` belongs to, directly or through nesting.
pub fn groups_in_chain(user_dn: &str) -> String {
    format!(
        "(&(objectClass=group)(member:{MATCHING_RULE_IN_CHAIN}:={}))",
        ldap_escape(user_dn)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_account_name() {
        assert_eq!(
            user_by_account_name("j*doe"),
            "(&(objectCategory=person)(objectClass=user)(sAMAccountName=j\\2adoe))"
        );
    }

    #[test]
    fn builds_sid_disjunction() {
        let filter = any_object_sid(&[vec![0x01, 0x00], vec![0xab]]);
        assert_eq!(filter, "(|(objectSid=\\01\\00)(objectSid=\\ab))");
    }

    #[test]
    fn in_chain_filter_escapes_dn() {
        assert_eq!(
            groups_in_chain("CN=Doe\\, John (IT),DC=corp"),
            "(&(objectClass=group)(member:1.2.840.113556.1.4.1941:=CN=Doe\\5c, John \\28IT\\29,DC=corp))"
        );
    }
}
