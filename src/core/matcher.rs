use crate::credential::attributes::AttributeRecord;
use crate::vault::models::VaultItem;

/// Decides whether `item` holds the credential `attrs` asks for.
///
/// The item must carry a non-empty `hostname` equal to the requested host.
/// `path` and `username` only discriminate when both sides have a value.
pub fn matches(attrs: &AttributeRecord, item: &VaultItem) -> bool {
    // required
    match item.field_value("hostname") {
        Some(host) if !host.is_empty() && Some(host) == attrs.host.as_deref() => {}
        _ => return false,
    }
    // optional
    optional_eq(item.field_value("path"), attrs.path.as_deref())
        && optional_eq(item.field_value("username"), attrs.username.as_deref())
}

fn optional_eq(stored: Option<&str>, requested: Option<&str>) -> bool {
    match (stored, requested) {
        (Some(s), Some(r)) if !s.is_empty() && !r.is_empty() => s == r,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::models::{FieldType, VaultField};

    fn field(id: &str, label: &str, value: &str) -> VaultField {
        VaultField {
            id: id.into(),
            label: label.into(),
            field_type: FieldType::String,
            value: value.into(),
            ..Default::default()
        }
    }

    fn item(extra: Vec<VaultField>) -> VaultItem {
        let mut fields = vec![
            field("username", "username", "qux"),
            VaultField {
                field_type: FieldType::Concealed,
                ..field("credential", "credential", "wat")
            },
        ];
        fields.extend(extra);
        VaultItem {
            id: "abc".into(),
            fields,
            ..Default::default()
        }
    }

    fn attrs(input: &str) -> AttributeRecord {
        AttributeRecord::parse(input)
    }

    #[test]
    fn host_match() {
        let it = item(vec![field("hostname", "hostname", "foo.com")]);
        assert!(matches(&attrs("protocol=https\nhost=foo.com\npath=bar/baz.git\n"), &it));
    }

    #[test]
    fn host_missing_never_matches() {
        let it = item(vec![field("7kdfaup5", "path", "bar/baz.git")]);
        assert!(!matches(&attrs("protocol=https\nhost=foo.com\npath=bar/baz.git\n"), &it));
    }

    #[test]
    fn empty_hostname_never_matches() {
        let it = item(vec![field("hostname", "hostname", "")]);
        assert!(!matches(&attrs("protocol=https\n"), &it));
    }

    #[test]
    fn host_mismatch() {
        let it = item(vec![field("hostname", "hostname", "foo.com")]);
        assert!(!matches(&attrs("protocol=https\nhost=bar.com\n"), &it));
    }

    #[test]
    fn path_match_and_mismatch() {
        let it = item(vec![
            field("hostname", "hostname", "foo.com"),
            field("7kdfaup5ymst4ujtcvo5wl35cu", "path", "bar/baz.git"),
        ]);
        assert!(matches(&attrs("host=foo.com\npath=bar/baz.git\n"), &it));
        assert!(!matches(&attrs("host=foo.com\npath=bar/qux.git\n"), &it));
        // no path requested
        assert!(matches(&attrs("host=foo.com\n"), &it));
    }

    #[test]
    fn item_without_path_matches_any_path() {
        let it = item(vec![field("hostname", "hostname", "foo.com")]);
        assert!(matches(&attrs("host=foo.com\npath=any/repo.git\n"), &it));
    }

    #[test]
    fn username_match_and_mismatch() {
        let it = item(vec![field("hostname", "hostname", "foo.com")]);
        assert!(matches(&attrs("host=foo.com\nusername=qux\n"), &it));
        assert!(!matches(&attrs("host=foo.com\nusername=wat\n"), &it));
    }

    #[test]
    fn other_attributes_are_irrelevant() {
        let it = item(vec![field("hostname", "hostname", "foo.com")]);
        assert!(matches(
            &attrs("protocol=http\nhost=foo.com\npassword=nope\nurl=https://x\n"),
            &it
        ));
    }
}
