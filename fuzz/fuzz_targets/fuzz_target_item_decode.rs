#![no_main]
use git_credential_op::core::matcher::matches;
use git_credential_op::credential::attributes::AttributeRecord;
use git_credential_op::vault::models::VaultItem;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding op output and matching against it should never panic
    if let Ok(item) = serde_json::from_slice::<VaultItem>(data) {
        let attrs = AttributeRecord::parse("protocol=https\nhost=example.com\npath=a/b.git\n");
        let _ = matches(&attrs, &item);
        let _ = item.field("credential");
    }
});
