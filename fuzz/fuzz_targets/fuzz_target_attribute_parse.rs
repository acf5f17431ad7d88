#![no_main]
use git_credential_op::credential::attributes::AttributeRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any byte stream is accepted, and its output must parse back to itself
    let once = AttributeRecord::read_from(data)
        .expect("reading a slice cannot fail")
        .serialize();
    let twice = AttributeRecord::parse(&once).serialize();
    assert_eq!(once, twice);
});
