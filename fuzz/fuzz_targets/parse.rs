#![no_main]
use libfuzzer_sys::fuzz_target;
use person_name::PersonName;

fuzz_target!(|data: &str| {
    if let Ok(name) = PersonName::parse(data) {
        let again = PersonName::from_canonical(name.as_str()).unwrap();
        assert_eq!(name, again);
        assert_eq!(name.hash32(), again.hash32());
        name.display_name();
    }
});
