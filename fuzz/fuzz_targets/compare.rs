#![no_main]
use libfuzzer_sys::fuzz_target;
use person_name::PersonName;

fuzz_target!(|data: [String; 2]| {
    let [a, b] = data;
    if let (Ok(a), Ok(b)) = (PersonName::parse(&a), PersonName::parse(&b)) {
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        if a == b {
            assert_eq!(a.hash32(), b.hash32());
        }
    }
});
