extern crate person_name;

use person_name::{ParseErrorKind, PersonName};
use std::cmp::Ordering;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn fixture_lines(path: &str) -> Vec<String> {
    let f = File::open(path).ok().unwrap();
    let reader = BufReader::new(f);

    reader
        .lines()
        .map(|line| line.ok().unwrap())
        .filter(|line| !line.starts_with('#') && !line.is_empty())
        .collect()
}

fn kind_from_name(name: &str) -> ParseErrorKind {
    match name {
        "BadArity" => ParseErrorKind::BadArity,
        "MissingField" => ParseErrorKind::MissingField,
        "InvalidFamily" => ParseErrorKind::InvalidFamily,
        "InvalidGiven" => ParseErrorKind::InvalidGiven,
        _ => panic!("Unknown error kind in fixture: {}", name),
    }
}

#[test]
fn parsing() {
    for line in fixture_lines("tests/parseable-names.txt") {
        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let family = parts[1];
        let given = parts[2];
        let display = parts[3];
        let canonical = parts[4];

        let name = PersonName::parse(input);
        assert!(name.is_ok(), "[{}] Could not parse: {:?}", input, name);

        let name = name.unwrap();
        assert!(name.family() == family,
                "[{}] Expected family {}, got {}",
                input,
                family,
                name.family());
        assert!(name.given() == given,
                "[{}] Expected given {}, got {}",
                input,
                given,
                name.given());
        assert!(name.display_name() == display,
                "[{}] Expected display name {}, got {}",
                input,
                display,
                name.display_name());
        assert!(name.as_str() == canonical,
                "[{}] Expected canonical form {}, got {}",
                input,
                canonical,
                name.as_str());
    }
}

#[test]
fn unparseable() {
    for line in fixture_lines("tests/unparseable-names.txt") {
        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let expected = kind_from_name(parts[1]);

        match PersonName::parse(input) {
            Ok(name) => panic!("'Parsed' invalid name: '{}' as '{}'", input, name),
            Err(err) => {
                assert!(err.kind() == expected,
                        "[{}] Expected {:?}, got {:?}",
                        input,
                        expected,
                        err.kind());
                assert_eq!(input, err.input());
                assert!(err.to_string().contains(input));
            }
        }
    }
}

#[test]
fn round_trip() {
    for line in fixture_lines("tests/parseable-names.txt") {
        let input = line.split('|').next().unwrap();
        let name = PersonName::parse(input).unwrap();
        let reparsed = PersonName::parse(person_name::format(&name)).unwrap();

        assert_eq!(name, reparsed);
        assert_eq!(name.as_str(), reparsed.as_str());
        assert_eq!(name, PersonName::from_canonical(name.as_str()).unwrap());
    }
}

#[test]
fn ordering() {
    let names: Vec<PersonName> = fixture_lines("tests/ordered-names.txt")
        .iter()
        .map(|line| PersonName::parse(line).unwrap())
        .collect();

    for (i, a) in names.iter().enumerate() {
        assert_eq!(Ordering::Equal, person_name::compare(a, a));
        for b in &names[i + 1..] {
            assert!(person_name::lt(a, b), "{} should sort before {}", a, b);
            assert!(person_name::gt(b, a), "{} should sort after {}", b, a);
            assert!(person_name::not_equals(a, b));
        }
    }

    let mut shuffled = names.clone();
    shuffled.reverse();
    shuffled.rotate_left(names.len() / 3);
    shuffled.sort();
    assert_eq!(names, shuffled);
}

#[test]
fn documented_examples() {
    let smith_john = person_name::parse("Smith,John").unwrap();
    let smith_zack = person_name::parse("Smith,Zack").unwrap();
    let adams_zack = person_name::parse("Adams,Zack").unwrap();
    let smith_ann = person_name::parse("Smith,Ann").unwrap();

    assert_eq!(smith_john, person_name::parse("Smith, John").unwrap());
    assert_eq!(Ordering::Less, person_name::compare(&smith_john, &smith_zack));
    assert_eq!(Ordering::Less, person_name::compare(&adams_zack, &smith_ann));
    assert_eq!("Smith", person_name::family(&smith_john));
    assert_eq!("John", person_name::given(&smith_john));

    let van_der_berg = person_name::parse("Van Der Berg,John Michael").unwrap();
    assert_eq!("John Van Der Berg", person_name::display(&van_der_berg));
}
