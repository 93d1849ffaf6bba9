use quickcheck::{quickcheck, TestResult};
use regex_fsm::{build, is_match, Automaton, BuildError};

#[test]
fn reference_scenarios() {
    let re = build("a*4.+hi").unwrap();
    let cases = [
        ("aaaaaa4uhi", true),
        ("4uhi", true),
        ("meow", false),
        ("4hi", false),
        ("a4xxhi", true),
    ];
    for (input, expected) in cases {
        assert_eq!(re.is_match(input), expected, "input: {:?}", input);
    }
}

#[test]
fn construction_errors_surface() {
    assert!(matches!(
        build("*abc"),
        Err(BuildError::InvalidPattern { quantifier: '*', .. })
    ));
    assert!(matches!(
        build("+x"),
        Err(BuildError::InvalidPattern { quantifier: '+', .. })
    ));
    assert!(matches!(
        build("[abc"),
        Err(BuildError::UnclosedCharacterClass { .. })
    ));
    assert!(is_match("anything", "[abc").is_err());
}

#[test]
fn one_shot_helper() {
    assert_eq!(is_match("hello", "h.l+o"), Ok(true));
    assert_eq!(is_match("heo", "h.l+o"), Ok(false));
}

#[test]
fn shared_across_threads() {
    let re = std::sync::Arc::new(Automaton::new("[0-9]+x*").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let re = re.clone();
            std::thread::spawn(move || re.is_match(&format!("{}xx", i)))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

quickcheck! {
    fn prop_plain_pattern_matches_only_itself(s: String) -> TestResult {
        if s.contains(['.', '*', '+', '[']) {
            return TestResult::discard();
        }
        let re = build(&s).unwrap();
        let longer = format!("{}x", s);
        TestResult::from_bool(re.is_match(&s) && !re.is_match(&longer))
    }

    fn prop_wildcards_match_by_length(s: String) -> bool {
        let n = s.chars().count();
        let exact = build(&".".repeat(n)).unwrap();
        let one_more = build(&".".repeat(n + 1)).unwrap();
        exact.is_match(&s) && !one_more.is_match(&s)
    }

    fn prop_star_and_plus_count(n: u8) -> bool {
        let input = "a".repeat(usize::from(n % 32));
        let star = build("a*").unwrap();
        let plus = build("a+").unwrap();
        star.is_match(&input) && plus.is_match(&input) == !input.is_empty()
    }

    fn prop_negated_class_is_complement(c: char) -> bool {
        let input = c.to_string();
        let class = build("[a-fxyz]").unwrap();
        let negated = build("[^a-fxyz]").unwrap();
        class.is_match(&input) != negated.is_match(&input)
    }
}
