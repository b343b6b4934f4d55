use visprog::collect::{CountPolicy, MAX_BARS, collect_series, read_count};
use visprog::prompt::{Console, PromptError};

fn console(script: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(script.as_bytes(), Vec::new())
}

fn transcript(c: &Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8_lossy(c.output()).into_owned()
}

#[test]
fn entries_keep_input_order_and_pairing() {
    let mut c = console("3\nA\n1\nB\n2\nC\n3\n");
    let s = collect_series(&mut c, &CountPolicy::data_points()).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.labels(), vec!["A", "B", "C"]);
    assert_eq!(s.values(), vec![1.0, 2.0, 3.0]);
    let out = transcript(&c);
    assert!(out.contains("Enter label 2: "));
    assert!(out.contains("Enter value 3: "));
}

#[test]
fn bar_count_over_cap_is_clamped() {
    let mut script = String::from("10\n");
    for i in 1..=MAX_BARS {
        script.push_str(&format!("bar{i}\n{i}\n"));
    }
    let mut c = console(&script);
    let s = collect_series(&mut c, &CountPolicy::bars()).unwrap();
    assert_eq!(s.len(), 6);
    assert_eq!(s.entries()[5].label, "bar6");
    let out = transcript(&c);
    assert!(out.contains("Maximum 6 bars allowed. Setting to 6."));
    assert!(out.contains("Enter label for bar 6: "));
    assert!(out.contains("Enter value for bar 1: "));
}

#[test]
fn non_positive_count_is_asked_again() {
    let mut c = console("0\n-4\nfive\n2\n");
    let n = read_count(&mut c, &CountPolicy::data_points()).unwrap();
    assert_eq!(n, 2);
    let out = transcript(&c);
    assert_eq!(out.matches("Error! Please enter a positive number.").count(), 2);
    assert_eq!(out.matches("Error! Please enter a valid number.").count(), 1);
}

#[test]
fn bad_values_reprompt_without_losing_the_label() {
    let mut c = console("1\nOnly\nten\n10\n");
    let s = collect_series(&mut c, &CountPolicy::data_points()).unwrap();
    assert_eq!(s.entries()[0].label, "Only");
    assert_eq!(s.entries()[0].value, 10.0);
}

#[test]
fn labels_are_kept_verbatim() {
    let mut c = console("1\n  North Region \n4.5\n");
    let s = collect_series(&mut c, &CountPolicy::data_points()).unwrap();
    assert_eq!(s.labels(), vec!["  North Region "]);
}

#[test]
fn running_out_of_input_surfaces() {
    let mut c = console("2\nA\n1\n");
    let r = collect_series(&mut c, &CountPolicy::data_points());
    assert!(matches!(r, Err(PromptError::InputClosed)));
}

#[test]
fn huge_count_is_collected_lazily() {
    let mut c = console("9223372036854775807\nA\n1\n");
    let r = collect_series(&mut c, &CountPolicy::data_points());
    assert!(matches!(r, Err(PromptError::InputClosed)));
    assert!(transcript(&c).contains("Enter label 2: "));
}
