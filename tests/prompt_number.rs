use visprog::prompt::{Bounds, Console, PromptError};

fn console(script: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(script.as_bytes(), Vec::new())
}

fn transcript(c: &Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8_lossy(c.output()).into_owned()
}

#[test]
fn above_max_is_clamped_to_max() {
    let mut c = console("5.0\n");
    let v: f64 = c
        .read_number("Width: ", None, Bounds::between(0.1, 1.0))
        .unwrap();
    assert_eq!(v, 1.0);
    assert!(transcript(&c).contains("above the maximum; using 1."));
}

#[test]
fn below_min_is_clamped_to_min() {
    let mut c = console("0.01\n");
    let v: f64 = c
        .read_number("Width: ", None, Bounds::between(0.1, 1.0))
        .unwrap();
    assert_eq!(v, 0.1);
    assert!(transcript(&c).contains("below the minimum; using 0.1."));
}

#[test]
fn empty_answer_takes_default() {
    let mut c = console("\n");
    let v: f64 = c
        .read_number("Width: ", Some(0.5), Bounds::between(0.1, 1.0))
        .unwrap();
    assert_eq!(v, 0.5);
    assert!(transcript(&c).contains("Using default: 0.5"));
}

#[test]
fn garbage_is_reprompted_not_returned() {
    let mut c = console("abc\n\n7\n");
    let v: i64 = c.read_number("Count: ", None, Bounds::none()).unwrap();
    assert_eq!(v, 7);
    let out = transcript(&c);
    assert_eq!(out.matches("Error! Please enter a valid number.").count(), 2);
    assert_eq!(out.matches("Count: ").count(), 3);
}

#[test]
fn integer_kind_rejects_reals() {
    let mut c = console("2.5\n3\n");
    let v: i32 = c.read_number("n: ", None, Bounds::none()).unwrap();
    assert_eq!(v, 3);
}

#[test]
fn in_range_value_is_returned_silently() {
    let mut c = console(" 0.75 \n");
    let v: f64 = c
        .read_number("Width: ", Some(0.5), Bounds::between(0.1, 1.0))
        .unwrap();
    assert_eq!(v, 0.75);
    assert_eq!(transcript(&c), "Width: ");
}

#[test]
fn exhausted_input_is_an_error() {
    let mut c = console("x\n");
    let r = c.read_number::<f64>("v: ", None, Bounds::none());
    assert!(matches!(r, Err(PromptError::InputClosed)));
}
