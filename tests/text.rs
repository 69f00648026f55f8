use exact_num::text::{ParseError, Scanner};
use exact_num::{Fraction, RealVector};

#[test]
fn reads_like_a_stream() {
    let mut s = Scanner::new("  12 -3.5e1\t+7 x ");
    assert_eq!(s.read_integer::<usize>("count"), Ok(12));
    assert_eq!(s.read_float("value"), Ok(-35.0));
    assert_eq!(s.read_integer::<i64>("value"), Ok(7));
    assert_eq!(s.read_char("marker"), Ok('x'));
    assert!(s.is_exhausted());
    assert_eq!(s.finish(), Ok(()));
}

#[test]
fn numbers_stop_at_non_numeric_characters() {
    let mut s = Scanner::new("3/4 2.5e 1.");
    assert_eq!(s.read_integer::<i64>("numerator"), Ok(3));
    assert_eq!(s.rest(), "/4 2.5e 1.");
    assert_eq!(s.read_char("separator"), Ok('/'));
    assert_eq!(s.read_integer::<i64>("denominator"), Ok(4));

    // a dangling exponent marker is left unread
    assert_eq!(s.read_float("value"), Ok(2.5));
    assert_eq!(s.read_char("marker"), Ok('e'));
    assert_eq!(s.read_float("value"), Ok(1.0));
}

#[test]
fn errors() {
    let mut s = Scanner::new("   ");
    assert_eq!(
        s.read_float("value"),
        Err(ParseError::UnexpectedEof { expected: "value" })
    );
    assert_eq!(
        s.read_char("separator"),
        Err(ParseError::UnexpectedEof {
            expected: "separator"
        })
    );

    let mut s = Scanner::new("- 1");
    assert_eq!(
        s.read_integer::<i64>("numerator"),
        Err(ParseError::InvalidToken {
            expected: "numerator",
            token: "-".to_string()
        })
    );

    let mut s = Scanner::new("99999999999999999999");
    assert!(matches!(
        s.read_integer::<i64>("numerator"),
        Err(ParseError::InvalidToken { .. })
    ));

    let mut s = Scanner::new("1 2");
    assert_eq!(s.read_integer::<i64>("value"), Ok(1));
    assert_eq!(
        s.finish(),
        Err(ParseError::TrailingInput {
            rest: "2".to_string()
        })
    );
}

#[test]
fn several_values_from_one_stream() {
    let mut s = Scanner::new("2 1.5 -2 \n 3/9 \n -1/2");
    let v = RealVector::read_from(&mut s).unwrap();
    let f = Fraction::read_from(&mut s).unwrap();
    let g = Fraction::read_from(&mut s).unwrap();
    s.finish().unwrap();

    assert_eq!(v.to_string(), "[1.5, -2]");
    assert_eq!(f.to_string(), "1/3");
    assert_eq!(g.to_string(), "-1/2");
}
