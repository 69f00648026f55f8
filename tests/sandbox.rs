/*
    The sandbox
*/

use exact_num::*;

fn add<V: Value>(x: &V, y: &V) -> Result<V> {
    x.add(y)
}

fn round_trip<V: Value>(x: &V, y: &V) -> Result<V> {
    let mut r = x.clone();
    r.add_in_place(y)?;
    r.sub_in_place(y)?;
    Ok(r)
}

#[test]
fn sandbox() {
    let a = Fraction::new(2, 3).unwrap();
    let b = Fraction::new(4, 5).unwrap();
    assert_eq!(add(&a, &b).unwrap().to_string(), "22/15");
    assert_eq!(round_trip(&a, &b).unwrap(), a);
    assert!(Value::sub(&a, &a).unwrap().is_zero());

    let u = RealVector::from([6.0, 9.0, 1.0]);
    let v = RealVector::from([7.0, 8.0, 1.0]);
    assert_eq!(add(&u, &v).unwrap().to_string(), "[13, 17, 2]");
    assert_eq!(round_trip(&u, &v).unwrap(), u);
    assert!(Value::sub(&u, &u).unwrap().is_zero());
}

#[test]
fn defaults() {
    assert!(Fraction::default().is_zero());
    assert!(Value::is_zero(&RealVector::default()));
    assert_eq!(Fraction::default().to_string(), "0/1");
    assert_eq!(RealVector::default().to_string(), "[]");
}

#[test]
fn errors_are_distinguishable() {
    let e = RealVector::new().at(0).unwrap_err();
    assert!(e.is_out_of_range() && !e.is_invalid_argument());

    let e = Fraction::new(1, 0).unwrap_err();
    assert!(e.is_invalid_argument() && !e.is_out_of_range());

    let e = "x".parse::<Fraction>().unwrap_err();
    assert!(e.is_parse());
}
