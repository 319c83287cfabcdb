use std::cell::Cell;

use optio_core::{Absent, Opt, Scope};

fn sq(x: i32) -> Opt<i32> { Opt::from_some(x * x) }
fn err(_: i32) -> Opt<i32> { Opt::from_none() }

#[test]
fn some_protocol() {
  let s = Opt::from_some("TEST");

  assert!(s.is_some());
  assert!(!s.is_none());
  assert_eq!(s.unwrap(), "TEST");
  assert_eq!(s.expect(""), "TEST");
  assert_eq!(s.and(Opt::from_some("NYAN")), Opt::from_some("NYAN"));
  assert_eq!(s.and_then(|v| Opt::from_some(format!("{v}2"))), Opt::from_some("TEST2".to_string()));
  assert_eq!(s.or("FAIL"), "TEST");
  assert_eq!(s.or_else(|| "2"), "TEST");
  s.node(|err, val| {
    assert_eq!(err, None);
    assert_eq!(val, Some("TEST"));
  });

  let matched = Cell::new(None);
  s.match_with(Some(|v: &'static str| matched.set(Some(v))), Some(|| panic!("None handler called for Some")));
  assert_eq!(matched.get(), Some("TEST"));
}

#[test]
fn none_protocol() {
  let e = Opt::<&str>::from_none();

  assert!(!e.is_some());
  assert!(e.is_none());
  assert!(e.try_unwrap().is_err());
  assert!(e.try_expect("None").is_err());
  assert!(e.and(Opt::from_some("NYAN")).is_none());
  assert!(e.and_then(|v| Opt::from_some(format!("{v}2"))).is_none());
  assert_eq!(e.or("FAIL"), "FAIL");
  assert_eq!(e.or_else(|| "2"), "2");
  e.node(|err, val| {
    assert_eq!(err, Some(Absent));
    assert_eq!(val, None);
  });

  let matched = Cell::new(false);
  e.match_with(Some(|_: &str| panic!("Some handler called for None")), Some(|| matched.set(true)));
  assert!(matched.get());
}

#[test]
fn control_flow() {
  assert_eq!(Opt::from_some(2).or_else(|| 0), 2);
  assert_eq!(Opt::from_some(2).and_then(sq).or_else(|| 0), 4);
  assert_eq!(Opt::from_some(2).and_then(err).or(13), 13);
  assert_eq!(Opt::from_some(2).and_then(sq).or_else_opt(|| err(0)), Opt::from_some(4));
  assert_eq!(Opt::from_some(2).and_then(err).or_else_opt(|| err(0)).or(13), 13);
  assert_eq!(Opt::<i32>::from_none().or_else(|| 9), 9);
  assert!(Opt::from_none().and_then(sq).is_none());
}

#[test]
fn end_to_end_chains() {
  assert_eq!(Opt::from_some(2).and_then(|x| Opt::from_some(x * x)).or_else(|| 0), 4);
  assert_eq!(Opt::from_some(2).and_then(|_| Opt::<i32>::from_none()).or(13), 13);
}

#[test]
fn and_then_skips_function_on_none() {
  let calls = Cell::new(0);
  let result = Opt::<i32>::from_none().and_then(|x| {
    calls.set(calls.get() + 1);
    sq(x)
  });
  assert!(result.is_none());
  assert_eq!(calls.get(), 0);
}

#[test]
fn map_and_take() {
  let good = Opt::from_some("test");
  assert_eq!(good.map(|v| format!("{v}_ok")).unwrap(), "test_ok");
  assert!(Opt::<&str>::from_none().map(|v| format!("{v}_ok")).is_none());

  let mut some = Opt::from_some("");
  assert!(some.take().is_none());
  assert!(some.is_none());
  assert!(Opt::<&str>::from_none().take().is_none());
}

#[test]
fn map_in_place_is_visible_through_receiver() {
  let mut counter = Opt::from_some(1);
  counter.map_in_place(|v| v + 1);
  assert_eq!(counter.unwrap(), 2);

  let original = Opt::from_some(vec![1]);
  let mut copy = original.clone();
  copy.map_in_place(|mut v| {
    v.push(2);
    v
  });
  assert_eq!(original, Opt::from_some(vec![1]));
  assert_eq!(copy, Opt::from_some(vec![1, 2]));
}

#[test]
fn iteration_materializes_at_most_one() {
  assert_eq!(Opt::from_some(5).iter().copied().collect::<Vec<_>>(), vec![5]);
  assert_eq!(Opt::<i32>::from_none().iter().copied().collect::<Vec<_>>(), Vec::<i32>::new());
  let mut count = 0;
  for _ in &Opt::from_some('x') {
    count += 1;
  }
  assert_eq!(count, 1);
}

#[test]
fn scope_registration_is_idempotent() {
  let mut scope = Scope::new();
  scope.register_globals();
  scope.binding_mut("Some").unwrap().set_property("_test", "true");
  scope.register_globals();

  assert_eq!(scope.binding("Some").unwrap().property("_test"), Some("true"));
  assert!(scope.some("test").unwrap().is_some());
  assert!(scope.none().unwrap().is_none());
}
