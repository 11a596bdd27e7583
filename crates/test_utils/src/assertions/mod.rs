//! Assertion utilities for testing

/// Assert that a value is within a specific inclusive range
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $min:expr, $max:expr) => {
        assert!($value >= $min && $value <= $max, "{} not in range [{}, {}]", $value, $min, $max);
    };
    ($value:expr, $min:expr, $max:expr, $($arg:tt)+) => {
        assert!($value >= $min && $value <= $max, "{} not in range [{}, {}]: {}", $value, $min, $max, format!($($arg)+));
    };
}

/// Assert that a generator abstained and unwrap nothing
#[macro_export]
macro_rules! assert_abstained {
    ($expr:expr) => {
        match $expr {
            Ok(None) => {}
            Ok(Some(proposal)) => panic!("Expected abstention, got proposal: {:?}", proposal),
            Err(err) => panic!("Expected abstention, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(None) => {}
            Ok(Some(proposal)) => panic!("Expected abstention, got proposal: {:?} ({})", proposal, format!($($arg)+)),
            Err(err) => panic!("Expected abstention, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}

/// Assert that a generator produced a proposal and unwrap it
#[macro_export]
macro_rules! assert_proposed {
    ($expr:expr) => {
        match $expr {
            Ok(Some(proposal)) => proposal,
            Ok(None) => panic!("Expected a proposal, generator abstained"),
            Err(err) => panic!("Expected a proposal, got Err: {:?}", err),
        }
    };
    ($expr:expr, $($arg:tt)+) => {
        match $expr {
            Ok(Some(proposal)) => proposal,
            Ok(None) => panic!("Expected a proposal, generator abstained ({})", format!($($arg)+)),
            Err(err) => panic!("Expected a proposal, got Err: {:?} ({})", err, format!($($arg)+)),
        }
    };
}
