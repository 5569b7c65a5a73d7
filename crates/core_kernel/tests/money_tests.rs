//! Unit tests for the Money module
//!
//! Tests cover money creation, predicates, checked arithmetic,
//! rendering and currency parsing.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(5.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(5.1235));
    }

    #[test]
    fn test_jpy_has_no_decimal_places() {
        let m = Money::new(dec!(10000), Currency::JPY);
        assert_eq!(m.fixed(), "10000");
        assert_eq!(Currency::JPY.decimal_places(), 0);
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
        assert_eq!(Currency::default().symbol(), "$");
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_negative_true_for_negative_amount() {
        let m = Money::new(dec!(-0.01), Currency::USD);
        assert!(m.is_negative());
    }

    #[test]
    fn test_is_negative_false_for_zero() {
        assert!(!Money::zero(Currency::USD).is_negative());
    }

    #[test]
    fn test_is_zero_false_for_cent() {
        assert!(!Money::new(dec!(0.01), Currency::USD).is_zero());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_is_exact() {
        let pie = Money::new(dec!(5.99), Currency::USD);
        let cake = Money::new(dec!(3.99), Currency::USD);
        assert_eq!(pie.checked_add(&cake).unwrap().amount(), dec!(9.98));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let a = Money::new(dec!(100.00), Currency::USD);
        let b = Money::new(dec!(50.00), Currency::GBP);
        assert_eq!(
            a.checked_add(&b),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "GBP".to_string()))
        );
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = Money::new(Decimal::MAX, Currency::USD);
        let b = Money::new(Decimal::MAX, Currency::USD);
        assert_eq!(a.checked_add(&b), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_checked_sum_of_nothing_is_zero() {
        let total = Money::checked_sum(Currency::EUR, &Vec::<Money>::new()).unwrap();
        assert!(total.is_zero());
        assert_eq!(total.currency(), Currency::EUR);
    }

    #[test]
    fn test_checked_sum_rejects_mixed_currencies() {
        let amounts = [
            Money::new(dec!(1), Currency::USD),
            Money::new(dec!(1), Currency::EUR),
        ];
        assert!(Money::checked_sum(Currency::USD, &amounts).is_err());
    }
}

mod rendering {
    use super::*;

    #[test]
    fn test_fixed_uses_currency_places() {
        assert_eq!(Money::new(dec!(12.48), Currency::USD).fixed(), "12.48");
        assert_eq!(Money::new(dec!(3), Currency::EUR).fixed(), "3.00");
        assert_eq!(Money::new(dec!(500), Currency::JPY).fixed(), "500");
    }

    #[test]
    fn test_fixed_rounds_extra_precision() {
        assert_eq!(Money::new(dec!(1.005), Currency::USD).fixed(), "1.00");
        assert_eq!(Money::new(dec!(1.0151), Currency::USD).fixed(), "1.02");
    }

    #[test]
    fn test_plain_keeps_significant_digits() {
        assert_eq!(Money::new(dec!(5.99), Currency::USD).plain().to_string(), "5.99");
        assert_eq!(Money::new(dec!(10.10), Currency::USD).plain().to_string(), "10.1");
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::USD));
        assert_eq!(" Eur ".parse::<Currency>(), Ok(Currency::EUR));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(MoneyError::UnknownCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&Currency::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
    }
}
