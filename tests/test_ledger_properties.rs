use loan_ledger::{Decimal, Event, ExcessRule, LedgerError, LoanLedger, Money, Rate, TimeUnit};
use rust_decimal_macros::dec;
use test_log::test;

fn add(ledger: &mut LoanLedger, name: &str, principal: i64, interest: i64, rate: Decimal) {
    ledger
        .add_loan(
            name,
            "StudentLoan",
            Rate::from_decimal(rate),
            Money::from_major(principal),
            Money::from_major(interest),
        )
        .unwrap();
}

#[test]
fn single_interest_free_loan_paid_in_full() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 1000, 0, Decimal::ZERO);

    for rule in ["largest_interest", "lowest_principal", "null"] {
        let mut ledger = ledger.clone();
        let leftover = ledger
            .apply_payment_with_rule_name("loan", Money::from_major(1000), rule)
            .unwrap();

        assert!(leftover.is_zero());
        assert!(ledger.loan("loan").is_none());
        assert_eq!(ledger.principal_paid(), Money::from_major(1000));
        assert!(ledger.interest_paid().is_zero());
    }
}

#[test]
fn small_payment_only_touches_interest() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 100, 50, dec!(0.05));

    let leftover = ledger
        .apply_payment("loan", Money::from_major(30), Some(ExcessRule::LargestInterest))
        .unwrap();

    assert!(leftover.is_zero());
    let loan = ledger.loan("loan").unwrap();
    assert_eq!(loan.interest, Money::from_major(20));
    assert_eq!(loan.principal, Money::from_major(100));
}

#[test]
fn excess_is_routed_to_smallest_balance() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "a", 100, 0, dec!(0.05));
    add(&mut ledger, "b", 50, 0, dec!(0.05));

    let leftover = ledger
        .apply_payment_with_rule_name("a", Money::from_major(150), "smallest_balance")
        .unwrap();

    assert!(leftover.is_zero());
    assert!(ledger.debt_free());
    let retired: Vec<_> = ledger
        .events()
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::LoanRetired { name } => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(retired, vec!["a", "b"]);
}

#[test]
fn money_is_conserved_across_many_payments() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "a", 6507, 0, dec!(0.0641));
    add(&mut ledger, "b", 21263, 0, dec!(0.0541));
    add(&mut ledger, "c", 6994, 0, dec!(0.068));

    let mut rejected = Money::ZERO;
    let mut offered = Money::ZERO;
    for step in 0..40 {
        ledger.accrue_interest(Decimal::ONE, TimeUnit::Month).unwrap();
        let target = if step % 2 == 0 { "a" } else { "b" };
        let payment = Money::from_major(1500);
        offered += payment;
        rejected += ledger
            .apply_payment(target, payment, Some(ExcessRule::LargestBalance))
            .unwrap();

        ledger.check_payments().unwrap();
        assert_eq!(ledger.total_paid(), ledger.interest_paid() + ledger.principal_paid());
    }

    assert!(ledger.debt_free());
    assert_eq!(ledger.total_paid() + rejected, offered);
    assert_eq!(ledger.principal_paid(), ledger.initial_balance());
}

#[test]
fn loans_stay_active_until_both_balances_clear() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 100, 10, dec!(0.05));

    ledger.apply_payment("loan", Money::from_major(10), None).unwrap();
    assert!(ledger.loan("loan").is_some());

    ledger.apply_payment("loan", Money::from_major(99), None).unwrap();
    let loan = ledger.loan("loan").unwrap();
    assert!(loan.interest.is_zero());
    assert_eq!(loan.principal, Money::from_major(1));

    ledger.apply_payment("loan", Money::from_major(1), None).unwrap();
    assert!(ledger.debt_free());
}

#[test]
fn interest_only_loan_retires_when_interest_is_paid() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 0, 50, dec!(0.05));

    let leftover = ledger.apply_payment("loan", Money::from_major(50), None).unwrap();

    assert!(leftover.is_zero());
    assert!(ledger.debt_free());
}

#[test]
fn unknown_start_and_rule_leave_ledger_untouched() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 100, 10, dec!(0.05));
    let before = ledger.loan("loan").cloned();

    let leftover = ledger
        .apply_payment_with_rule_name("ghost", Money::from_major(500), "not_a_rule")
        .unwrap();

    assert_eq!(leftover, Money::from_major(500));
    assert_eq!(ledger.loan("loan").cloned(), before);
    assert!(ledger.total_paid().is_zero());
    ledger.check_payments().unwrap();
}

#[test]
fn repeated_accrual_does_not_compound() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 10_000, 0, dec!(0.12));

    ledger.accrue_interest(Decimal::ONE, TimeUnit::Year).unwrap();
    let first = ledger.loan("loan").unwrap().interest;
    ledger.accrue_interest(Decimal::ONE, TimeUnit::Year).unwrap();

    assert_eq!(ledger.loan("loan").unwrap().interest, first);
    assert_eq!(first.round_dp(2), Money::from_str_exact("1274.97").unwrap());
}

#[test]
fn accrual_unit_names_are_checked() {
    assert!(matches!(
        "fortnight".parse::<TimeUnit>(),
        Err(LedgerError::UnsupportedUnit { .. })
    ));
    assert_eq!("HOUR".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
}

#[test]
fn recapitalized_interest_accrues_on_new_principal() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "loan", 1000, 200, dec!(0.05));

    ledger.recapitalize(None, Some("loan"));
    ledger.accrue_interest(dec!(12), TimeUnit::Month).unwrap();

    let mut reference = LoanLedger::new();
    add(&mut reference, "loan", 1200, 0, dec!(0.05));
    reference.accrue_interest(Decimal::ONE, TimeUnit::Year).unwrap();

    assert_eq!(ledger.loan("loan"), reference.loan("loan"));
}

#[test]
fn balance_distribution_sums_to_one() {
    let mut ledger = LoanLedger::new();
    add(&mut ledger, "a", 6507, 13, dec!(0.0641));
    add(&mut ledger, "b", 21263, 7, dec!(0.0541));
    add(&mut ledger, "c", 23562, 0, dec!(0.068));

    let total: Decimal = ledger
        .balance_distribution()
        .unwrap()
        .values()
        .map(Rate::as_decimal)
        .sum();

    assert!((total - Decimal::ONE).abs() < dec!(0.0000000001));
}
