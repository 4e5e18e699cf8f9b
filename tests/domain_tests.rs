//! Integration tests for the reference wallet domain.

use chrono::NaiveDate;
use rstest::rstest;
use verdict::control::Either;
use verdict::domain::{
    CommandExecutor, ContractEvent, DomainError, Installment, InstallmentEvent, InstallmentId,
    Money, TransactionKind, TransactionStatus, TransferCommand, TransferExecutor, Wallet, WalletId,
};
use verdict::entity::{Entity, EntityId};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn wallet_id(value: &str) -> WalletId {
    WalletId::new(value).unwrap()
}

fn installment(id: &str, amount: Money) -> Installment {
    Installment::create(
        InstallmentId::new(id).unwrap(),
        amount,
        date(2025, 1, 1),
        5.0,
    )
    .right()
    .unwrap()
}

// =============================================================================
// Money
// =============================================================================

#[rstest]
#[case("1234.56", 123_456)]
#[case("10", 1_000)]
#[case("3.5", 350)]
#[case("-5.00", -500)]
#[case("0.07", 7)]
fn money_parses_decimal_strings(#[case] input: &str, #[case] cents: i64) {
    let amount: Money = input.parse().unwrap();
    assert_eq!(amount.cents(), cents);
}

#[rstest]
#[case("abc")]
#[case("1.234")]
#[case("")]
#[case(".50")]
#[case("1,50")]
fn money_rejects_malformed_strings(#[case] input: &str) {
    assert!(input.parse::<Money>().is_err());
}

#[rstest]
fn money_displays_with_two_decimal_places() {
    assert_eq!(Money::from_cents(123_456).to_string(), "1234.56");
    assert_eq!(Money::from_cents(-500).to_string(), "-5.00");
    assert_eq!(Money::from_cents(7).to_string(), "0.07");
    assert_eq!(Money::ZERO.to_string(), "0.00");
}

#[rstest]
fn money_rounds_floats_to_the_nearest_cent() {
    assert_eq!(Money::from_f64_half_even(12.34), Money::from_cents(1_234));
    assert_eq!(Money::from_f64_half_even(2.346), Money::from_cents(235));
}

#[rstest]
fn money_arithmetic_and_sum() {
    let total: Money = [Money::from_cents(100), Money::from_cents(250)]
        .into_iter()
        .sum();
    assert_eq!(total, Money::from_cents(350));
    assert_eq!(Money::from_cents(100) - Money::from_cents(30), Money::from_cents(70));
    assert_eq!(-Money::from_cents(100), Money::from_cents(-100));
}

// =============================================================================
// Identifiers
// =============================================================================

#[rstest]
fn wallet_id_construction_enforces_the_strict_chain() {
    let id = WalletId::new("WALLET-2024-001").unwrap();
    assert_eq!(id.value(), "WALLET-2024-001");
    assert_eq!(id.to_string(), "WALLET-2024-001");

    assert!(WalletId::new("").is_err());
    assert!(WalletId::new("ACCOUNT-2024-001").is_err());
    assert!(WalletId::new("WALLET-").is_err());
    assert!(WalletId::new("WALLET-ABCDEF").is_err());
}

#[rstest]
fn installment_id_rejects_blank_values() {
    assert!(InstallmentId::new("INST-001").is_ok());
    assert!(InstallmentId::new("   ").is_err());
}

#[rstest]
fn identifier_equality_follows_the_wrapped_value() {
    assert_eq!(wallet_id("WALLET-2024-001"), wallet_id("WALLET-2024-001"));
    assert_ne!(wallet_id("WALLET-2024-001"), wallet_id("WALLET-2024-002"));
}

// =============================================================================
// Installments
// =============================================================================

#[rstest]
fn installment_creation_succeeds_with_valid_values() {
    let created = Installment::create(
        InstallmentId::new("INST-001").unwrap(),
        Money::from_cents(100_00),
        date(2025, 1, 1),
        5.0,
    );
    let installment = created.right().unwrap();
    assert_eq!(installment.amount(), Money::from_cents(100_00));
    assert!(installment.report().is_valid());
}

#[rstest]
#[case(Money::ZERO, 5.0, 1)]
#[case(Money::from_cents(100_00), 0.0, 1)]
#[case(Money::from_cents(100_00), 150.0, 1)]
#[case(Money::from_cents(-100), 0.0, 2)]
fn installment_creation_accumulates_rule_failures(
    #[case] amount: Money,
    #[case] rate: f64,
    #[case] expected_errors: usize,
) {
    let created = Installment::create(
        InstallmentId::new("INST-001").unwrap(),
        amount,
        date(2025, 1, 1),
        rate,
    );
    let report = created.left().unwrap();
    assert_eq!(report.errors_for_field("installments").len(), expected_errors);
    assert!(report.field_has_error_code("installments", "INSTALLMENT_INVALID"));
}

#[rstest]
fn installments_compare_by_schedule() {
    let early = installment("INST-001", Money::from_cents(100_00));
    let late = Installment::create(
        InstallmentId::new("INST-002").unwrap(),
        Money::from_cents(100_00),
        date(2026, 1, 1),
        5.0,
    )
    .right()
    .unwrap();
    assert_eq!(early.cmp_schedule(&late), std::cmp::Ordering::Less);
    assert_eq!(early.cmp_schedule(&early.clone()), std::cmp::Ordering::Equal);
}

#[rstest]
fn installment_equality_is_keyed_on_the_id() {
    let a = installment("INST-001", Money::from_cents(100_00));
    let b = installment("INST-001", Money::from_cents(999_00));
    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
}

// =============================================================================
// Present Value
// =============================================================================

#[rstest]
fn present_value_discounts_whole_360_day_periods() {
    let installment = Installment::create(
        InstallmentId::new("INST-001").unwrap(),
        Money::from_cents(1_000_00),
        date(2025, 1, 1),
        5.0,
    )
    .right()
    .unwrap();

    // 366 days -> one whole 360-day period: 1000.00 / 1.05 = 952.38
    let value = installment.present_value(0.05, date(2024, 1, 1)).unwrap();
    assert_eq!(value, Money::from_cents(952_38));
}

#[rstest]
fn present_value_within_the_first_period_is_undiscounted() {
    let installment = Installment::create(
        InstallmentId::new("INST-001").unwrap(),
        Money::from_cents(1_000_00),
        date(2024, 6, 1),
        5.0,
    )
    .right()
    .unwrap();

    let value = installment.present_value(0.05, date(2024, 1, 1)).unwrap();
    assert_eq!(value, Money::from_cents(1_000_00));
}

#[rstest]
fn present_value_rejects_a_negative_discount_rate() {
    let installment = installment("INST-001", Money::from_cents(100_00));
    assert_eq!(
        installment.present_value(-0.1, date(2024, 1, 1)),
        Err(DomainError::NegativeDiscountRate(-0.1))
    );
}

#[rstest]
fn present_value_rejects_a_contract_after_the_due_date() {
    let installment = installment("INST-001", Money::from_cents(100_00));
    let result = installment.present_value(0.05, date(2026, 1, 1));
    assert!(matches!(
        result,
        Err(DomainError::DueDateBeforeContract { .. })
    ));
}

// =============================================================================
// Wallet Creation
// =============================================================================

#[rstest]
fn wallet_creation_succeeds_with_a_balance_in_range() {
    let created = Wallet::create(
        wallet_id("WALLET-2024-001"),
        vec![installment("INST-001", Money::from_cents(100_00))],
        "500.00".parse().unwrap(),
    );
    let wallet = created.right().unwrap();
    assert_eq!(wallet.balance(), Money::from_cents(500_00));
    assert_eq!(wallet.installments().len(), 1);
    assert!(wallet.report().is_valid());
}

#[rstest]
#[case("-5.00")]
#[case("2000000.00")]
#[case("5.00")]
fn wallet_creation_reports_exactly_one_balance_error(#[case] balance: &str) {
    let created = Wallet::create(
        wallet_id("WALLET-2024-001"),
        Vec::new(),
        balance.parse().unwrap(),
    );
    let report = created.left().unwrap();
    assert_eq!(report.error_count(), 1);
    assert!(report.field_has_error_code("balance", "BALANCE_INVALID"));
}

#[rstest]
fn wallet_equality_covers_id_balance_and_installments() {
    let make = || {
        Wallet::create(
            wallet_id("WALLET-2024-001"),
            Vec::new(),
            Money::from_cents(500_00),
        )
        .right()
        .unwrap()
    };
    assert_eq!(make(), make());
}

// =============================================================================
// Wallet Opening from Contract Events
// =============================================================================

fn contract_event() -> ContractEvent {
    ContractEvent {
        contract_number: "WALLET-2024-001".to_string(),
        installments: vec![
            InstallmentEvent {
                id: "INST-001".to_string(),
                amount: Money::from_cents(100_00),
                due_date: date(2025, 1, 1),
                rate: 5.0,
            },
            InstallmentEvent {
                id: "INST-002".to_string(),
                amount: Money::from_cents(400_00),
                due_date: date(2025, 6, 1),
                rate: 5.0,
            },
        ],
    }
}

#[rstest]
fn opening_a_wallet_sums_the_installment_amounts() {
    let wallet = Wallet::open(&contract_event()).right().unwrap();
    assert_eq!(wallet.balance(), Money::from_cents(500_00));
    assert_eq!(wallet.installments().len(), 2);
    assert_eq!(wallet.id().value(), "WALLET-2024-001");
}

#[rstest]
fn opening_accumulates_shape_errors_across_fields() {
    let event = ContractEvent {
        contract_number: "WALLET-".to_string(),
        installments: Vec::new(),
    };
    let report = Wallet::open(&event).left().unwrap();
    assert_eq!(report.errors_for_field("contract_number").len(), 2);
    assert!(report.field_has_error_code("installments", "EMPTY_COLLECTION"));
}

#[rstest]
fn opening_rejects_duplicate_installment_ids() {
    let mut event = contract_event();
    event.installments[1].id = "INST-001".to_string();
    let report = Wallet::open(&event).left().unwrap();
    assert!(report.field_has_error_code("installments", "DUPLICATE_ID"));
}

#[rstest]
fn opening_folds_installment_rule_failures_into_the_report() {
    let mut event = contract_event();
    event.installments[0].amount = Money::ZERO;
    let report = Wallet::open(&event).left().unwrap();
    assert!(report.field_has_error_code("installments", "INSTALLMENT_INVALID"));
}

// =============================================================================
// Transfer Commands
// =============================================================================

fn transfer_command() -> TransferCommand {
    TransferCommand {
        source: wallet_id("WALLET-2024-001"),
        target: wallet_id("WALLET-2024-002"),
        amount: Money::from_cents(50_00),
        fee: Money::from_cents(1_00),
    }
}

#[rstest]
fn a_valid_transfer_produces_a_receipt() {
    let receipt = TransferExecutor.run(&transfer_command()).right().unwrap();
    assert_eq!(receipt.kind, TransactionKind::Transfer);
    assert_eq!(receipt.status, TransactionStatus::Success);
    assert_eq!(receipt.amount, Money::from_cents(50_00));
    assert_eq!(receipt.fee, Money::from_cents(1_00));
    assert_eq!(receipt.source_wallet, wallet_id("WALLET-2024-001"));
    assert_eq!(receipt.target_wallet, Some(wallet_id("WALLET-2024-002")));
}

#[rstest]
fn a_non_positive_amount_is_rejected_before_execution() {
    let mut command = transfer_command();
    command.amount = Money::ZERO;
    let report = TransferExecutor.run(&command).left().unwrap();
    assert!(report.field_has_error_code("amount", "INVALID_AMOUNT"));
}

#[rstest]
fn a_negative_fee_is_rejected() {
    let mut command = transfer_command();
    command.fee = Money::from_cents(-1);
    let report = TransferExecutor.run(&command).left().unwrap();
    assert!(report.field_has_error_code("fee", "INVALID_FEE"));
}

#[rstest]
fn a_self_transfer_is_rejected() {
    let mut command = transfer_command();
    command.target = command.source.clone();
    let report = TransferExecutor.run(&command).left().unwrap();
    assert!(report.field_has_error_code("target", "SAME_WALLET"));
}

#[rstest]
fn rejected_commands_accumulate_every_failure() {
    let command = TransferCommand {
        source: wallet_id("WALLET-2024-001"),
        target: wallet_id("WALLET-2024-001"),
        amount: Money::ZERO,
        fee: Money::from_cents(-1),
    };
    let outcome = TransferExecutor.run(&command);
    let report = match outcome {
        Either::Left(report) => report,
        Either::Right(_) => panic!("command must be rejected"),
    };
    assert_eq!(report.error_count(), 3);
}
