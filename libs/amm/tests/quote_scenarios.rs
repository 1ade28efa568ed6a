//! Quote Scenario Tests
//!
//! Concrete quotes a trade or liquidity form receives for known reserves,
//! including the JSON envelope rendered by the UI.

mod common;

use amm::{
    calculate_liquidity_quote, calculate_prices, calculate_probabilities,
    calculate_removal_quote, calculate_swap_for_output, calculate_swap_output,
    validate_complementary_prices, ErrorCode, PoolReserves, Price, QuoteResponse,
};
use serde_json::json;

#[test]
fn test_balanced_pool_prices() {
    common::init_tracing();

    let price = calculate_prices(&PoolReserves::new(1_000_000, 1_000_000)).unwrap();
    assert_eq!(price, Price { yes: 0.5, no: 0.5 });
}

#[test]
fn test_skewed_pool_prices() {
    common::init_tracing();

    let price = calculate_prices(&PoolReserves::new(400_000, 600_000)).unwrap();
    assert!((price.yes - 0.4).abs() < 1e-9);
    assert!((price.no - 0.6).abs() < 1e-9);
    assert!(validate_complementary_prices(price.yes, price.no));

    let probs = calculate_probabilities(&PoolReserves::new(400_000, 600_000)).unwrap();
    assert_eq!((probs.yes, probs.no), (40, 60));
}

#[test]
fn test_moderate_swap() {
    common::init_tracing();

    let quote = calculate_swap_output(100_000, 1_000_000, 1_000_000).unwrap();

    assert!(quote.output_amount > 90_000 && quote.output_amount < 100_000);
    assert_eq!(quote.fee, 300);
    assert_eq!(quote.minimum_output, quote.output_amount * 99 / 100);
    assert!(quote.minimum_output <= quote.output_amount);
    assert!(quote.price_impact > 0.0 && quote.price_impact < 10.0);
}

#[test]
fn test_twenty_percent_of_pool_is_accepted() {
    common::init_tracing();

    let quote = calculate_swap_output(200_000, 1_000_000, 1_000_000).unwrap();
    assert!(quote.price_impact < 20.0);
}

#[test]
fn test_five_times_pool_is_rejected() {
    common::init_tracing();

    let err = calculate_swap_output(5_000_000, 1_000_000, 1_000_000).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ExcessivePriceImpact);

    let response: QuoteResponse<_> = Err::<amm::SwapQuote, _>(err).into();
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], json!(false));
    assert_eq!(value["errors"][0]["code"], json!("EXCESSIVE_PRICE_IMPACT"));
}

#[test]
fn test_reverse_swap_quote() {
    common::init_tracing();

    let quote = calculate_swap_for_output(50_000, 1_000_000, 1_000_000).unwrap();
    assert!(quote.output_amount >= 50_000);

    let err = calculate_swap_for_output(1_000_000, 1_000_000, 1_000_000).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InsufficientLiquidity);
}

#[test]
fn test_first_deposit() {
    common::init_tracing();

    let quote = calculate_liquidity_quote(1_000_000, &PoolReserves::new(0, 0), 0).unwrap();
    assert_eq!(quote.yes_amount, 1_000_000);
    assert_eq!(quote.no_amount, 1_000_000);
    assert_eq!(quote.share_of_pool, 100.0);

    let value = serde_json::to_value(QuoteResponse::from(Ok::<_, amm::AmmError>(quote))).unwrap();
    assert_eq!(value["data"]["noAmount"], json!(1_000_000));
    assert_eq!(value["data"]["shareOfPool"], json!(100.0));
}

#[test]
fn test_dust_deposit() {
    common::init_tracing();

    let err = calculate_liquidity_quote(100, &PoolReserves::new(1_000_000, 1_000_000), 1_000_000)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AmountTooSmall);
}

#[test]
fn test_deposit_then_withdraw_is_pro_rata() {
    common::init_tracing();

    let reserves = PoolReserves::new(2_000_000, 3_000_000);
    let deposit = calculate_liquidity_quote(500_000, &reserves, 2_000_000).unwrap();
    assert_eq!(deposit.no_amount, 750_000);
    assert_eq!(deposit.lp_tokens, 500_000);
    assert!((deposit.share_of_pool - 20.0).abs() < 1e-9);

    let after = PoolReserves::new(
        reserves.yes_reserve + deposit.yes_amount,
        reserves.no_reserve + deposit.no_amount,
    );
    let removal = calculate_removal_quote(deposit.lp_tokens, &after, 2_000_000 + deposit.lp_tokens)
        .unwrap();
    assert_eq!(removal.yes_amount, deposit.yes_amount);
    assert_eq!(removal.no_amount, deposit.no_amount);
}

#[test]
fn test_reserves_from_reader_json() {
    common::init_tracing();

    let reserves: PoolReserves =
        serde_json::from_value(json!({"yesReserve": 400_000, "noReserve": 600_000})).unwrap();
    let price = calculate_prices(&reserves).unwrap();
    assert!((price.yes - 0.4).abs() < 1e-9);

    let err = serde_json::from_value::<PoolReserves>(json!({"yesReserve": -1, "noReserve": -1}))
        .unwrap_err();
    assert!(err.to_string().contains("Invalid YES reserve"));
}
