/// Integration tests for delivery pricing and currency formatting
use errand_pricing::pricing::{
    calculate_delivery_price, format_currency, OverflowPolicy, PriceSource, PricingEngine,
    PricingTable, PricingTier,
};

fn engine() -> PricingEngine {
    PricingEngine::default()
}

#[test]
fn test_marketplace_scenarios() {
    assert_eq!(calculate_delivery_price(0.0), 0.0);
    assert_eq!(calculate_delivery_price(3.0), 2.0);
    assert_eq!(calculate_delivery_price(3.1), 3.0);
    assert_eq!(calculate_delivery_price(22.0), 10.0);
    assert_eq!(calculate_delivery_price(24.0), 11.0);
    assert_eq!(format_currency(calculate_delivery_price(24.0)), "$11.00");
}

#[test]
fn test_non_positive_distances_cost_nothing() {
    let engine = engine();
    for distance in [0.0, -0.0, -0.01, -3.0, -22.0, f64::MIN, f64::NAN] {
        assert_eq!(engine.calculate_delivery_price(distance), 0.0);
    }
}

#[test]
fn test_boundaries_belong_to_their_own_tier() {
    let engine = engine();
    let tiers = engine.table().tiers();
    for (index, tier) in tiers.iter().enumerate() {
        assert_eq!(engine.calculate_delivery_price(tier.max_distance_km), tier.price);

        let just_past = tier.max_distance_km + 1e-9;
        match tiers.get(index + 1) {
            Some(next) => assert_eq!(engine.calculate_delivery_price(just_past), next.price),
            None => assert!(matches!(
                engine.quote(just_past, false).source,
                PriceSource::Overflow { .. }
            )),
        }
    }
}

#[test]
fn test_price_never_decreases_with_distance() {
    let engine = engine();
    let distances: Vec<f64> = (1..=1000).map(|i| i as f64 * 0.05).collect();
    for pair in distances.windows(2) {
        assert!(
            engine.calculate_delivery_price(pair[0]) <= engine.calculate_delivery_price(pair[1]),
            "price dropped between {} and {} km",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_overflow_starts_at_base_fee() {
    let engine = engine();
    let bound = engine.table().last_bound();
    let epsilon = 1e-6;

    assert_eq!(engine.calculate_delivery_price(bound), 10.0);
    let just_over = engine.calculate_delivery_price(bound + epsilon);
    assert!((just_over - engine.overflow().base_fee).abs() < 1e-6);
}

#[test]
fn test_reconfigured_table_uses_its_own_last_bound() {
    let table = PricingTable::new(vec![
        PricingTier::new(2.0, 1.5),
        PricingTier::new(8.0, 4.0),
        PricingTier::new(15.0, 7.5),
    ])
    .unwrap();
    let overflow = OverflowPolicy {
        base_fee: 8.0,
        per_km_surcharge: 0.75,
    };
    let engine = PricingEngine::new(table, overflow).unwrap();

    assert_eq!(engine.calculate_delivery_price(1.0), 1.5);
    assert_eq!(engine.calculate_delivery_price(15.0), 7.5);
    // 8 + (19 - 15) * 0.75
    assert_eq!(engine.calculate_delivery_price(19.0), 11.0);
}

#[test]
fn test_format_currency_round_trips_numerically() {
    for amount in [0.0, 0.01, 1.5, 11.0, 99.999, 1234.5, 1_000_000.0, 42.424242] {
        let formatted = format_currency(amount);
        let numeric: f64 = formatted
            .trim_start_matches('$')
            .replace(',', "")
            .parse()
            .unwrap();
        let expected = (amount * 100.0).round() / 100.0;
        assert!(
            (numeric - expected).abs() < 1e-9,
            "{} formatted as {}",
            amount,
            formatted
        );
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = engine();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let engine = &engine;
                scope.spawn(move || engine.calculate_delivery_price(20.0 + i as f64))
            })
            .collect();

        let prices: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(prices[0], 10.0);
        assert_eq!(prices[7], 12.5);
    });
}
