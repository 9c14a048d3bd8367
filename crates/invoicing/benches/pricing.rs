use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use billcraft_catalog::{Catalog, Product};
use billcraft_invoicing::{
    BillingConfig, CustomerInfo, Order, OrderLine, TaxSplit, compute_invoice,
};

fn build_catalog(size: usize) -> Catalog {
    let products = (0..size)
        .map(|index| {
            let unit_price = Decimal::new(1_000 + index as i64, 2);
            Product {
                id: format!("P-{index}"),
                name: format!("Product {index}"),
                category: "Benchmark".to_string(),
                unit_price,
                discount_percent: Some(Decimal::TEN),
                discounted_price: Some(unit_price - unit_price / Decimal::TEN),
            }
        })
        .collect();
    Catalog::from_products(products)
}

fn build_order(line_count: usize, catalog_size: usize) -> Order {
    Order::new(
        CustomerInfo::named("Benchmark Customer"),
        (0..line_count)
            .map(|index| OrderLine {
                product_name: format!("Product {}", index % catalog_size),
                quantity: (index as i64 % 9) + 1,
            })
            .collect(),
    )
}

fn bench_compute_invoice(c: &mut Criterion) {
    let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
    let catalog = build_catalog(500);
    let config =
        BillingConfig::new(Decimal::new(18, 2), TaxSplit::even("CGST", "SGST")).unwrap();

    let mut group = c.benchmark_group("compute_invoice");
    for line_count in [1usize, 10, 100] {
        let order = build_order(line_count, 500);
        group.throughput(Throughput::Elements(line_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(line_count),
            &order,
            |b, order| {
                b.iter(|| compute_invoice(black_box(order), &catalog, &config, issued_at).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compute_invoice);
criterion_main!(benches);
