use mercato_catalog::Product;
use mercato_shared::Platform;
use crate::models::{Comparison, ComparisonRow};
use crate::resolver::PriceResolver;
use crate::{QuoteError, QuoteResult};

/// Price each product for the same quantity and platform, keeping input order
pub fn compare(
    resolver: &PriceResolver<'_>,
    products: &[Product],
    quantity: i64,
    platform: Platform,
) -> QuoteResult<Comparison> {
    let mut rows: Vec<ComparisonRow> = Vec::with_capacity(products.len());
    let mut cheapest: Option<usize> = None;

    for (index, product) in products.iter().enumerate() {
        let unit = resolver
            .resolve(product, quantity, platform)
            .map_err(|e| match e {
                QuoteError::Validation(source) => QuoteError::Line { index, source },
                other => other,
            })?;

        // strict comparison keeps the earlier product on ties
        if cheapest.map_or(true, |c: usize| unit.final_price < rows[c].unit.final_price) {
            cheapest = Some(index);
        }

        rows.push(ComparisonRow {
            product_id: product.id,
            name: product.name.clone(),
            unit,
            total: unit.final_price * quantity as f64,
        });
    }

    Ok(Comparison { platform, quantity, rows, cheapest })
}
