use axum::{
    extract::State,
    routing::post,
    Json,
    Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use mercato_catalog::{PriceResult, Product};
use mercato_order::{compare, preview_bid, BidPreview, Cart, CartQuote, Comparison};
use mercato_shared::{format_price, Platform};
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ResolvePriceRequest {
    pub product: Product,
    pub quantity: Option<i64>,
    pub platform: Platform,
}

#[derive(Debug, Serialize)]
pub struct DisplayPrices {
    pub original_price: String,
    pub final_price: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvePriceResponse {
    #[serde(flatten)]
    pub price: PriceResult,
    pub promotion_id: Option<Uuid>,
    pub display: DisplayPrices,
}

#[derive(Debug, Serialize)]
pub struct CartTotalsDisplay {
    pub subtotal: String,
    pub original_subtotal: String,
    pub savings: String,
}

#[derive(Debug, Serialize)]
pub struct CartQuoteResponse {
    #[serde(flatten)]
    pub quote: CartQuote,
    pub display: CartTotalsDisplay,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub platform: Platform,
    pub quantity: Option<i64>,
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct BidPreviewRequest {
    pub product: Product,
    pub quantity: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct BidPreviewResponse {
    #[serde(flatten)]
    pub preview: BidPreview,
    pub display_total: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/prices/resolve", post(resolve_price))
        .route("/v1/cart/quote", post(quote_cart))
        .route("/v1/compare", post(compare_products))
        .route("/v1/bids/preview", post(preview_bid_handler))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/prices/resolve
async fn resolve_price(
    State(state): State<AppState>,
    Json(req): Json<ResolvePriceRequest>,
) -> Result<Json<ResolvePriceResponse>, AppError> {
    let snapshot = state.store.current();
    let resolver = state.resolver(&snapshot);
    let quantity = req.quantity.unwrap_or(state.pricing.default_quantity);

    let price = resolver.resolve(&req.product, quantity, req.platform)?;
    let promotion_id = if price.has_discount {
        resolver.promotion_for(&req.product, req.platform).map(|p| p.id)
    } else {
        None
    };

    Ok(Json(ResolvePriceResponse {
        display: DisplayPrices {
            original_price: format_price(price.original_price),
            final_price: format_price(price.final_price),
        },
        price,
        promotion_id,
    }))
}

/// POST /v1/cart/quote
async fn quote_cart(
    State(state): State<AppState>,
    Json(cart): Json<Cart>,
) -> Result<Json<CartQuoteResponse>, AppError> {
    let snapshot = state.store.current();
    let quote = cart.quote(&state.resolver(&snapshot))?;

    Ok(Json(CartQuoteResponse {
        display: CartTotalsDisplay {
            subtotal: format_price(quote.subtotal),
            original_subtotal: format_price(quote.original_subtotal),
            savings: format_price(quote.savings),
        },
        quote,
    }))
}

/// POST /v1/compare
async fn compare_products(
    State(state): State<AppState>,
    Json(req): Json<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let snapshot = state.store.current();
    let quantity = req.quantity.unwrap_or(state.pricing.default_quantity);

    let comparison = compare(&state.resolver(&snapshot), &req.products, quantity, req.platform)?;
    Ok(Json(comparison))
}

/// POST /v1/bids/preview
/// Corporate bulk bid with next-tier hint
async fn preview_bid_handler(
    State(state): State<AppState>,
    Json(req): Json<BidPreviewRequest>,
) -> Result<Json<BidPreviewResponse>, AppError> {
    let snapshot = state.store.current();
    let quantity = req.quantity.unwrap_or(state.pricing.default_quantity);

    let preview = preview_bid(&state.resolver(&snapshot), &req.product, quantity)?;
    Ok(Json(BidPreviewResponse {
        display_total: format_price(preview.total),
        preview,
    }))
}
