use std::cmp::Ordering;
use std::collections::HashMap;

use regex::RegexBuilder;

use crate::errors::AppError;
use crate::external::QuoteSource;
use crate::models::{MarketEntry, MarketQuery};

const SEARCH_LIMIT: usize = 20;

/// The catalog joined with fresh quotes, filtered and sorted per the query.
pub async fn list(quotes: &dyn QuoteSource, query: MarketQuery) -> Result<Vec<MarketEntry>, AppError> {
    let price_map: HashMap<String, _> = quotes
        .quotes()
        .await
        .into_iter()
        .map(|q| (q.symbol.clone(), q))
        .collect();

    let mut entries: Vec<MarketEntry> = quotes
        .instruments()
        .iter()
        .filter(|i| {
            matches_filter(&query.sector, &i.sector)
                && matches_filter(&query.risk_level, i.risk_level.as_str())
                && matches_filter(&query.market_cap, i.market_cap.as_str())
        })
        .filter_map(|i| price_map.get(&i.symbol).map(|q| MarketEntry::from_parts(i, q)))
        .collect();

    sort_entries(&mut entries, &query)?;
    Ok(entries)
}

pub async fn get(quotes: &dyn QuoteSource, symbol: &str) -> Result<MarketEntry, AppError> {
    let quote = quotes.quote(symbol).await?;
    let instrument = quotes
        .instrument(symbol)
        .ok_or_else(|| AppError::NotFound(format!("Stock {}", symbol.to_uppercase())))?;
    Ok(MarketEntry::from_parts(&instrument, &quote))
}

/// Case-insensitive symbol/name search, capped at 20 matches.
pub async fn search(quotes: &dyn QuoteSource, raw_query: &str) -> Result<Vec<MarketEntry>, AppError> {
    let pattern = RegexBuilder::new(&regex::escape(raw_query.trim()))
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::Validation(format!("Invalid search query: {e}")))?;

    let price_map: HashMap<String, _> = quotes
        .quotes()
        .await
        .into_iter()
        .map(|q| (q.symbol.clone(), q))
        .collect();

    Ok(quotes
        .instruments()
        .iter()
        .filter(|i| pattern.is_match(&i.symbol) || pattern.is_match(&i.name))
        .filter_map(|i| price_map.get(&i.symbol).map(|q| MarketEntry::from_parts(i, q)))
        .take(SEARCH_LIMIT)
        .collect())
}

fn matches_filter(filter: &Option<String>, value: &str) -> bool {
    filter
        .as_deref()
        .map(|f| f.eq_ignore_ascii_case(value))
        .unwrap_or(true)
}

fn sort_entries(entries: &mut [MarketEntry], query: &MarketQuery) -> Result<(), AppError> {
    let key = query.sort_by.as_deref().unwrap_or("symbol");
    match key {
        "symbol" => entries.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
        "name" => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        "price" => entries.sort_by(|a, b| cmp_f64(a.price, b.price)),
        "change_percent" => entries.sort_by(|a, b| cmp_f64(a.change_percent, b.change_percent)),
        other => {
            return Err(AppError::Validation(format!(
                "Invalid sort_by: {other}. Must be one of symbol, name, price, change_percent"
            )))
        }
    }
    if query.order.as_deref() == Some("desc") {
        entries.reverse();
    }
    Ok(())
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
