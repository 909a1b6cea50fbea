use crate::models::{Instrument, MarketCap, RiskLevel};

// The fixed NSE large-cap catalog the platform trades. Base prices anchor
// the simulated quote walk.
pub fn nse_catalog() -> Vec<Instrument> {
    use MarketCap::*;
    use RiskLevel::*;

    let rows: &[(&str, &str, &str, RiskLevel, MarketCap, f64)] = &[
        ("RELIANCE", "Reliance Industries Limited", "Energy", Low, Large, 2500.0),
        ("TCS", "Tata Consultancy Services Limited", "IT", Low, Large, 3500.0),
        ("HDFCBANK", "HDFC Bank Limited", "Banking", Low, Large, 1500.0),
        ("INFY", "Infosys Limited", "IT", Medium, Large, 1600.0),
        ("HINDUNILVR", "Hindustan Unilever Limited", "FMCG", Low, Large, 2400.0),
        ("ICICIBANK", "ICICI Bank Limited", "Banking", Medium, Large, 950.0),
        ("KOTAKBANK", "Kotak Mahindra Bank Limited", "Banking", Medium, Large, 1700.0),
        ("SBIN", "State Bank of India", "Banking", Medium, Large, 600.0),
        ("BHARTIARTL", "Bharti Airtel Limited", "Telecom", Medium, Large, 800.0),
        ("ITC", "ITC Limited", "FMCG", Low, Large, 430.0),
        ("LT", "Larsen & Toubro Limited", "Infrastructure", Medium, Large, 3200.0),
        ("AXISBANK", "Axis Bank Limited", "Banking", Medium, Large, 1000.0),
        ("ASIANPAINT", "Asian Paints Limited", "Consumer Goods", Medium, Large, 2900.0),
        ("MARUTI", "Maruti Suzuki India Limited", "Automobile", Medium, Large, 9800.0),
        ("SUNPHARMA", "Sun Pharmaceutical Industries Limited", "Pharmaceutical", Medium, Large, 1200.0),
        ("TITAN", "Titan Company Limited", "Consumer Goods", Medium, Large, 3400.0),
        ("ULTRACEMCO", "UltraTech Cement Limited", "Infrastructure", Medium, Large, 8800.0),
        ("NESTLEIND", "Nestle India Limited", "FMCG", Low, Large, 2400.0),
        ("BAJFINANCE", "Bajaj Finance Limited", "Finance", High, Large, 6800.0),
        ("WIPRO", "Wipro Limited", "IT", Medium, Mid, 450.0),
        ("HCLTECH", "HCL Technologies Limited", "IT", Medium, Large, 1300.0),
        ("TECHM", "Tech Mahindra Limited", "IT", Medium, Mid, 1200.0),
        ("ADANIPORTS", "Adani Ports and SEZ Limited", "Infrastructure", High, Large, 1200.0),
        ("POWERGRID", "Power Grid Corporation of India Limited", "Energy", Low, Large, 250.0),
        ("NTPC", "NTPC Limited", "Energy", Medium, Large, 320.0),
        ("ONGC", "Oil and Natural Gas Corporation Limited", "Energy", Medium, Large, 200.0),
        ("COALINDIA", "Coal India Limited", "Energy", Medium, Large, 400.0),
        ("IOC", "Indian Oil Corporation Limited", "Energy", Medium, Mid, 150.0),
        ("BPCL", "Bharat Petroleum Corporation Limited", "Energy", High, Mid, 450.0),
        ("HINDALCO", "Hindalco Industries Limited", "Metals", High, Mid, 600.0),
    ];

    rows.iter()
        .map(
            |(symbol, name, sector, risk_level, market_cap, base_price)| Instrument {
                symbol: symbol.to_string(),
                name: name.to_string(),
                sector: sector.to_string(),
                risk_level: *risk_level,
                market_cap: *market_cap,
                base_price: *base_price,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_symbols_are_unique() {
        let catalog = nse_catalog();
        let mut symbols: Vec<_> = catalog.iter().map(|i| i.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), catalog.len());
    }

    #[test]
    fn test_catalog_prices_are_positive() {
        assert!(nse_catalog().iter().all(|i| i.base_price > 0.0));
    }
}
