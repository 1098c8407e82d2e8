//! The fixed list of companies offered by the ticker selector.

/// A selectable company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Company {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Companies offered for selection, in display order.
pub const COMPANIES: &[Company] = &[
    Company { name: "Apple Inc.", symbol: "AAPL" },
    Company { name: "Microsoft Corporation", symbol: "MSFT" },
    Company { name: "Amazon.com, Inc.", symbol: "AMZN" },
    Company { name: "Alphabet Inc. (Class A)", symbol: "GOOGL" },
    Company { name: "Alphabet Inc. (Class C)", symbol: "GOOG" },
    Company { name: "Facebook, Inc. (Meta Platforms Inc.)", symbol: "META" },
    Company { name: "Tesla, Inc.", symbol: "TSLA" },
    Company { name: "NVIDIA Corporation", symbol: "NVDA" },
    Company { name: "Berkshire Hathaway Inc. (Class A)", symbol: "BRK.A" },
    Company { name: "Berkshire Hathaway Inc. (Class B)", symbol: "BRK.B" },
    Company { name: "Johnson & Johnson", symbol: "JNJ" },
    Company { name: "Visa Inc.", symbol: "V" },
    Company { name: "Walmart Inc.", symbol: "WMT" },
    Company { name: "Procter & Gamble Co.", symbol: "PG" },
    Company { name: "Mastercard Incorporated", symbol: "MA" },
    Company { name: "UnitedHealth Group Incorporated", symbol: "UNH" },
    Company { name: "JPMorgan Chase & Co.", symbol: "JPM" },
    Company { name: "Home Depot, Inc.", symbol: "HD" },
    Company { name: "Samsung Electronics Co., Ltd.", symbol: "SSNLF" },
    Company { name: "Alibaba Group Holding Limited", symbol: "BABA" },
];

/// Look up a company by ticker, ignoring ASCII case.
pub fn find(symbol: &str) -> Option<&'static Company> {
    COMPANIES
        .iter()
        .find(|c| c.symbol.eq_ignore_ascii_case(symbol.trim()))
}
