use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("Unknown room type: {0}")]
    NotFound(String),
}

/// One row of the pricing table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// Typical floor area in square meters
    pub area_m2: u32,
    pub capacity: u32,
    pub monthly_price: u64,
    pub description: &'static str,
}

pub static PRICING_TABLE: [PricingEntry; 7] = [
    PricingEntry {
        code: "standard-single",
        name: "Standard Single",
        area_m2: 16,
        capacity: 1,
        monthly_price: 350,
        description: "Compact room with a single bed, desk and shared bathroom.",
    },
    PricingEntry {
        code: "standard-double",
        name: "Standard Double",
        area_m2: 20,
        capacity: 2,
        monthly_price: 450,
        description: "Double bed, wardrobe and private bathroom.",
    },
    PricingEntry {
        code: "studio",
        name: "Studio",
        area_m2: 25,
        capacity: 2,
        monthly_price: 550,
        description: "Self-contained room with kitchenette and private bathroom.",
    },
    PricingEntry {
        code: "mezzanine",
        name: "Mezzanine Loft",
        area_m2: 30,
        capacity: 3,
        monthly_price: 650,
        description: "Split-level room with a sleeping loft above the living area.",
    },
    PricingEntry {
        code: "deluxe",
        name: "Deluxe Room",
        area_m2: 32,
        capacity: 2,
        monthly_price: 750,
        description: "Furnished room with balcony, air conditioning and washer.",
    },
    PricingEntry {
        code: "family",
        name: "Family Room",
        area_m2: 40,
        capacity: 4,
        monthly_price: 900,
        description: "Two sleeping areas, full kitchen and dining space.",
    },
    PricingEntry {
        code: "penthouse",
        name: "Penthouse Suite",
        area_m2: 55,
        capacity: 4,
        monthly_price: 1300,
        description: "Top-floor suite with terrace, separate bedroom and full kitchen.",
    },
];

/// Look up a pricing entry by code (case-insensitive)
pub fn find_entry(code: &str) -> Result<&'static PricingEntry, PricingError> {
    PRICING_TABLE
        .iter()
        .find(|entry| entry.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| PricingError::NotFound(code.to_string()))
}
