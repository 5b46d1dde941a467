use super::value_objects::{Category, Frequency};

/// (type, kg CO2e per unit)
pub type FactorTable = &'static [(&'static str, f64)];

// kg CO2e per km travelled
const TRANSPORT: FactorTable = &[
    ("car_gasoline", 0.12),
    ("car_diesel", 0.17),
    ("car_hybrid", 0.07),
    ("car_electric", 0.05),
    ("motorcycle", 0.10),
    ("bus", 0.089),
    ("train", 0.041),
    ("subway", 0.03),
    ("plane", 0.255),
    ("bicycle", 0.0),
    ("walking", 0.0),
];

// kg CO2e per unit of monthly consumption (kWh, m3, litre)
const ENERGY: FactorTable = &[
    ("electricity", 0.233),
    ("natural_gas", 0.184),
    ("heating_oil", 0.264),
    ("propane", 0.215),
    ("solar", 0.0),
];

// kg CO2e per kg eaten
const FOOD: FactorTable = &[
    ("beef", 27.0),
    ("lamb", 39.2),
    ("pork", 12.1),
    ("chicken", 6.9),
    ("fish", 6.1),
    ("cheese", 13.5),
    ("eggs", 4.8),
    ("milk", 1.9),
    ("rice", 2.7),
    ("tofu", 2.0),
    ("vegetables", 2.0),
    ("fruits", 1.1),
];

// kg CO2e per item bought
const SHOPPING: FactorTable = &[
    ("clothing", 15.0),
    ("shoes", 14.0),
    ("electronics", 70.0),
    ("furniture", 90.0),
    ("books", 2.5),
    ("plastic_goods", 6.0),
];

// kg CO2e per kg discarded
const WASTE: FactorTable = &[
    ("landfill", 0.57),
    ("recycling", 0.21),
    ("compost", 0.1),
    ("food_waste", 0.7),
];

fn table(category: Category) -> FactorTable {
    match category {
        Category::Transport => TRANSPORT,
        Category::Energy => ENERGY,
        Category::Food => FOOD,
        Category::Shopping => SHOPPING,
        Category::Waste => WASTE,
    }
}

/// Emission factor for `(category, type)`, `None` when the type is not in the table.
pub fn emission_factor(category: Category, habit_type: &str) -> Option<f64> {
    table(category)
        .iter()
        .find(|(name, _)| *name == habit_type)
        .map(|(_, factor)| *factor)
}

/// Occurrences per month for a repeating trip
pub fn frequency_multiplier(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Daily => 30.0,
        Frequency::Weekdays => 22.0,
        Frequency::TwiceWeekly => 8.0,
        Frequency::Weekly => 4.0,
        Frequency::Monthly => 1.0,
    }
}

/// Known types for a category, in table order
pub fn known_types(category: Category) -> Vec<&'static str> {
    table(category).iter().map(|(name, _)| *name).collect()
}
