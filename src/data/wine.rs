//! Physicochemical features of the wine quality dataset.

/// Number of predictor columns in the wine quality dataset.
pub const WINE_FEATURE_COUNT: usize = 11;

/// Feature names in file column order.
pub const WINE_FEATURES: [&str; WINE_FEATURE_COUNT] = [
    "Fixed acidity",
    "Volatile acidity",
    "Citric acid",
    "Residual sugar",
    "Chlorides",
    "Free sulfur dioxide",
    "Total sulfur dioxide",
    "Density",
    "pH",
    "Sulphates",
    "Alcohol",
];
