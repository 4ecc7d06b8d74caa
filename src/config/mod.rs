//! Where Budgetly keeps its files and the preferences stored alongside them

pub mod paths;
pub mod settings;

pub use paths::BudgetlyPaths;
pub use settings::Settings;
