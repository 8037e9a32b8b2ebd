mod command;
mod lenient;
pub mod mealplan;
pub mod planner;
pub mod recipe;
pub mod shopping;

pub use command::*;
