pub mod calories;
pub mod stamina;

pub use calories::estimate_calories;
pub use stamina::{evaluate_stamina, StaminaRating};
