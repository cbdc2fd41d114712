pub mod defaults;
pub mod estimate;
