pub mod cycle;
pub mod energy;
pub mod profile;
pub mod recommend;
