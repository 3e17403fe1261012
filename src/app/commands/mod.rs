pub mod health;
pub mod recommend;
