pub mod extraction;
pub mod facts;
