// HTTP routes
pub mod health;
pub mod pages;
pub mod students;

pub use health::*;
pub use pages::*;
pub use students::*;
