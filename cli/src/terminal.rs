pub mod highlight;
pub mod logging;
