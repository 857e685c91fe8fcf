pub mod domain;
pub mod enrollment_use_cases;
pub mod ports;
pub mod services;
