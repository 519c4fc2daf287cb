//! Password audit library
//!
//! This library scores password strength against five criteria, checks
//! passwords against the Pwned Passwords breach corpus with a k-anonymity
//! range query, and generates random passwords.
//!
//! # Features
//!
//! - `async` (default): Enables the async breach lookup with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive `pwd-audit` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_audit::{evaluate_password_strength, generate_password, BreachChecker};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let (score, criteria) = evaluate_password_strength(&password);
//! println!("Score: {}/5 ({})", score, criteria.strength());
//!
//! let checker = BreachChecker::new().expect("Failed to build HTTP client");
//! match checker.is_breached(&password) {
//!     Ok(true) => println!("Found in a data breach"),
//!     Ok(false) => println!("Not found"),
//!     Err(e) => println!("Breach status unknown: {}", e),
//! }
//!
//! let generated = generate_password(16).expect("length is not negative");
//! ```

// Internal modules
mod breach;
mod evaluator;
mod generator;
mod report;
mod sections;
mod types;

// Public API
pub use breach::{
    BreachChecker, BreachError, HttpRangeTransport, PREFIX_LEN, PWNED_RANGE_URL, RangeTransport,
    is_breached, password_digest,
};
pub use evaluator::evaluate_password_strength;
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GenerateError, generate_password, generate_password_with_rng,
};
pub use report::{Comparison, PairReport, compare};
pub use sections::PUNCTUATION;
pub use types::{BreachStatus, CriteriaResult, Criterion, PasswordStrength};

#[cfg(feature = "async")]
pub use breach::{breach_status_tx, check_pwned_async};
